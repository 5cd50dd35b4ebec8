//! Lighting plugin (Firefly) (render-only).
//!
//! Walls and tanks carry `Occluder2d`; a single warm light follows the player.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::PlayerTank;

#[derive(Component)]
pub struct PlayerLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::Playing), spawn_player_light)
        .add_systems(
            PostUpdate,
            follow_player_light
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::Playing)),
        );
}

fn spawn_player_light(mut commands: Commands) {
    commands.spawn((
        Name::new("PlayerLight"),
        PlayerLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.92, 0.78),
            radius: 520.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::Playing),
    ));
}

/// The light stays where the player died.
fn follow_player_light(
    q_player: Query<&Transform, (With<PlayerTank>, Without<PlayerLight>)>,
    mut q_light: Query<&mut Transform, (With<PlayerLight>, Without<PlayerTank>)>,
) {
    let Ok(tf_player) = q_player.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_player.translation.x;
    tf_light.translation.y = tf_player.translation.y;
}
