//! Mines: dropped by the player, explode when the fuse runs out.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::effects::spawn_explosion;

use super::components::Mine;

const MINE_Z: f32 = 0.6;

pub fn spawn_mine(commands: &mut Commands, at: Vec2, tunables: &Tunables) -> Entity {
    let size = tunables.tank_radius * 0.9;

    commands
        .spawn((
            Name::new("Mine"),
            Mine {
                fuse: Timer::from_seconds(tunables.mine_fuse, TimerMode::Once),
            },
            Sprite::from_color(Color::srgb(0.20, 0.20, 0.18), Vec2::splat(size)),
            Transform::from_translation(at.extend(MINE_Z))
                .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4)),
            DespawnOnExit(GameState::Playing),
        ))
        .id()
}

pub fn tick_mines(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut q_mines: Query<(Entity, &Transform, &mut Mine)>,
) {
    for (entity, tf, mut mine) in &mut q_mines {
        mine.fuse.tick(time.delta());
        if !mine.fuse.is_finished() {
            continue;
        }

        let at = tf.translation.truncate();
        debug!("mine {entity} exploded at {at}");
        spawn_explosion(&mut commands, at, &tunables);
        commands.entity(entity).despawn();
    }
}
