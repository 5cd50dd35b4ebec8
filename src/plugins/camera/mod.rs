//! Camera plugin (render-only).
//!
//! Levels are centred on the origin and fit the window, so the camera is
//! static. It lives for the whole app, across level reloads.
//!
//! ```text
//! Startup:   spawn MainCamera (+ FireflyConfig for lighting)
//! PreUpdate: cursor (viewport) -> Aim (world), before gameplay reads it in Update
//! ```

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Aim;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera).add_systems(
        PreUpdate,
        update_aim_from_cursor.run_if(in_state(GameState::Playing)),
    );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}

/// Cursor outside the window clears the aim; the turret then holds its last target.
fn update_aim_from_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut aim: ResMut<Aim>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_tf)) = q_camera.single() else {
        return;
    };

    aim.world_cursor = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_tf, cursor).ok());
}
