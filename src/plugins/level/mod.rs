//! Level plugin: owns the level set and spawns the static part of the current
//! level (floor and obstacles) on every entry into `Playing`.
//!
//! Tanks are spawned by the player/enemies plugins from the same layout.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::{layers::wall_layers, session::Session, state::GameState, tunables::Tunables};

pub mod layout;

pub use layout::{Level, LevelError, LevelSet};

const FLOOR_Z: f32 = 0.0;
const OBSTACLE_Z: f32 = 0.5;

/// A wall tile. `half_size` mirrors the collider so gameplay code can run
/// overlap checks without a physics query.
#[derive(Component, Debug, Clone, Copy)]
pub struct Obstacle {
    pub half_size: Vec2,
}

pub fn plugin(app: &mut App) {
    let levels = LevelSet::builtin()
        .unwrap_or_else(|err| panic!("built-in level set is malformed: {err}"));
    app.insert_resource(levels);

    app.add_systems(
        OnEnter(GameState::Playing),
        (begin_level, spawn_floor, spawn_obstacles),
    );
}

fn begin_level(levels: Res<LevelSet>, mut session: ResMut<Session>) {
    session.begin_level();
    match levels.get(session.level) {
        Some(level) => info!(
            "starting level {}/{}: {} ({} enemies)",
            session.level + 1,
            levels.len(),
            level.name,
            level.enemies.len()
        ),
        None => error!("level index {} is out of range", session.level),
    }
}

fn spawn_obstacles(
    mut commands: Commands,
    levels: Res<LevelSet>,
    session: Res<Session>,
    tunables: Res<Tunables>,
) {
    let Some(level) = levels.get(session.level) else {
        return;
    };
    let tile = tunables.tile_size;
    let wall_color = Color::srgb(0.42, 0.36, 0.30);

    for &cell in &level.obstacles {
        let pos = level.world_position(cell, tile);
        commands.spawn((
            Name::new(format!("Obstacle({}, {})", cell.x, cell.y)),
            Obstacle {
                half_size: Vec2::splat(tile * 0.5),
            },
            Sprite::from_color(wall_color, Vec2::splat(tile)),
            Transform::from_translation(pos.extend(OBSTACLE_Z)),
            RigidBody::Static,
            Collider::rectangle(tile, tile),
            Friction::ZERO,
            Restitution::new(1.0),
            wall_layers(),
            Occluder2d::rectangle(tile, tile),
            DespawnOnExit(GameState::Playing),
        ));
    }
}

/// Checkered floor under the whole map, built from solid-colour sprites.
fn spawn_floor(
    mut commands: Commands,
    levels: Res<LevelSet>,
    session: Res<Session>,
    tunables: Res<Tunables>,
) {
    let Some(level) = levels.get(session.level) else {
        return;
    };
    let tile = tunables.tile_size;

    (0..level.rows)
        .flat_map(|y| (0..level.columns).map(move |x| UVec2::new(x, y)))
        .for_each(|cell| {
            let color = if (cell.x + cell.y) % 2 == 0 {
                Color::srgb(0.93, 0.84, 0.66)
            } else {
                Color::srgb(0.90, 0.81, 0.63)
            };

            commands.spawn((
                Sprite::from_color(color, Vec2::splat(tile)),
                Transform::from_translation(level.world_position(cell, tile).extend(FLOOR_Z)),
                DespawnOnExit(GameState::Playing),
            ));
        });
}
