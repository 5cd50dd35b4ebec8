//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `AssetPlugin` + `ScenePlugin` so avian's collider machinery finds `SceneSpawner`.
//! - `tank_battle::game::configure_headless` installs the gameplay plugins.
//!
//! Time is stepped manually by one fixed timestep per `update()`, so every
//! frame after the first runs exactly one `FixedPostUpdate` pass.

#![allow(dead_code)]

use std::time::Duration;

use avian2d::prelude::*;
use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use tank_battle::common::{state::GameState, tunables::Tunables};
use tank_battle::plugins::level::LevelSet;
use tank_battle::plugins::projectiles::{Bullet, BulletOwner};

/// 1/64 s, bevy's default fixed timestep.
pub const TICK: Duration = Duration::from_micros(15_625);

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    tank_battle::game::configure_headless(&mut app);
    // `App::run` normally does this; manual `update()` stepping must do it itself.
    app.finish();
    app.cleanup();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));
    app
}

/// Headless app playing `levels` with quiet enemies, stepped into the first level.
pub fn app_with_levels(levels: &str) -> App {
    let mut app = app_headless();
    app.insert_resource(LevelSet::parse(levels).expect("test layout must be valid"));
    app.insert_resource(Tunables {
        enemy_fire_cooldown: 1000.0,
        ..default()
    });

    // First frame enters `Playing` and spawns the level; its time delta is zero.
    app.update();
    app
}

pub fn step(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Report a fresh bullet touching `target` as avian would, then run one frame.
pub fn shoot(app: &mut App, target: Entity) -> Entity {
    let world = app.world_mut();
    let bullet = world
        .spawn((Bullet::new(BulletOwner::Player), Transform::default()))
        .id();
    world.write_message(CollisionStart {
        collider1: bullet,
        collider2: target,
        body1: Some(bullet),
        body2: Some(target),
    });

    app.update();
    bullet
}

pub fn entities_with<T: Component>(app: &mut App) -> Vec<Entity> {
    app.world_mut()
        .query_filtered::<Entity, With<T>>()
        .iter(app.world())
        .collect()
}
