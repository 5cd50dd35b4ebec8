//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod effects;
pub mod enemies;
pub mod flow;
pub mod level;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod tanks;

// Render-only
pub mod camera;
pub mod hud;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
///
/// `core` must come first: later plugins read `Tunables` while building.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    level::plugin(app);
    tanks::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
    effects::plugin(app);
    flow::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    lighting::plugin(app);
    hud::plugin(app);
}
