//! Tunable gameplay constants.
//!
//! Distances are in pixels, durations in seconds.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Edge length of one layout cell.
    pub tile_size: f32,
    pub tank_radius: f32,
    /// Force applied per held direction key (player mass is 1).
    pub player_move_force: f32,
    pub tank_linear_damping: f32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    /// Distance from the tank centre at which bullets appear.
    pub muzzle_offset: f32,
    pub barrel_length: f32,
    pub player_fire_cooldown: f32,
    pub enemy_fire_cooldown: f32,
    pub mine_fuse: f32,
    pub level_end_grace: f32,
    pub explosion_frame_secs: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            tile_size: 48.0,
            tank_radius: 18.0,
            player_move_force: 1600.0,
            tank_linear_damping: 8.0,
            bullet_speed: 420.0,
            bullet_radius: 5.0,
            muzzle_offset: 40.0,
            barrel_length: 28.0,
            player_fire_cooldown: 0.5,
            enemy_fire_cooldown: 2.5,
            mine_fuse: 3.0,
            level_end_grace: 1.0,
            explosion_frame_secs: 0.08,
        }
    }
}
