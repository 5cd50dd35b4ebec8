//! Projectiles plugin: message-based bullet spawning, mines, and the bullet
//! collision-resolution pass.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//!     player::request_player_fire   left click  -> SpawnBulletRequest
//!     player::drop_mine             space       -> Mine
//!                |
//!                v
//!   FixedPostUpdate (after avian writes CollisionStart)
//!     FrameSet::Ai       enemies::enemy_ai      -> SpawnBulletRequest
//!     FrameSet::Fuses    tick_mines             Mine -> Explosion
//!     FrameSet::Combat   resolve_bullet_hits    CollisionStart -> despawns,
//!                                               Explosion, Wreck, Session
//!     FrameSet::Spawn    spawn_requested_bullets SpawnBulletRequest -> Bullet
//! ```
//!
//! Producers never touch bullet entities; the spawn pass is the single writer.

pub mod collision;
pub mod components;
pub mod messages;
pub mod mines;
pub mod spawn;

use bevy::prelude::*;

use crate::common::schedule::FrameSet;

pub use components::{Bullet, Mine};
pub use messages::{BulletOwner, SpawnBulletRequest};

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SpawnBulletRequest>();

        app.add_systems(
            FixedPostUpdate,
            (
                mines::tick_mines.in_set(FrameSet::Fuses),
                collision::resolve_bullet_hits.in_set(FrameSet::Combat),
                spawn::spawn_requested_bullets.in_set(FrameSet::Spawn),
            ),
        );
    }
}
