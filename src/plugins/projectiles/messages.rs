//! Buffered spawn requests.
//!
//! Producers (player input, enemy AI) only write intent; the spawn pass in
//! `FrameSet::Spawn` is the single consumer that creates bullet entities.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnBulletRequest {
    pub owner: BulletOwner,
    pub pos: Vec2,
    pub vel: Vec2,
}
