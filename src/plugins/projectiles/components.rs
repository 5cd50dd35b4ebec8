use bevy::prelude::*;

use super::messages::BulletOwner;

pub const BULLET_Z: f32 = 2.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct Bullet {
    pub owner: BulletOwner,
    /// Wall contacts so far. Informational only; bullets live until they hit
    /// a tank or another bullet, or the level ends.
    pub ricochets: u32,
}

impl Bullet {
    pub fn new(owner: BulletOwner) -> Self {
        Self {
            owner,
            ricochets: 0,
        }
    }
}

/// A dropped mine. Purely a timer: on expiry it leaves an explosion behind.
#[derive(Component, Debug, Clone)]
pub struct Mine {
    pub fuse: Timer,
}
