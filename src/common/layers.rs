//! Collision layers.

use avian2d::prelude::*;

/// Bullets from both sides share one layer: any bullet can destroy any tank,
/// and bullets cancel each other out.
#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Player,
    Enemy,
    Bullet,
}

pub fn wall_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::World, [Layer::Player, Layer::Enemy, Layer::Bullet])
}

pub fn player_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Player, [Layer::World, Layer::Enemy, Layer::Bullet])
}

pub fn enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::Player, Layer::Bullet])
}

pub fn bullet_layers() -> CollisionLayers {
    CollisionLayers::new(
        Layer::Bullet,
        [Layer::World, Layer::Player, Layer::Enemy, Layer::Bullet],
    )
}
