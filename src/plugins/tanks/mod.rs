//! Tanks plugin: pieces shared by the player and enemy tanks.
//!
//! A tank is a hull entity (body, collider, `TurretTarget`, `Cooldown`) with one
//! child entity carrying `Turret`. Despawning the hull despawns the turret.
//!
//! ```text
//! Hull (PlayerTank | EnemyTank, TurretTarget, Cooldown, RigidBody, Collider)
//!  └── Turret (rotates toward TurretTarget)
//!       └── barrel sprite
//! ```

use avian2d::prelude::*;
use bevy::math::bounding::{Aabb2d, BoundingCircle, IntersectsVolume};
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::{
    layers::{enemy_layers, player_layers},
    state::GameState,
    tunables::Tunables,
};
use crate::plugins::level::Obstacle;

pub const TANK_Z: f32 = 1.0;

/// Shoot cooldown. Ready once `remaining` reaches zero.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    remaining: f32,
    period: f32,
}

impl Cooldown {
    /// Can fire immediately.
    pub fn ready(period: f32) -> Self {
        Self {
            remaining: 0.0,
            period: period.max(0.0),
        }
    }

    /// Must wait a full period before the first shot.
    pub fn primed(period: f32) -> Self {
        Self {
            remaining: period.max(0.0),
            period: period.max(0.0),
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Restart the full period.
    #[inline]
    pub fn trigger(&mut self) {
        self.remaining = self.period;
    }

    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }
}

/// World point the tank's turret tracks.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct TurretTarget(pub Vec2);

/// Marker for the turret child of a hull.
#[derive(Component, Debug, Clone, Copy)]
pub struct Turret;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TankKind {
    Player,
    Enemy,
}

impl TankKind {
    fn hull_color(self) -> Color {
        match self {
            Self::Player => Color::srgb(0.22, 0.42, 0.78),
            Self::Enemy => Color::srgb(0.78, 0.22, 0.20),
        }
    }

    fn turret_color(self) -> Color {
        match self {
            Self::Player => Color::srgb(0.14, 0.28, 0.55),
            Self::Enemy => Color::srgb(0.52, 0.13, 0.12),
        }
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Update, rotate_turrets.run_if(in_state(GameState::Playing)));
}

/// Spawn a hull and its turret. Role components (`PlayerTank`/`EnemyTank`,
/// `Cooldown`) are added by the caller.
pub fn spawn_tank(
    commands: &mut Commands,
    kind: TankKind,
    name: String,
    at: Vec2,
    heading: f32,
    tunables: &Tunables,
) -> Entity {
    let r = tunables.tank_radius;
    let hull_size = Vec2::new(r * 2.2, r * 1.8);

    let (rigid_body, layers) = match kind {
        TankKind::Player => (RigidBody::Dynamic, player_layers()),
        TankKind::Enemy => (RigidBody::Static, enemy_layers()),
    };
    let body = (
        rigid_body,
        Collider::circle(r),
        Mass(1.0),
        LockedAxes::ROTATION_LOCKED,
        LinearDamping(tunables.tank_linear_damping),
        Friction::new(1.0),
        Restitution::new(0.0),
        layers,
    );

    let turret_color = kind.turret_color();
    let barrel_length = tunables.barrel_length;

    commands
        .spawn((
            Name::new(name),
            TurretTarget(at + Vec2::from_angle(heading) * barrel_length),
            Sprite::from_color(kind.hull_color(), hull_size),
            Transform::from_translation(at.extend(TANK_Z))
                .with_rotation(Quat::from_rotation_z(heading)),
            body,
            Occluder2d::circle(r),
            DespawnOnExit(GameState::Playing),
        ))
        .with_children(|hull| {
            hull.spawn((
                Name::new("Turret"),
                Turret,
                Sprite::from_color(turret_color, Vec2::splat(r)),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ))
            .with_children(|turret| {
                turret.spawn((
                    Sprite::from_color(turret_color, Vec2::new(barrel_length, r * 0.35)),
                    Transform::from_xyz(barrel_length * 0.5, 0.0, 0.0),
                ));
            });
        })
        .id()
}

/// Unit aim vector from `origin` toward `target`; straight up when they coincide.
#[inline]
pub fn aim_direction(origin: Vec2, target: Vec2) -> Vec2 {
    (target - origin).try_normalize().unwrap_or(Vec2::Y)
}

/// Whether the barrel tip pointing from `origin` toward `target` overlaps any obstacle.
///
/// Firing through a wall would spawn the bullet on the far side.
pub fn barrel_blocked<'a>(
    origin: Vec2,
    target: Vec2,
    tunables: &Tunables,
    obstacles: impl IntoIterator<Item = (&'a Transform, &'a Obstacle)>,
) -> bool {
    let tip = origin + aim_direction(origin, target) * tunables.barrel_length;
    let barrel = BoundingCircle::new(tip, tunables.tank_radius * 0.35);

    obstacles.into_iter().any(|(tf, obstacle)| {
        barrel.intersects(&Aabb2d::new(tf.translation.truncate(), obstacle.half_size))
    })
}

/// Turn each turret toward its hull's target.
///
/// The turret is a child, so its local rotation has the hull heading removed.
fn rotate_turrets(
    q_hulls: Query<(&Transform, &TurretTarget), Without<Turret>>,
    mut q_turrets: Query<(&ChildOf, &mut Transform), With<Turret>>,
) {
    for (child_of, mut tf) in &mut q_turrets {
        let Ok((hull_tf, target)) = q_hulls.get(child_of.parent()) else {
            continue;
        };

        let origin = hull_tf.translation.truncate();
        let world_angle = aim_direction(origin, target.0).to_angle();
        let (_, _, hull_angle) = hull_tf.rotation.to_euler(EulerRot::XYZ);

        tf.rotation = Quat::from_rotation_z(world_angle - hull_angle);
    }
}

#[cfg(test)]
mod tests;
