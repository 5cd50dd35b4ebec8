//! Spawn consumer: turn queued requests into bullet entities.
//!
//! Bullets are plain dynamic bodies with restitution 1, so ricochets off walls
//! come from the solver. `CollisionEventsEnabled` opts them into
//! `CollisionStart` messages for the resolution pass.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::bullet_layers, state::GameState, tunables::Tunables};

use super::components::{Bullet, BULLET_Z};
use super::messages::{BulletOwner, SpawnBulletRequest};

fn bullet_color(owner: BulletOwner) -> Color {
    match owner {
        BulletOwner::Player => Color::srgb(0.16, 0.20, 0.35),
        BulletOwner::Enemy => Color::srgb(0.45, 0.10, 0.08),
    }
}

pub fn spawn_bullet(
    commands: &mut Commands,
    req: &SpawnBulletRequest,
    tunables: &Tunables,
) -> Entity {
    let r = tunables.bullet_radius;
    let heading = req.vel.to_angle();

    commands
        .spawn((
            Name::new("Bullet"),
            Bullet::new(req.owner),
            Sprite::from_color(bullet_color(req.owner), Vec2::new(r * 2.6, r * 1.6)),
            Transform::from_translation(req.pos.extend(BULLET_Z))
                .with_rotation(Quat::from_rotation_z(heading)),
            RigidBody::Dynamic,
            Collider::circle(r),
            Mass(0.5),
            LockedAxes::ROTATION_LOCKED,
            Restitution::new(1.0).with_combine_rule(CoefficientCombine::Max),
            Friction::ZERO,
            LinearVelocity(req.vel),
            bullet_layers(),
            CollisionEventsEnabled,
            TranslationInterpolation,
            DespawnOnExit(GameState::Playing),
        ))
        .id()
}

pub fn spawn_requested_bullets(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<SpawnBulletRequest>,
) {
    for req in reader.read() {
        let bullet = spawn_bullet(&mut commands, req, &tunables);
        debug!("{:?} bullet {bullet} fired from {}", req.owner, req.pos);
    }
}
