use std::f32::consts::{FRAC_PI_2, PI};

use avian2d::prelude::*;
use bevy::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;

#[test]
fn cooldown_ready_trigger_and_tick() {
    let mut cd = Cooldown::ready(0.5);
    assert!(cd.is_ready());

    cd.trigger();
    assert!(!cd.is_ready());
    assert_eq!(cd.remaining(), 0.5);

    cd.tick(0.2);
    assert!(!cd.is_ready());
    assert!((cd.remaining() - 0.3).abs() < 1e-6);

    // Never goes negative.
    cd.tick(10.0);
    assert!(cd.is_ready());
    assert_eq!(cd.remaining(), 0.0);
}

#[test]
fn primed_cooldown_waits_one_period() {
    let mut cd = Cooldown::primed(1.0);
    assert!(!cd.is_ready());
    cd.tick(0.99);
    assert!(!cd.is_ready());
    cd.tick(0.01);
    assert!(cd.is_ready());
}

#[test]
fn aim_direction_is_unit_and_has_fallback() {
    let d = aim_direction(Vec2::ZERO, Vec2::new(3.0, 4.0));
    assert!((d.length() - 1.0).abs() < 1e-6);
    assert_eq!(aim_direction(Vec2::ONE, Vec2::ONE), Vec2::Y);
}

#[test]
fn barrel_blocked_only_when_tip_overlaps_obstacle() {
    let tunables = Tunables {
        barrel_length: 20.0,
        tank_radius: 10.0,
        ..default()
    };
    let wall = (
        Transform::from_xyz(30.0, 0.0, 0.0),
        Obstacle {
            half_size: Vec2::splat(8.0),
        },
    );

    // Tip at x=20, circle radius 3.5 reaches x=23.5 > wall edge at 22.
    assert!(barrel_blocked(
        Vec2::ZERO,
        Vec2::new(100.0, 0.0),
        &tunables,
        [(&wall.0, &wall.1)],
    ));

    // Aiming away from the wall.
    assert!(!barrel_blocked(
        Vec2::ZERO,
        Vec2::new(-100.0, 0.0),
        &tunables,
        [(&wall.0, &wall.1)],
    ));
}

#[test]
fn spawn_tank_builds_hull_with_turret_child() {
    let mut world = World::new();
    let tunables = Tunables::default();

    let hull = run_system_once(&mut world, move |mut commands: Commands| {
        spawn_tank(
            &mut commands,
            TankKind::Enemy,
            "Enemy".into(),
            Vec2::new(5.0, 6.0),
            0.0,
            &tunables,
        )
    });

    assert!(matches!(world.get::<RigidBody>(hull), Some(RigidBody::Static)));
    assert_eq!(
        world.get::<Transform>(hull).unwrap().translation.truncate(),
        Vec2::new(5.0, 6.0)
    );

    let turrets: Vec<Entity> = world
        .query_filtered::<(Entity, &ChildOf), With<Turret>>()
        .iter(&world)
        .filter(|(_, child_of)| child_of.parent() == hull)
        .map(|(e, _)| e)
        .collect();
    assert_eq!(turrets.len(), 1);

    // One despawn removes the whole tank.
    world.entity_mut(hull).despawn();
    assert!(world.get_entity(turrets[0]).is_err());
}

#[test]
fn turret_rotation_compensates_for_hull_heading() {
    let mut world = World::new();

    // Hull faces left (180 degrees), target straight up.
    let hull = world
        .spawn((
            Transform::from_xyz(0.0, 0.0, 1.0).with_rotation(Quat::from_rotation_z(PI)),
            TurretTarget(Vec2::new(0.0, 50.0)),
        ))
        .id();
    let turret = world
        .spawn((Turret, Transform::default(), ChildOf(hull)))
        .id();

    run_system_once(&mut world, super::rotate_turrets);

    let local = world.get::<Transform>(turret).unwrap().rotation;
    let (_, _, local_angle) = local.to_euler(EulerRot::XYZ);
    let world_angle = local_angle + PI;

    // Same direction as +90 degrees, modulo a full turn.
    let d = Vec2::from_angle(world_angle);
    assert!((d - Vec2::from_angle(FRAC_PI_2)).length() < 1e-4);
}
