//! Player plugin.
//!
//! Pipeline:
//! - Update: arrow-key edges toggle `MoveKeys`; `Aim` retargets the turret;
//!   left click writes a `SpawnBulletRequest`; space drops a mine
//! - FixedUpdate: held directions set the body's `ConstantForce` (integrated by
//!   the solver), friction drops to zero while moving
//! - FixedPostUpdate (`FrameSet::Cooldowns`): shoot cooldown ticks down
//!
//! Input resources are read through `Option<Res<...>>` so the same systems run
//! as no-ops in headless apps without an input plugin.

use std::f32::consts::PI;

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::{
    schedule::FrameSet, session::Session, state::GameState, tunables::Tunables,
};
use crate::plugins::level::{LevelSet, Obstacle};
use crate::plugins::projectiles::messages::{BulletOwner, SpawnBulletRequest};
use crate::plugins::projectiles::mines::spawn_mine;
use crate::plugins::tanks::{
    aim_direction, barrel_blocked, spawn_tank, Cooldown, TankKind, TurretTarget,
};

#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerTank;

/// Direction keys currently held, maintained from press/release edges.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Sum of the held directions; each key contributes a full unit.
    pub fn push(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.up {
            axis.y += 1.0;
        }
        if self.down {
            axis.y -= 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        axis
    }
}

/// Cursor position in world space. `None` while the cursor is outside the window.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Aim {
    pub world_cursor: Option<Vec2>,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<MoveKeys>()
        .init_resource::<Aim>()
        .add_systems(OnEnter(GameState::Playing), (reset_move_keys, spawn_player))
        .add_systems(
            Update,
            (
                track_move_keys,
                aim_player_turret,
                request_player_fire.after(aim_player_turret),
                drop_mine,
            )
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(FixedUpdate, drive_player.run_if(in_state(GameState::Playing)))
        .add_systems(FixedPostUpdate, tick_player_cooldown.in_set(FrameSet::Cooldowns));
}

/// Re-sync `MoveKeys` from the keyboard on level entry. Edges that happened
/// while not `Playing` were never seen by `track_move_keys`, but keys still
/// held keep driving.
fn reset_move_keys(keys: Option<Res<ButtonInput<KeyCode>>>, mut held: ResMut<MoveKeys>) {
    let Some(keys) = keys else {
        *held = MoveKeys::default();
        return;
    };

    *held = MoveKeys {
        up: keys.pressed(KeyCode::ArrowUp),
        down: keys.pressed(KeyCode::ArrowDown),
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
    };
}

fn spawn_player(
    mut commands: Commands,
    levels: Res<LevelSet>,
    session: Res<Session>,
    tunables: Res<Tunables>,
) {
    let Some(level) = levels.get(session.level) else {
        return;
    };
    let at = level.world_position(level.player, tunables.tile_size);

    let player = spawn_tank(
        &mut commands,
        TankKind::Player,
        "Player".into(),
        at,
        PI,
        &tunables,
    );
    commands.entity(player).insert((
        PlayerTank,
        Cooldown::ready(tunables.player_fire_cooldown),
        LinearVelocity::ZERO,
        ConstantForce::default(),
        TranslationInterpolation,
    ));
}

fn track_move_keys(keys: Option<Res<ButtonInput<KeyCode>>>, mut held: ResMut<MoveKeys>) {
    let Some(keys) = keys else {
        return;
    };
    let held = &mut *held;

    for (code, flag) in [
        (KeyCode::ArrowUp, &mut held.up),
        (KeyCode::ArrowDown, &mut held.down),
        (KeyCode::ArrowLeft, &mut held.left),
        (KeyCode::ArrowRight, &mut held.right),
    ] {
        if keys.just_pressed(code) {
            *flag = true;
        } else if keys.just_released(code) {
            *flag = false;
        }
    }
}

fn aim_player_turret(aim: Res<Aim>, mut q_player: Query<&mut TurretTarget, With<PlayerTank>>) {
    let Some(cursor) = aim.world_cursor else {
        return;
    };
    let Ok(mut target) = q_player.single_mut() else {
        return;
    };
    target.0 = cursor;
}

/// Producer: left click writes a bullet request aimed at the turret target.
///
/// Gated by the shoot cooldown and by the barrel not poking into a wall.
fn request_player_fire(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    tunables: Res<Tunables>,
    mut q_player: Query<(&Transform, &TurretTarget, &mut Cooldown), With<PlayerTank>>,
    q_obstacles: Query<(&Transform, &Obstacle), Without<PlayerTank>>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok((tf, target, mut cooldown)) = q_player.single_mut() else {
        debug!("fire ignored: no player");
        return;
    };
    if !cooldown.is_ready() {
        debug!("fire ignored: cooldown {:.2}s", cooldown.remaining());
        return;
    }

    let origin = tf.translation.truncate();
    if barrel_blocked(origin, target.0, &tunables, &q_obstacles) {
        debug!("fire ignored: barrel inside an obstacle");
        return;
    }

    let dir = aim_direction(origin, target.0);
    writer.write(SpawnBulletRequest {
        owner: BulletOwner::Player,
        pos: origin + dir * tunables.muzzle_offset,
        vel: dir * tunables.bullet_speed,
    });
    cooldown.trigger();
}

fn drop_mine(
    mut commands: Commands,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    tunables: Res<Tunables>,
    q_player: Query<&Transform, With<PlayerTank>>,
) {
    let Some(keys) = keys else {
        return;
    };
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    let Ok(tf) = q_player.single() else {
        return;
    };

    let at = tf.translation.truncate();
    debug!("mine dropped at {at}");
    spawn_mine(&mut commands, at, &tunables);
}

/// Push the player in every held direction; friction is zero while moving and
/// back to full on the first tick with no direction held.
///
/// The force stays on the body until the next tick rewrites it, so the solver
/// integrates it against the body's mass every step.
fn drive_player(
    tunables: Res<Tunables>,
    keys: Res<MoveKeys>,
    mut q_player: Query<(&mut ConstantForce, &mut Friction), With<PlayerTank>>,
) {
    let Ok((mut force, mut friction)) = q_player.single_mut() else {
        return;
    };

    if keys.any() {
        force.0 = keys.push() * tunables.player_move_force;
        *friction = Friction::new(0.0);
    } else {
        force.0 = Vec2::ZERO;
        *friction = Friction::new(1.0);
    }
}

fn tick_player_cooldown(
    time: Res<Time<Fixed>>,
    mut q_player: Query<&mut Cooldown, With<PlayerTank>>,
) {
    let dt = time.delta_secs();
    for mut cooldown in &mut q_player {
        cooldown.tick(dt);
    }
}
