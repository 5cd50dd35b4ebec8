//! Enemies plugin: static tanks that aim straight at the player's last known
//! position and fire on a fixed cooldown. No pathfinding.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::{schedule::FrameSet, session::Session, state::GameState, tunables::Tunables};
use crate::plugins::level::LevelSet;
use crate::plugins::player::PlayerTank;
use crate::plugins::projectiles::messages::{BulletOwner, SpawnBulletRequest};
use crate::plugins::tanks::{aim_direction, spawn_tank, Cooldown, TankKind, TurretTarget};

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct EnemyTank {
    /// Player position as of the most recent tick with a live player.
    pub last_seen_player: Vec2,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_enemies)
        .add_systems(FixedPostUpdate, enemy_ai.in_set(FrameSet::Ai));
}

fn spawn_enemies(
    mut commands: Commands,
    levels: Res<LevelSet>,
    session: Res<Session>,
    tunables: Res<Tunables>,
) {
    let Some(level) = levels.get(session.level) else {
        return;
    };
    let tile = tunables.tile_size;

    for (i, &cell) in level.enemies.iter().enumerate() {
        let at = level.world_position(cell, tile);
        let hull = spawn_tank(
            &mut commands,
            TankKind::Enemy,
            format!("Enemy {i}"),
            at,
            0.0,
            &tunables,
        );

        commands.entity(hull).insert((
            EnemyTank {
                last_seen_player: at,
            },
            // First shot only after a full period, so nothing fires on frame one.
            Cooldown::primed(tunables.enemy_fire_cooldown),
        ));
    }
}

/// Track the player, then fire when the cooldown allows and tick it otherwise.
///
/// With no live player the enemies keep shooting at the last seen position.
fn enemy_ai(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    q_player: Query<&Transform, (With<PlayerTank>, Without<EnemyTank>)>,
    mut q_enemies: Query<(&Transform, &mut EnemyTank, &mut TurretTarget, &mut Cooldown)>,
    mut writer: MessageWriter<SpawnBulletRequest>,
) {
    let player = q_player.single().ok().map(|tf| tf.translation.truncate());
    let dt = time.delta_secs();

    for (tf, mut enemy, mut target, mut cooldown) in &mut q_enemies {
        if let Some(player) = player {
            enemy.last_seen_player = player;
            target.0 = player;
        }

        if !cooldown.is_ready() {
            cooldown.tick(dt);
            continue;
        }

        let origin = tf.translation.truncate();
        let dir = aim_direction(origin, enemy.last_seen_player);
        writer.write(SpawnBulletRequest {
            owner: BulletOwner::Enemy,
            pos: origin + dir * tunables.muzzle_offset,
            vel: dir * tunables.bullet_speed,
        });
        cooldown.trigger();
    }
}
