use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::{session::Session, tunables::Tunables};
use crate::plugins::effects::{spawn_explosion, spawn_wreck};
use crate::plugins::enemies::EnemyTank;
use crate::plugins::level::Obstacle;
use crate::plugins::player::PlayerTank;

use super::components::Bullet;

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

/// This tick's bullet contacts, sorted by what the bullet touched.
#[derive(Default)]
struct Contacts {
    enemies: Vec<(Entity, Entity)>,
    player: Vec<(Entity, Entity)>,
    walls: Vec<Entity>,
    bullets: Vec<(Entity, Entity)>,
}

/// Resolve every bullet contact started this tick.
///
/// Categories are handled in a fixed order: enemies, player, walls, then
/// bullet pairs. Bullet pairs always remove both bullets, even one that was
/// already spent on a tank earlier in the same pass.
pub fn resolve_bullet_hits(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    tunables: Res<Tunables>,
    mut session: ResMut<Session>,
    mut q_bullets: Query<&mut Bullet>,
    q_enemies: Query<&Transform, With<EnemyTank>>,
    q_player: Query<&Transform, With<PlayerTank>>,
    q_obstacles: Query<(), With<Obstacle>>,
    mut spent: Local<HashSet<Entity>>,
    mut destroyed: Local<HashSet<Entity>>,
) {
    spent.clear();
    destroyed.clear();

    let mut contacts = Contacts::default();
    for ev in started.read() {
        let (t1, t2) = targets(ev);
        let b1 = q_bullets.contains(t1.collider);
        let b2 = q_bullets.contains(t2.collider);

        let (bullet, other) = match (b1, b2) {
            (true, true) => {
                contacts.bullets.push((t1.collider, t2.collider));
                continue;
            }
            (true, false) => (t1.collider, t2.gameplay_owner()),
            (false, true) => (t2.collider, t1.gameplay_owner()),
            (false, false) => continue,
        };

        if q_enemies.contains(other) {
            contacts.enemies.push((bullet, other));
        } else if q_player.contains(other) {
            contacts.player.push((bullet, other));
        } else if q_obstacles.contains(other) {
            contacts.walls.push(bullet);
        }
    }

    for (bullet, enemy) in contacts.enemies {
        commands.entity(bullet).try_despawn();
        spent.insert(bullet);

        if !destroyed.insert(enemy) {
            continue;
        }
        let Ok(tf) = q_enemies.get(enemy) else {
            continue;
        };

        let at = tf.translation.truncate();
        spawn_explosion(&mut commands, at, &tunables);
        spawn_wreck(&mut commands, at, &tunables);
        commands.entity(enemy).despawn();
        session.record_kill();
        info!("enemy tank destroyed at {at} ({} total)", session.tanks_destroyed);
    }

    for (bullet, player) in contacts.player {
        commands.entity(bullet).try_despawn();
        spent.insert(bullet);

        if session.player_dead {
            continue;
        }
        let Ok(tf) = q_player.get(player) else {
            continue;
        };

        spawn_explosion(&mut commands, tf.translation.truncate(), &tunables);
        commands.entity(player).despawn();
        session.player_dead = true;
        info!("player tank destroyed");
    }

    for bullet in contacts.walls {
        if spent.contains(&bullet) {
            continue;
        }
        if let Ok(mut b) = q_bullets.get_mut(bullet) {
            b.ricochets += 1;
        }
    }

    for (a, b) in contacts.bullets {
        commands.entity(a).try_despawn();
        commands.entity(b).try_despawn();
    }
}
