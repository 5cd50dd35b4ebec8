//! Effects plugin: explosion animation and wrecks left by destroyed tanks.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};

pub const EXPLOSION_FRAMES: usize = 5;

const EXPLOSION_Z: f32 = 3.0;
const WRECK_Z: f32 = 0.7;

/// Per-frame scale, relative to the tank radius.
const FRAME_SCALE: [f32; EXPLOSION_FRAMES] = [0.6, 1.2, 1.8, 2.1, 1.4];

/// Fixed five-frame animation; the entity removes itself after the last frame.
#[derive(Component, Debug, Clone)]
pub struct Explosion {
    frame: usize,
    timer: Timer,
}

impl Explosion {
    pub fn new(frame_secs: f32) -> Self {
        Self {
            frame: 0,
            timer: Timer::from_seconds(frame_secs, TimerMode::Repeating),
        }
    }

    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advance by `dt`; returns `false` once the animation has run past its last frame.
    pub fn advance(&mut self, dt: std::time::Duration) -> bool {
        self.timer.tick(dt);
        self.frame += self.timer.times_finished_this_tick() as usize;
        self.frame < EXPLOSION_FRAMES
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Wreck;

fn frame_look(frame: usize, radius: f32) -> (Color, Vec2) {
    let t = frame as f32 / (EXPLOSION_FRAMES - 1) as f32;
    let color = Color::srgba(1.0, 0.85 - 0.55 * t, 0.25 - 0.2 * t, 1.0 - 0.6 * t);
    let size = Vec2::splat(radius * 2.0 * FRAME_SCALE[frame.min(EXPLOSION_FRAMES - 1)]);
    (color, size)
}

pub fn plugin(app: &mut App) {
    app.add_systems(Update, animate_explosions);
}

pub fn spawn_explosion(commands: &mut Commands, at: Vec2, tunables: &Tunables) -> Entity {
    let (color, size) = frame_look(0, tunables.tank_radius);
    commands
        .spawn((
            Name::new("Explosion"),
            Explosion::new(tunables.explosion_frame_secs),
            Sprite::from_color(color, size),
            Transform::from_translation(at.extend(EXPLOSION_Z)),
            DespawnOnExit(GameState::Playing),
        ))
        .id()
}

/// Burnt-out hull left where a tank was destroyed. No collider.
pub fn spawn_wreck(commands: &mut Commands, at: Vec2, tunables: &Tunables) -> Entity {
    let r = tunables.tank_radius;
    commands
        .spawn((
            Name::new("Wreck"),
            Wreck,
            Sprite::from_color(Color::srgb(0.25, 0.22, 0.20), Vec2::new(r * 2.2, r * 1.8)),
            Transform::from_translation(at.extend(WRECK_Z)),
            DespawnOnExit(GameState::Playing),
        ))
        .id()
}

fn animate_explosions(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(Entity, &mut Explosion, &mut Sprite)>,
) {
    for (entity, mut explosion, mut sprite) in &mut q {
        let before = explosion.frame();
        if !explosion.advance(time.delta()) {
            commands.entity(entity).despawn();
            continue;
        }
        if explosion.frame() != before {
            let (color, size) = frame_look(explosion.frame(), tunables.tank_radius);
            sprite.color = color;
            sprite.custom_size = Some(size);
        }
    }
}
