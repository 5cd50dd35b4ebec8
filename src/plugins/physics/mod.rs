//! Physics plugin: avian2d with zero gravity (top-down), plus the ordering of
//! the game's per-tick passes relative to the physics step.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{schedule::FrameSet, state::GameState, tunables::Tunables};

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));
    app.insert_resource(Gravity(Vec2::ZERO));

    app.configure_sets(
        FixedPostUpdate,
        (
            FrameSet::Ai,
            FrameSet::Fuses,
            FrameSet::Combat,
            FrameSet::Spawn,
            FrameSet::LevelFlow,
            FrameSet::Cooldowns,
        )
            .chain()
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::Playing)),
    );
}
