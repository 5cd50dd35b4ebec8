//! Ordered per-tick passes.
//!
//! All sets run in `FixedPostUpdate`, after avian has stepped the world and
//! written this tick's `CollisionStart` messages. Later passes observe the
//! despawns of earlier ones (commands are applied between chained sets).

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Enemy tanks track the player and fire.
    Ai,
    /// Mine fuses.
    Fuses,
    /// Bullet collision resolution.
    Combat,
    /// Queued bullets become entities.
    Spawn,
    /// Level-end countdown and transitions.
    LevelFlow,
    /// Player shoot cooldown.
    Cooldowns,
}
