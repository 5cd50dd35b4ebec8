//! Global state machine.
//!
//! ```text
//! Playing ──(grace)──> NextLevel ──> Playing ... ──(grace)──> GameOver
//! ```
//!
//! Every level entity is spawned with `DespawnOnExit(GameState::Playing)`, so
//! leaving `Playing` clears the level in one place.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Playing,
    /// Transient: bumps the level index and re-enters `Playing`.
    NextLevel,
    GameOver,
}
