//! Game session: the counters that outlive a single level.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

#[derive(Resource, Debug, Default)]
pub struct Session {
    /// Index into the level set.
    pub level: usize,
    /// Cumulative across levels.
    pub tanks_destroyed: u32,
    pub player_dead: bool,
    /// Running once the level has ended, `None` while it is still being fought.
    pub grace: Option<Timer>,
    /// Set exactly once, when the game ends.
    pub outcome: Option<Outcome>,
}

impl Session {
    /// Reset everything that is scoped to a single level.
    pub fn begin_level(&mut self) {
        self.player_dead = false;
        self.grace = None;
    }

    pub fn record_kill(&mut self) {
        self.tanks_destroyed += 1;
    }
}
