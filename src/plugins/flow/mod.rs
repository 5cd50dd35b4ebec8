//! Flow plugin: level-end grace countdown and the transitions out of `Playing`.
//!
//! ```text
//! Playing --(no enemies | player dead)--> grace timer --expires-->
//!     player dead      -> GameOver(Defeat)
//!     more levels      -> NextLevel -> Playing (index + 1)
//!     last level done  -> GameOver(Victory)
//! ```

use bevy::prelude::*;

use crate::common::{
    schedule::FrameSet,
    session::{Outcome, Session},
    state::GameState,
    tunables::Tunables,
};
use crate::plugins::enemies::EnemyTank;
use crate::plugins::level::LevelSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTransition {
    NextLevel,
    GameOver(Outcome),
}

/// Where a finished level leads. A dead player always loses, even when the
/// last enemy died in the same tick.
pub fn resolve_level_end(player_dead: bool, levels: &LevelSet, index: usize) -> LevelTransition {
    if player_dead {
        LevelTransition::GameOver(Outcome::Defeat)
    } else if levels.has_level_after(index) {
        LevelTransition::NextLevel
    } else {
        LevelTransition::GameOver(Outcome::Victory)
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(FixedPostUpdate, advance_level_end.in_set(FrameSet::LevelFlow))
        .add_systems(OnEnter(GameState::NextLevel), advance_to_next_level)
        .add_systems(OnEnter(GameState::GameOver), announce_game_over)
        .add_systems(Update, quit_after_game_over.run_if(in_state(GameState::GameOver)));
}

fn advance_level_end(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    levels: Res<LevelSet>,
    mut session: ResMut<Session>,
    q_enemies: Query<(), With<EnemyTank>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let level_over = session.player_dead || q_enemies.is_empty();

    if session.grace.is_none() {
        if level_over {
            debug!("level over, grace period of {}s started", tunables.level_end_grace);
            session.grace = Some(Timer::from_seconds(tunables.level_end_grace, TimerMode::Once));
        }
        return;
    }
    let Some(grace) = session.grace.as_mut() else {
        return;
    };

    grace.tick(time.delta());
    if !grace.just_finished() {
        return;
    }

    match resolve_level_end(session.player_dead, &levels, session.level) {
        LevelTransition::NextLevel => {
            info!("level {} cleared", session.level + 1);
            next.set(GameState::NextLevel);
        }
        LevelTransition::GameOver(outcome) => {
            session.outcome = Some(outcome);
            next.set(GameState::GameOver);
        }
    }
}

fn advance_to_next_level(mut session: ResMut<Session>, mut next: ResMut<NextState<GameState>>) {
    session.level += 1;
    next.set(GameState::Playing);
}

fn announce_game_over(session: Res<Session>) {
    match session.outcome {
        Some(outcome) => info!(
            "game over: {outcome:?} with {} enemy tanks destroyed",
            session.tanks_destroyed
        ),
        None => warn!("entered GameOver without an outcome"),
    }
}

fn quit_after_game_over(keys: Option<Res<ButtonInput<KeyCode>>>, mut exit: MessageWriter<AppExit>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests;
