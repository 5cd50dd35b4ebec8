use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::*;
use crate::common::test_utils::{fixed_time_with_delta, run_system_once};

const TWO_LEVELS: &str = "@One\n#PE#\n@\n@Two\n#EP#\n@\n";

fn flow_world(dt: f32) -> World {
    let mut world = World::new();
    world.insert_resource(LevelSet::parse(TWO_LEVELS).unwrap());
    world.insert_resource(Session::default());
    world.insert_resource(Tunables {
        level_end_grace: 1.0,
        ..default()
    });
    world.insert_resource(fixed_time_with_delta(dt));
    world.init_resource::<NextState<GameState>>();
    world
}

fn pending(world: &World) -> Option<GameState> {
    match world.resource::<NextState<GameState>>() {
        NextState::Pending(s) => Some(*s),
        _ => None,
    }
}

#[test]
fn resolve_prefers_defeat_then_next_level_then_victory() {
    let levels = LevelSet::parse(TWO_LEVELS).unwrap();

    assert_eq!(
        resolve_level_end(true, &levels, 0),
        LevelTransition::GameOver(Outcome::Defeat)
    );
    assert_eq!(resolve_level_end(false, &levels, 0), LevelTransition::NextLevel);
    assert_eq!(
        resolve_level_end(false, &levels, 1),
        LevelTransition::GameOver(Outcome::Victory)
    );
}

#[test]
fn grace_does_not_start_while_enemies_remain() {
    let mut world = flow_world(0.5);
    world.spawn(EnemyTank::default());

    run_system_once(&mut world, super::advance_level_end);

    assert!(world.resource::<Session>().grace.is_none());
    assert_eq!(pending(&world), None);
}

#[test]
fn cleared_level_moves_on_after_grace() {
    let mut world = flow_world(0.5);

    // Start, then two half-second ticks.
    run_system_once(&mut world, super::advance_level_end);
    assert!(world.resource::<Session>().grace.is_some());

    run_system_once(&mut world, super::advance_level_end);
    assert_eq!(pending(&world), None);

    run_system_once(&mut world, super::advance_level_end);
    assert_eq!(pending(&world), Some(GameState::NextLevel));
    assert!(world.resource::<Session>().outcome.is_none());
}

#[test]
fn dead_player_loses_even_with_enemies_left() {
    let mut world = flow_world(1.0);
    world.spawn(EnemyTank::default());
    world.resource_mut::<Session>().player_dead = true;

    run_system_once(&mut world, super::advance_level_end);
    run_system_once(&mut world, super::advance_level_end);

    assert_eq!(pending(&world), Some(GameState::GameOver));
    assert_eq!(world.resource::<Session>().outcome, Some(Outcome::Defeat));
}

#[test]
fn last_level_cleared_is_victory() {
    let mut world = flow_world(1.0);
    world.resource_mut::<Session>().level = 1;

    run_system_once(&mut world, super::advance_level_end);
    run_system_once(&mut world, super::advance_level_end);

    assert_eq!(pending(&world), Some(GameState::GameOver));
    assert_eq!(world.resource::<Session>().outcome, Some(Outcome::Victory));
}

#[test]
fn transition_fires_once_per_grace_period() {
    let mut world = flow_world(1.0);

    run_system_once(&mut world, super::advance_level_end);
    run_system_once(&mut world, super::advance_level_end);
    assert_eq!(pending(&world), Some(GameState::NextLevel));

    // Another tick before the state machine applies it: no second request.
    *world.resource_mut::<NextState<GameState>>() = NextState::Unchanged;
    run_system_once(&mut world, super::advance_level_end);
    assert_eq!(pending(&world), None);
}

#[test]
fn next_level_bumps_index_and_keeps_counter() {
    let mut world = flow_world(1.0);
    world.resource_mut::<Session>().tanks_destroyed = 2;

    run_system_once(&mut world, super::advance_to_next_level);

    let session = world.resource::<Session>();
    assert_eq!(session.level, 1);
    assert_eq!(session.tanks_destroyed, 2);
    assert_eq!(pending(&world), Some(GameState::Playing));
}

#[test]
fn escape_quits_only_in_game_over() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_state::<GameState>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_systems(
            Update,
            super::quit_after_game_over.run_if(in_state(GameState::GameOver)),
        );

    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::Escape);
    app.update();
    assert!(app.should_exit().is_none());

    app.world_mut().resource_mut::<NextState<GameState>>().set(GameState::GameOver);
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.update();
    assert!(app.should_exit().is_none());

    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::Escape);
    app.update();
    assert_eq!(app.should_exit(), Some(AppExit::Success));
}
