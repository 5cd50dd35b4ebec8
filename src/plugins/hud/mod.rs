//! HUD plugin (render-only): destroyed-tank counter, current level name, and
//! the end-of-game banner.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{
    session::{Outcome, Session},
    state::GameState,
};
use crate::plugins::level::LevelSet;

const HUD_FONT_SIZE: f32 = 22.0;
const BANNER_FONT_SIZE: f32 = 48.0;
const INK: Color = Color::srgb(0.18, 0.14, 0.10);

#[derive(Component)]
pub struct DestroyedCounterText;

#[derive(Component)]
pub struct LevelLabel;

#[derive(Component)]
pub struct GameOverBanner;

pub fn counter_text(destroyed: u32) -> String {
    format!("Enemy Tanks Destroyed: {destroyed}")
}

pub fn banner_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Victory => "You won the game!",
        Outcome::Defeat => "You lost the game!",
    }
}

pub const EXIT_HINT: &str = "Press the escape key to exit.";

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_hud)
        .add_systems(OnEnter(GameState::Playing), update_level_label)
        .add_systems(OnEnter(GameState::GameOver), spawn_game_over_banner)
        .add_systems(Update, update_counter);
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|hud| {
            hud.spawn((
                DestroyedCounterText,
                Text::new(counter_text(0)),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(INK),
            ));
            hud.spawn((
                LevelLabel,
                Text::new(""),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(INK),
            ));
        });
}

fn update_counter(session: Res<Session>, mut q_text: Query<&mut Text, With<DestroyedCounterText>>) {
    if !session.is_changed() {
        return;
    }
    for mut text in &mut q_text {
        text.0 = counter_text(session.tanks_destroyed);
    }
}

fn update_level_label(
    levels: Res<LevelSet>,
    session: Res<Session>,
    mut q_text: Query<&mut Text, With<LevelLabel>>,
) {
    let Some(level) = levels.get(session.level) else {
        return;
    };
    for mut text in &mut q_text {
        text.0 = format!("Level {}/{}: {}", session.level + 1, levels.len(), level.name);
    }
}

fn spawn_game_over_banner(mut commands: Commands, session: Res<Session>) {
    let Some(outcome) = session.outcome else {
        return;
    };

    commands
        .spawn((
            Name::new("GameOverBanner"),
            GameOverBanner,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.45)),
            DespawnOnExit(GameState::GameOver),
        ))
        .with_children(|banner| {
            banner.spawn((
                Text::new(banner_text(outcome)),
                TextFont {
                    font_size: BANNER_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            banner.spawn((
                Text::new(EXIT_HINT),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}
