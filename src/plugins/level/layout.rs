//! Level layout format.
//!
//! ```text
//! ; comment
//! @Level name
//! ##########
//! #P.....E.#
//! ##########
//! @
//! ```
//!
//! `#` obstacle, `.`/space floor, `P` player spawn (exactly one), `E` enemy
//! spawn (at least one). Every row of a level has the same width.

use bevy::prelude::*;
use thiserror::Error;

const LEVEL_DELIMITER: &str = "@";
const COMMENT: char = ';';

/// Layouts shipped with the game.
pub const BUILTIN_LEVELS: &str = include_str!("../../../assets/levels.txt");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level set contains no levels")]
    NoLevels,
    #[error("line {line}: unexpected content outside a level block")]
    StrayLine { line: usize },
    #[error("level `{name}` is never closed with `@`")]
    Unterminated { name: String },
    #[error("level `{name}` has no rows")]
    Empty { name: String },
    #[error("level `{name}` row {row}: expected width {expected}, found {found}")]
    RaggedRow {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("level `{name}` row {row} column {col}: unknown tile `{glyph}`")]
    UnknownTile {
        name: String,
        row: usize,
        col: usize,
        glyph: char,
    },
    #[error("level `{name}` needs exactly one player spawn, found {found}")]
    PlayerSpawns { name: String, found: usize },
    #[error("level `{name}` has no enemy spawns")]
    NoEnemies { name: String },
}

/// One level, split into the three layers the game consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub name: String,
    pub columns: u32,
    pub rows: u32,
    pub obstacles: Vec<UVec2>,
    pub enemies: Vec<UVec2>,
    pub player: UVec2,
}

impl Level {
    /// Pixel size of the whole map.
    pub fn extent(&self, tile: f32) -> Vec2 {
        Vec2::new(self.columns as f32, self.rows as f32) * tile
    }

    /// World-space centre of a cell. The map is centred on the origin, row 0 is the top row.
    pub fn world_position(&self, cell: UVec2, tile: f32) -> Vec2 {
        let half = self.extent(tile) * 0.5;
        Vec2::new(
            (cell.x as f32 + 0.5) * tile - half.x,
            half.y - (cell.y as f32 + 0.5) * tile,
        )
    }

    fn from_rows(name: String, rows: &[&str]) -> Result<Self, LevelError> {
        let Some(first) = rows.first() else {
            return Err(LevelError::Empty { name });
        };
        let expected = first.chars().count();

        let mut obstacles = Vec::new();
        let mut enemies = Vec::new();
        let mut players = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(LevelError::RaggedRow {
                    name,
                    row,
                    expected,
                    found,
                });
            }

            for (col, glyph) in line.chars().enumerate() {
                let cell = UVec2::new(col as u32, row as u32);
                match glyph {
                    '#' => obstacles.push(cell),
                    'E' => enemies.push(cell),
                    'P' => players.push(cell),
                    '.' | ' ' => {}
                    _ => return Err(LevelError::UnknownTile {
                        name,
                        row,
                        col,
                        glyph,
                    }),
                }
            }
        }

        let player = match players.as_slice() {
            [only] => *only,
            _ => {
                return Err(LevelError::PlayerSpawns {
                    name,
                    found: players.len(),
                });
            }
        };
        if enemies.is_empty() {
            return Err(LevelError::NoEnemies { name });
        }

        Ok(Self {
            name,
            columns: expected as u32,
            rows: rows.len() as u32,
            obstacles,
            enemies,
            player,
        })
    }
}

/// Ordered list of levels played one after another.
#[derive(Resource, Debug, Clone)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    pub fn builtin() -> Result<Self, LevelError> {
        Self::parse(BUILTIN_LEVELS)
    }

    pub fn parse(src: &str) -> Result<Self, LevelError> {
        let mut levels = Vec::new();
        // (name, rows) of the level currently being read.
        let mut open: Option<(String, Vec<&str>)> = None;

        for (index, line) in src.lines().enumerate() {
            let trimmed = line.trim();

            if let Some((name, rows)) = open.as_mut() {
                if trimmed == LEVEL_DELIMITER {
                    let level = Level::from_rows(std::mem::take(name), rows)?;
                    levels.push(level);
                    open = None;
                } else {
                    rows.push(line);
                }
                continue;
            }

            if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
                continue;
            }
            let Some(name) = trimmed.strip_prefix(LEVEL_DELIMITER) else {
                return Err(LevelError::StrayLine { line: index + 1 });
            };
            open = Some((name.trim().to_string(), Vec::new()));
        }

        if let Some((name, _)) = open {
            return Err(LevelError::Unterminated { name });
        }
        if levels.is_empty() {
            return Err(LevelError::NoLevels);
        }

        Ok(Self { levels })
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn has_level_after(&self, index: usize) -> bool {
        index + 1 < self.levels.len()
    }
}
