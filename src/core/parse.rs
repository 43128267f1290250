use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Cell, GameState, SharedGameState, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Player,
    Box,
    Target,
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::Player => write!(f, "player"),
            Marker::Box => write!(f, "box"),
            Marker::Target => write!(f, "target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelParseError {
    #[error("level has no rows")]
    Empty,
    #[error("level has no {0} marker")]
    Missing(Marker),
    #[error("level has {} {marker} markers, expected exactly one (at {positions:?})", .positions.len())]
    Duplicate { marker: Marker, positions: Vec<Vec2> },
}

/// Parses an ASCII level.
///
/// `#` wall, `.`/`T` target, `P` player, `@`/`B` box, `*` box on target,
/// `+` player on target; anything else is floor. Short rows are padded with
/// floor up to the longest row. Blank lines before and after the level are
/// skipped so levels can be written as raw string literals.
pub fn parse_level(s: &str) -> Result<(GameState, SharedGameState), LevelParseError> {
    let lines: Vec<&str> = s.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return Err(LevelParseError::Empty);
    };
    let rows = &lines[first..=last];

    let max_width = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let bounds = BoundsOriginRoot::new(rows.len() as i32, max_width as i32);
    let mut grid = BoundedGrid::new(bounds, Cell::Floor);

    let mut players = Vec::new();
    let mut boxes = Vec::new();
    let mut targets = Vec::new();

    for (i, line) in rows.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            let pos = Vec2 {
                i: i as i32,
                j: j as i32,
            };
            match ch {
                '#' => grid[&pos] = Cell::Wall,
                '.' | 'T' => targets.push(pos),
                'P' => players.push(pos),
                '@' | 'B' => boxes.push(pos),
                '*' => {
                    boxes.push(pos);
                    targets.push(pos);
                }
                '+' => {
                    players.push(pos);
                    targets.push(pos);
                }
                _ => {}
            }
        }
    }

    let player = exactly_one(Marker::Player, players)?;
    let game_box = exactly_one(Marker::Box, boxes)?;
    let target = exactly_one(Marker::Target, targets)?;

    Ok((
        GameState {
            player,
            game_box,
            moves: 0,
        },
        SharedGameState { grid, target },
    ))
}

fn exactly_one(marker: Marker, positions: Vec<Vec2>) -> Result<Vec2, LevelParseError> {
    match positions.as_slice() {
        [] => Err(LevelParseError::Missing(marker)),
        [only] => Ok(*only),
        _ => Err(LevelParseError::Duplicate { marker, positions }),
    }
}
