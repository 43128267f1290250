use serde::Serialize;

use crate::core::{GameState, SharedGameState, Vec2};

pub const WIN_MESSAGE: &str = "You win!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Wall,
    Floor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Entity {
    Player,
    Box { on_target: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub terrain: Terrain,
    /// Only set while the target is uncovered; a box on the target carries
    /// `on_target` instead.
    pub target: bool,
    pub entity: Option<Entity>,
}

/// Everything a presentation surface needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRenderState {
    pub width: usize,
    pub height: usize,
    /// Row-major, `width * height` entries.
    pub cells: Vec<CellView>,
    pub message: Option<&'static str>,
    pub moves: u32,
}

impl GameRenderState {
    pub fn build(shared: &SharedGameState, game: &GameState) -> Self {
        let height = shared.height();
        let width = shared.width();
        let mut cells = Vec::with_capacity((width * height).max(0) as usize);
        for i in 0..height {
            for j in 0..width {
                let pos = Vec2 { i, j };
                let is_wall = shared.is_wall(pos);
                let is_target = pos == shared.target;
                let entity = if pos == game.player {
                    Some(Entity::Player)
                } else if pos == game.game_box {
                    Some(Entity::Box { on_target: is_target })
                } else {
                    None
                };
                cells.push(CellView {
                    terrain: if is_wall { Terrain::Wall } else { Terrain::Floor },
                    target: !is_wall && is_target && pos != game.game_box,
                    entity,
                });
            }
        }

        GameRenderState {
            width: width as usize,
            height: height as usize,
            cells,
            message: game.is_won(shared).then_some(WIN_MESSAGE),
            moves: game.moves,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn status_line(&self) -> String {
        match self.message {
            Some(message) => format!("Moves: {} | {}", self.moves, message),
            None => format!("Moves: {}", self.moves),
        }
    }

    /// Board only, one line per row, in the same alphabet the level parser reads.
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for row in self.rows() {
            for cell in row {
                result.push(cell.glyph());
            }
            result.push('\n');
        }
        result
    }
}

impl CellView {
    pub fn glyph(&self) -> char {
        match (self.terrain, self.entity) {
            (Terrain::Wall, _) => '#',
            (Terrain::Floor, Some(Entity::Player)) => if self.target { '+' } else { 'P' },
            (Terrain::Floor, Some(Entity::Box { on_target: true })) => '*',
            (Terrain::Floor, Some(Entity::Box { on_target: false })) => '@',
            (Terrain::Floor, None) => if self.target { '.' } else { ' ' },
        }
    }
}

/// A surface that can present a full frame.
pub trait Renderer {
    type Error;

    fn render(&mut self, state: &GameRenderState) -> Result<(), Self::Error>;
}
