mod bounded_grid;
mod bounds;
mod model_helpers;
mod models;
mod parse;
mod session;
mod update;

pub use models::{
    BlockReason, Cell, Direction, GameChangeType, GameState, GameUpdate, SharedGameState,
    UserAction, Vec2,
};
pub use parse::{LevelParseError, Marker, parse_level};
pub use session::{ActionOutcome, Phase, Session};
pub use update::step;
