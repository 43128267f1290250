use crate::core::bounded_grid::BoundedGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
}

/// Grid coordinate, `i` is the row and `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Reset,
}

/// Everything about a level that never changes after parsing.
#[derive(Clone, Debug)]
pub struct SharedGameState {
    pub grid: BoundedGrid<Cell>,
    pub target: Vec2,
}

/// The mutable part of a game: where the player and the box are, and how many
/// moves it took to get there.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub player: Vec2,
    pub game_box: Vec2,
    pub moves: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Blocked(BlockReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    Wall,
    BoxAgainstWall,
}
