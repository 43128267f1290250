use std::ops::Add;

use crate::core::{Cell, Direction, GameState, SharedGameState, Vec2};

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl GameState {
    pub fn is_won(&self, shared: &SharedGameState) -> bool {
        self.game_box == shared.target
    }
}

impl SharedGameState {
    pub fn height(&self) -> i32 {
        self.grid.size().height()
    }

    pub fn width(&self) -> i32 {
        self.grid.size().width()
    }

    /// Anything outside the parsed rectangle counts as wall.
    pub fn is_wall(&self, pos: Vec2) -> bool {
        self.grid.get(&pos).is_none_or(|&c| c == Cell::Wall)
    }

    pub fn walls(&self) -> impl Iterator<Item = Vec2> {
        self.grid
            .iter()
            .filter(|&(_, &c)| c == Cell::Wall)
            .map(|(pos, _)| pos)
    }
}
