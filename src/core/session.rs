use tracing::{debug, info};

use crate::core::{GameState, GameUpdate, SharedGameState, UserAction, step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied(GameUpdate),
    /// Movement was ignored because the level is already solved.
    Locked,
    Reset,
}

/// Owns one play-through of a level: the immutable layout, the position it
/// started from, and the current position.
pub struct Session {
    shared: SharedGameState,
    initial: GameState,
    current: GameState,
}

impl Session {
    pub fn new(shared: SharedGameState, initial: GameState) -> Self {
        Session {
            shared,
            current: initial.clone(),
            initial,
        }
    }

    pub fn shared(&self) -> &SharedGameState {
        &self.shared
    }

    pub fn game(&self) -> &GameState {
        &self.current
    }

    pub fn is_won(&self) -> bool {
        self.current.is_won(&self.shared)
    }

    pub fn phase(&self) -> Phase {
        if self.is_won() { Phase::Won } else { Phase::Playing }
    }

    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        info!("level reset");
    }

    /// Applies one user action. Reset always goes through; moves are dropped
    /// once the level is won.
    pub fn apply(&mut self, action: UserAction) -> ActionOutcome {
        let direction = match action {
            UserAction::Reset => {
                self.reset();
                return ActionOutcome::Reset;
            }
            UserAction::Move(direction) => direction,
        };

        if self.phase() == Phase::Won {
            debug!(?direction, "move ignored, level already won");
            return ActionOutcome::Locked;
        }

        let update = step(&self.shared, &self.current, direction);
        match &update {
            GameUpdate::NextState(next, change) => {
                debug!(?direction, ?change, moves = next.moves, "moved");
                self.current = next.clone();
                if self.is_won() {
                    info!(moves = self.current.moves, "level solved");
                }
            }
            GameUpdate::Blocked(reason) => {
                debug!(?direction, ?reason, "move blocked");
            }
        }
        ActionOutcome::Applied(update)
    }
}
