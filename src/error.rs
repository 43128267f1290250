use crate::core::LevelParseError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid level: {0}")]
    Level(#[from] LevelParseError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize board: {0}")]
    Json(#[from] serde_json::Error),
    #[error("replay key {key:?} at position {index} is not one of w, a, s, d, r")]
    ReplayKey { key: char, index: usize },
}
