use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::console_interface::{ConsoleInput, input_from_key};
use crate::core::UserAction;
use crate::error::AppError;
use crate::models::{GameRenderState, Renderer};

/// Writes the board as text followed by the status line.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = AppError;

    fn render(&mut self, state: &GameRenderState) -> Result<(), AppError> {
        write!(self.out, "{}", state.to_text())?;
        writeln!(self.out, "{}", state.status_line())?;
        Ok(())
    }
}

pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonRenderer { out }
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    type Error = AppError;

    fn render(&mut self, state: &GameRenderState) -> Result<(), AppError> {
        serde_json::to_writer_pretty(&mut self.out, state)?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// Turns a string of keys into actions, using the same mapping as the
/// interactive key handler.
pub fn parse_replay(keys: &str) -> Result<Vec<UserAction>, AppError> {
    keys.chars()
        .enumerate()
        .filter(|(_, key)| !key.is_whitespace())
        .map(|(index, key)| {
            let event = KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE);
            match input_from_key(&event) {
                ConsoleInput::UserAction(action) => Ok(action),
                _ => Err(AppError::ReplayKey { key, index }),
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn replay_accepts_movement_and_reset_keys() {
        let actions = parse_replay("wA s\nD r").unwrap();
        assert_eq!(
            actions,
            vec![
                UserAction::Move(Direction::Up),
                UserAction::Move(Direction::Left),
                UserAction::Move(Direction::Down),
                UserAction::Move(Direction::Right),
                UserAction::Reset,
            ]
        );
    }

    #[test]
    fn replay_rejects_quit_and_unknown_keys() {
        let err = parse_replay("wwq").unwrap_err();
        assert!(matches!(err, AppError::ReplayKey { key: 'q', index: 2 }));

        let err = parse_replay("x").unwrap_err();
        assert!(matches!(err, AppError::ReplayKey { key: 'x', index: 0 }));
    }
}
