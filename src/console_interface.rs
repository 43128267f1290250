use crate::core::{Direction, UserAction};
use crate::models::{CellView, Entity, GameRenderState, Renderer, Terrain};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    let entered = crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    if entered.is_err() {
        // undo raw mode before reporting the setup error
        let _ = cleanup_terminal();
    }
    entered
}

pub fn cleanup_terminal() -> io::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Combines the result of a terminal session with the result of restoring the
/// terminal afterwards. The session error wins; a cleanup error is only
/// returned when the session itself succeeded.
pub fn finish_session(run: io::Result<()>, cleanup: io::Result<()>) -> io::Result<()> {
    match (run, cleanup) {
        (Err(run_err), Err(cleanup_err)) => {
            tracing::error!(%cleanup_err, "failed to restore terminal");
            Err(run_err)
        }
        (Err(run_err), Ok(())) => Err(run_err),
        (Ok(()), cleanup) => cleanup,
    }
}

pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalRenderer {
    pub fn new(terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Self {
        TerminalRenderer { terminal }
    }
}

impl Renderer for TerminalRenderer {
    type Error = io::Error;

    fn render(&mut self, state: &GameRenderState) -> io::Result<()> {
        self.terminal.draw(|f| {
            let [board_area, status_area, help_area] = Layout::vertical([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .areas(f.area());

            // two terminal columns per cell keeps the board roughly square
            let board_width = (state.width * 2 + 2) as u16;
            let board_height = (state.height + 2) as u16;
            let [board_column] = Layout::horizontal([Constraint::Length(board_width)])
                .flex(Flex::Center)
                .areas(board_area);
            let [board_rect] = Layout::vertical([Constraint::Length(board_height)])
                .flex(Flex::Center)
                .areas(board_column);

            let board = Paragraph::new(board_lines(state))
                .block(Block::default().borders(Borders::ALL).title("Push the box"));
            f.render_widget(board, board_rect);

            let status_style = if state.message.is_some() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let status = Paragraph::new(state.status_line())
                .block(Block::default().borders(Borders::ALL).title("Status"))
                .style(status_style)
                .alignment(Alignment::Center);
            f.render_widget(status, status_area);

            let instructions = if state.message.is_some() {
                "Solved! R to play again, Q to quit"
            } else {
                "Controls: WASD or Arrow keys to move, R to reset, Q to quit"
            };
            let help = Paragraph::new(instructions)
                .block(Block::default().borders(Borders::ALL).title("Instructions"))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center);
            f.render_widget(help, help_area);
        })?;
        Ok(())
    }
}

fn board_lines(state: &GameRenderState) -> Vec<Line<'static>> {
    state
        .rows()
        .map(|row| Line::from(row.iter().map(cell_span).collect::<Vec<_>>()))
        .collect()
}

fn cell_span(cell: &CellView) -> Span<'static> {
    match (cell.terrain, cell.entity) {
        (Terrain::Wall, _) => Span::styled("██", Style::default().fg(Color::DarkGray)),
        (Terrain::Floor, Some(Entity::Player)) => Span::styled(
            "P ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        (Terrain::Floor, Some(Entity::Box { on_target })) => Span::styled(
            "[]",
            Style::default().fg(if on_target { Color::Green } else { Color::Yellow }),
        ),
        (Terrain::Floor, None) if cell.target => {
            Span::styled("()", Style::default().fg(Color::Red))
        }
        (Terrain::Floor, None) => Span::raw("  "),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    UserAction(UserAction),
    /// The terminal changed size and the frame must be redrawn.
    Redraw,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input(timeout: Duration) -> io::Result<ConsoleInput> {
    if event::poll(timeout)? {
        return Ok(input_from_event(&event::read()?));
    }
    Ok(ConsoleInput::Timeout)
}

pub fn input_from_event(event: &Event) -> ConsoleInput {
    match event {
        Event::Key(key) => input_from_key(key),
        Event::Resize(_, _) => ConsoleInput::Redraw,
        _ => ConsoleInput::Unknown,
    }
}

/// Maps a key press to what it means for the game. Letter keys are ignored
/// while Ctrl, Alt, Meta or Super is held so terminal shortcuts never reset
/// or move; arrows and Esc are not affected.
pub fn input_from_key(key: &KeyEvent) -> ConsoleInput {
    if key.kind != KeyEventKind::Press {
        return ConsoleInput::Unknown;
    }

    let chorded = key.modifiers.intersects(
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::META | KeyModifiers::SUPER,
    );

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            ConsoleInput::Quit
        }
        KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Up => ConsoleInput::UserAction(UserAction::Move(Direction::Up)),
        KeyCode::Down => ConsoleInput::UserAction(UserAction::Move(Direction::Down)),
        KeyCode::Left => ConsoleInput::UserAction(UserAction::Move(Direction::Left)),
        KeyCode::Right => ConsoleInput::UserAction(UserAction::Move(Direction::Right)),
        KeyCode::Char(_) if chorded => ConsoleInput::Unknown,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'r' => ConsoleInput::UserAction(UserAction::Reset),
            'q' => ConsoleInput::Quit,
            'w' => ConsoleInput::UserAction(UserAction::Move(Direction::Up)),
            's' => ConsoleInput::UserAction(UserAction::Move(Direction::Down)),
            'a' => ConsoleInput::UserAction(UserAction::Move(Direction::Left)),
            'd' => ConsoleInput::UserAction(UserAction::Move(Direction::Right)),
            _ => ConsoleInput::Unknown,
        },
        _ => ConsoleInput::Unknown,
    }
}
