// Single-box push puzzle in the terminal.
// Controls: W/A/S/D or arrow keys to move, R to reset, Q or Esc to quit.
// Tiles: '#' wall, 'P' player, '@' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

mod console_interface;
mod core;
mod error;
mod models;
mod snapshot;
#[cfg(test)]
mod test;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::console_interface::{
    ConsoleInput, TerminalRenderer, cleanup_terminal, finish_session, handle_input,
    setup_terminal,
};
use crate::core::{Session, parse_level};
use crate::error::AppError;
use crate::models::{GameRenderState, Renderer};
use crate::snapshot::{JsonRenderer, TextRenderer, parse_replay};

pub const LEVEL: &str = r#"
#######
#.#  ##
# @   #
#  #  #
##P#  #
#######
"#;

const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(version, about = "Push the box onto the target")]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Write logs to this file. Interactive mode logs nowhere without it.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal (default).
    Interactive,
    /// Print the board once, optionally after replaying keys.
    Snapshot {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Keys to feed through the input handler first, e.g. "wwdr".
        #[arg(long, default_value = "")]
        replay: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mode = args.mode.clone().unwrap_or(Mode::Interactive);
    init_logging(&args, &mode)?;

    let (initial, shared) = parse_level(LEVEL).map_err(AppError::from)?;
    info!(
        width = shared.width(),
        height = shared.height(),
        walls = shared.walls().count(),
        "level loaded"
    );
    let mut session = Session::new(shared, initial);

    match mode {
        Mode::Interactive => {
            let mut renderer = TerminalRenderer::new(setup_terminal()?);
            let result = run_interactive(&mut session, &mut renderer);
            finish_session(result, cleanup_terminal())?;
        }
        Mode::Snapshot { format, replay } => {
            run_snapshot(&mut session, format, &replay)?;
        }
    }

    Ok(())
}

fn init_logging(args: &Args, mode: &Mode) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    match (&args.log_file, mode) {
        (Some(path), _) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, Mode::Snapshot { .. }) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        // stdout belongs to the alternate screen
        (None, Mode::Interactive) => {}
    }
    Ok(())
}

fn run_interactive(session: &mut Session, renderer: &mut TerminalRenderer) -> io::Result<()> {
    renderer.render(&GameRenderState::build(session.shared(), session.game()))?;

    loop {
        match handle_input(INPUT_POLL)? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(action) => {
                session.apply(action);
                renderer.render(&GameRenderState::build(session.shared(), session.game()))?;
            }
            ConsoleInput::Redraw => {
                renderer.render(&GameRenderState::build(session.shared(), session.game()))?;
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }

    info!(moves = session.game().moves, won = session.is_won(), "quit");
    Ok(())
}

fn run_snapshot(session: &mut Session, format: OutputFormat, replay: &str) -> Result<(), AppError> {
    for action in parse_replay(replay)? {
        session.apply(action);
    }

    let state = GameRenderState::build(session.shared(), session.game());
    let out = io::stdout().lock();
    match format {
        OutputFormat::Text => TextRenderer::new(out).render(&state),
        OutputFormat::Json => JsonRenderer::new(out).render(&state),
    }
}
