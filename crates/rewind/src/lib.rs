//! Rewind - terminal front end for time-travel tic-tac-toe.
//!
//! The game logic lives in [`rewind_tictactoe`]; this crate owns the
//! application state, renders it with ratatui and turns key presses into
//! controller operations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod ui;

use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::Backend};
use tracing::{info, instrument};

pub use app::{App, Focus, Transition};
pub use cli::Cli;
pub use config::{ConfigError, Settings};
pub use input::move_cursor;
pub use logging::init_logging;
pub use ui::draw;

/// Runs the event loop until the user quits.
///
/// Each key event is handled to completion before the next one is read.
#[instrument(skip_all)]
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    info!("Starting event loop");

    loop {
        let view = app.board_view();
        terminal.draw(|f| draw(f, app, &view))?;

        if let Event::Key(key) = event::read()?
            && app.handle_key(key) == Transition::Quit
        {
            info!("Leaving event loop");
            return Ok(());
        }
    }
}
