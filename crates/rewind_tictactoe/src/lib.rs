//! Rewind tic-tac-toe - game logic with move history and time travel.
//!
//! This crate holds everything the game needs apart from the screen: board
//! snapshots, winner evaluation, the history controller and the read-only
//! views a front end renders from.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] (winning line, fullness)
//! - **Controller**: [`GameController`] owns the history and the current move
//! - **Views**: [`BoardView`] and [`move_list`] project controller state for display
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, SortOrder, move_list};
//!
//! # fn example() -> Result<(), rewind_tictactoe::HistoryError> {
//! let mut game = GameController::new();
//! game.place(4)?;
//! game.place(0)?;
//! game.jump_to(1)?;
//!
//! let entries = move_list(game.history(), game.current_move(), SortOrder::Descending);
//! assert_eq!(entries.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod controller;
mod error;
mod highlight;
mod move_list;
mod rules;
mod types;

pub use board_view::{BoardView, CellView, Status};
pub use controller::GameController;
pub use error::{BoardParseError, HistoryError};
pub use highlight::derive_highlight;
pub use move_list::{MoveEntry, MoveKind, SortOrder, changed_cell, move_list, toggle_label};
pub use rules::{LINE_COUNT, Line, check_winner, is_full, winning_line, winning_lines};
pub use types::{BOARD_HEIGHT, BOARD_WIDTH, Board, CELL_COUNT, Cell, Coordinate, Mark};
