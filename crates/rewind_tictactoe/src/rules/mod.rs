//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. Rules never hold state
//! between calls, so any caller can evaluate any snapshot in any order.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINE_COUNT, Line, check_winner, winning_line, winning_lines};
