//! Board fullness check.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// The game's draw flag is derived from the move pointer rather than from
/// this check; see [`GameController::is_draw`](crate::GameController::is_draw).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
