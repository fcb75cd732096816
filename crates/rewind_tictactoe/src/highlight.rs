//! Highlighted winning line, derived fresh for every render.

use crate::rules::{Line, winning_line};
use crate::{Board, Cell};
use tracing::{debug, instrument};

/// Derives the line to highlight from the current snapshot and the line
/// highlighted on the previous render.
///
/// - No winning line on `board`: nothing is highlighted.
/// - `previous` still completes a line on `board`: it is kept, so an
///   established highlight is never replaced by another line.
/// - Otherwise the evaluator's first winning line is used.
///
/// The result depends only on its inputs, so deriving twice from the same
/// snapshot gives the same answer.
#[instrument(skip(board))]
pub fn derive_highlight(previous: Option<Line>, board: &Board) -> Option<Line> {
    let current = winning_line(board)?;
    match previous {
        Some(line) if completes(board, &line) => Some(line),
        _ => {
            debug!(?current, "Highlighting winning line");
            Some(current)
        }
    }
}

fn completes(board: &Board, line: &Line) -> bool {
    let Some(first @ Cell::Occupied(_)) = board.get(line[0]) else {
        return false;
    };
    line.iter().all(|&index| board.get(index) == Some(first))
}
