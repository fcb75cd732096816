//! Win detection logic for tic-tac-toe.

use crate::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell, Mark};
use tracing::instrument;

/// Cell indices forming one winning line.
pub type Line = [usize; BOARD_WIDTH];

/// Number of winning lines: every row, every column and both diagonals.
pub const LINE_COUNT: usize = BOARD_WIDTH + BOARD_HEIGHT + 2;

const _: () = assert!(
    BOARD_WIDTH == BOARD_HEIGHT,
    "winning lines assume a square board"
);

const LINES: [Line; LINE_COUNT] = build_lines();

// Rows top to bottom, then columns left to right, then the main diagonal
// and the anti-diagonal. The order is the evaluation priority.
const fn build_lines() -> [Line; LINE_COUNT] {
    let mut lines = [[0; BOARD_WIDTH]; LINE_COUNT];
    let mut n = 0;

    let mut row = 0;
    while row < BOARD_HEIGHT {
        let mut i = 0;
        while i < BOARD_WIDTH {
            lines[n][i] = row * BOARD_WIDTH + i;
            i += 1;
        }
        n += 1;
        row += 1;
    }

    let mut col = 0;
    while col < BOARD_WIDTH {
        let mut i = 0;
        while i < BOARD_HEIGHT {
            lines[n][i] = i * BOARD_WIDTH + col;
            i += 1;
        }
        n += 1;
        col += 1;
    }

    let mut i = 0;
    while i < BOARD_WIDTH {
        lines[n][i] = i * BOARD_WIDTH + i;
        lines[n + 1][i] = i * BOARD_WIDTH + (BOARD_WIDTH - 1 - i);
        i += 1;
    }

    lines
}

/// Returns every winning line in evaluation order.
pub fn winning_lines() -> &'static [Line; LINE_COUNT] {
    &LINES
}

/// Returns the first line whose cells all hold the same mark.
///
/// Lines are scanned in the order of [`winning_lines`], so a board with
/// more than one completed line always reports the same one.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.iter().copied().find(|line| line_owner(board, line).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a player has completed a line,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|line| line_owner(board, &line))
}

fn line_owner(board: &Board, line: &Line) -> Option<Mark> {
    let first = board.get(line[0])?;
    let Cell::Occupied(mark) = first else {
        return None;
    };
    line.iter()
        .all(|&index| board.get(index) == Some(first))
        .then_some(mark)
}
