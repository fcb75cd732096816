//! Read-only board projection for rendering and click handling.

use crate::rules::{Line, check_winner};
use crate::{BOARD_WIDTH, Board, Cell, Mark};
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument};

/// One cell as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct CellView {
    index: usize,
    cell: Cell,
    highlighted: bool,
}

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// The move pointer reached a full board.
    #[display("Game draw")]
    Draw,
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// The game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Board renderer view model.
///
/// Built from the controller's current snapshot plus the derived highlight
/// and turn flags. It owns no game state; a click only yields the snapshot
/// the controller should play next.
#[derive(Debug, Clone, Copy, Getters, new)]
pub struct BoardView {
    board: Board,
    highlight: Option<Line>,
    x_is_next: bool,
    game_draw: bool,
}

impl BoardView {
    /// Mark of the player who clicks next.
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    /// Checks whether `index` is part of the highlighted line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.is_some_and(|line| line.contains(&index))
    }

    /// One view per cell, in row-major order.
    pub fn cells(&self) -> Vec<CellView> {
        self.board
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| CellView::new(index, *cell, self.is_highlighted(index)))
            .collect()
    }

    /// Cell views grouped by row, top to bottom.
    pub fn rows(&self) -> Vec<Vec<CellView>> {
        self.cells()
            .chunks(BOARD_WIDTH)
            .map(<[CellView]>::to_vec)
            .collect()
    }

    /// Handles a click on the cell at `index`.
    ///
    /// Returns the snapshot with the next player's mark placed, or `None`
    /// when the click is ignored: the cell is off the board or occupied, or
    /// the game already has a winner.
    #[instrument(skip(self), fields(next = %self.next_mark()))]
    pub fn click(&self, index: usize) -> Option<Board> {
        if !self.board.is_empty(index) {
            debug!("Ignoring click on occupied or missing cell");
            return None;
        }
        if check_winner(&self.board).is_some() {
            debug!("Ignoring click after the game was won");
            return None;
        }
        self.board.with_mark(index, self.next_mark())
    }

    /// Text for the status line.
    pub fn status(&self) -> Status {
        if self.game_draw {
            Status::Draw
        } else if let Some(winner) = check_winner(&self.board) {
            Status::Winner(winner)
        } else {
            Status::NextPlayer(self.next_mark())
        }
    }
}
