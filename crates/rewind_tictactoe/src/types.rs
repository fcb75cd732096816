//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of columns on the board.
pub const BOARD_WIDTH: usize = 3;

/// Number of rows on the board.
pub const BOARD_HEIGHT: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark whose turn it is after `move_number` moves.
    ///
    /// X moves on even move numbers, O on odd ones.
    pub fn for_move(move_number: usize) -> Self {
        if move_number % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Immutable snapshot of the board.
///
/// Cells are stored in row-major order. A new snapshot is derived with
/// [`Board::with_mark`]; an existing one is never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` if the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` is on the board and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// Returns `None` if the index is off the board. Occupancy is not
    /// checked here; callers decide whether overwriting is legal.
    #[instrument(skip(self))]
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let mut cells = self.cells;
        cells[index] = Cell::Occupied(mark);
        Some(Self { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_HEIGHT {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_WIDTH {
                let symbol = match self.cells[row * BOARD_WIDTH + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

/// Parses a board from `X`, `O` and `.` characters in row-major order.
///
/// Whitespace is ignored, so the output of `Display` parses back.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                other => return Err(BoardParseError::InvalidSymbol(other)),
            };
            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(BoardParseError::WrongLength(count));
        }
        Ok(Self { cells })
    }
}

/// Column/row position of a cell, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, counted from the left.
    pub x: usize,
    /// Row, counted from the top.
    pub y: usize,
}

impl Coordinate {
    /// Converts a row-major cell index to a coordinate.
    pub fn from_index(index: usize) -> Self {
        let x = index % BOARD_WIDTH;
        let y = (index - x) / BOARD_WIDTH;
        Self { x, y }
    }

    /// Converts back to a row-major cell index.
    pub fn to_index(self) -> usize {
        self.y * BOARD_WIDTH + self.x
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
