//! Error types for board parsing and history navigation.

use derive_more::{Display, Error};

/// Error returned by [`GameController`](crate::GameController) operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// A jump targeted a move that is not in the history.
    #[display("Move {} is out of range (history has {} entries)", requested, len)]
    MoveOutOfRange {
        /// The requested move number.
        requested: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },

    /// A snapshot did not follow from the current one by a single placement.
    #[display("Snapshot does not follow move {} by a single placement", current_move)]
    NotASingleMove {
        /// Move the snapshot was meant to follow.
        current_move: usize,
    },
}

/// Error returned when parsing a [`Board`](crate::Board) from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Unknown cell symbol.
    #[display("Invalid cell symbol {:?}", _0)]
    InvalidSymbol(#[error(not(source))] char),

    /// Wrong number of cells.
    #[display("Wrong number of cells: {}", _0)]
    WrongLength(#[error(not(source))] usize),
}
