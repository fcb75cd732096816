//! Move list descriptors derived from history.

use crate::{Board, Coordinate};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Builds the order from the toggle's checked state.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// True for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    /// Flips the order.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Text shown next to the sort toggle.
pub fn toggle_label(order: SortOrder) -> String {
    format!("Sort the move list {order}")
}

/// How an entry is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Clickable; activating it jumps to the move.
    Jump,
    /// Plain text marking the move currently shown.
    Current,
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct MoveEntry {
    move_number: usize,
    coordinate: Option<Coordinate>,
    kind: MoveKind,
}

impl MoveEntry {
    /// True if activating this entry should call `jump_to`.
    pub fn is_jump(&self) -> bool {
        self.kind == MoveKind::Jump
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        if self.move_number == 0 {
            return "Go to game start".to_string();
        }
        let suffix = self
            .coordinate
            .map(|c| format!(" at coordinate {c}"))
            .unwrap_or_default();
        match self.kind {
            MoveKind::Current => format!("You are at move #{}{suffix}", self.move_number),
            MoveKind::Jump => format!("Go to move #{}{suffix}", self.move_number),
        }
    }
}

/// Index of the cell that is empty in `prev` and occupied in `next`.
pub fn changed_cell(prev: &Board, next: &Board) -> Option<usize> {
    prev.cells()
        .iter()
        .zip(next.cells())
        .position(|(before, after)| before.is_empty() && !after.is_empty())
}

/// Builds the move list for `history` with `current_move` selected.
///
/// Entries are sorted by move number in `order`. Sorting only changes the
/// returned vector.
#[instrument(skip(history), fields(len = history.len()))]
pub fn move_list(history: &[Board], current_move: usize, order: SortOrder) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = history
        .iter()
        .enumerate()
        .map(|(move_number, board)| {
            let coordinate = move_number
                .checked_sub(1)
                .and_then(|prev| changed_cell(&history[prev], board))
                .map(Coordinate::from_index);
            let kind = if move_number == current_move && move_number > 0 {
                MoveKind::Current
            } else {
                MoveKind::Jump
            };
            MoveEntry::new(move_number, coordinate, kind)
        })
        .collect();

    if !order.is_ascending() {
        entries.reverse();
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn history_of(indices: &[usize]) -> Vec<Board> {
        let mut history = vec![Board::new()];
        for (n, &index) in indices.iter().enumerate() {
            let last = history[history.len() - 1];
            history.push(last.with_mark(index, Mark::for_move(n)).unwrap());
        }
        history
    }

    #[test]
    fn test_changed_cell() {
        let history = history_of(&[5]);
        assert_eq!(changed_cell(&history[0], &history[1]), Some(5));
        assert_eq!(changed_cell(&history[1], &history[1]), None);
    }

    #[test]
    fn test_label_reports_coordinate() {
        let history = history_of(&[5]);
        let entries = move_list(&history, 0, SortOrder::Ascending);
        assert_eq!(entries[1].coordinate(), &Some(Coordinate { x: 2, y: 1 }));
        assert_eq!(entries[1].label(), "Go to move #1 at coordinate (2, 1)");
    }

    #[test]
    fn test_current_move_is_plain_text() {
        let history = history_of(&[4, 0]);
        let entries = move_list(&history, 2, SortOrder::Ascending);
        assert_eq!(entries[2].kind(), &MoveKind::Current);
        assert!(!entries[2].is_jump());
        assert_eq!(entries[2].label(), "You are at move #2 at coordinate (0, 0)");
    }

    #[test]
    fn test_game_start_is_always_a_jump() {
        let history = history_of(&[]);
        let entries = move_list(&history, 0, SortOrder::Ascending);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_jump());
        assert_eq!(entries[0].label(), "Go to game start");
    }

    #[test]
    fn test_sort_orders() {
        let history = history_of(&[0, 1, 2]);
        let before = history.clone();

        let ascending: Vec<usize> = move_list(&history, 3, SortOrder::Ascending)
            .iter()
            .map(|e| *e.move_number())
            .collect();
        let descending: Vec<usize> = move_list(&history, 3, SortOrder::Descending)
            .iter()
            .map(|e| *e.move_number())
            .collect();

        assert_eq!(ascending, vec![0, 1, 2, 3]);
        assert_eq!(descending, vec![3, 2, 1, 0]);
        assert_eq!(history, before);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
        assert_eq!(SortOrder::from_ascending(false), SortOrder::Descending);
        assert_eq!(
            toggle_label(SortOrder::Descending),
            "Sort the move list Descending"
        );
    }
}
