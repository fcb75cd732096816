//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::{BOARD_HEIGHT, BOARD_WIDTH, Coordinate};

/// Moves the board cursor based on arrow keys.
///
/// The cursor stops at the board edges; other keys leave it in place.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let Coordinate { x, y } = Coordinate::from_index(cursor);

    let (x, y) = match key {
        KeyCode::Right | KeyCode::Char('l') if x + 1 < BOARD_WIDTH => (x + 1, y),
        KeyCode::Left | KeyCode::Char('h') if x > 0 => (x - 1, y),
        KeyCode::Down | KeyCode::Char('j') if y + 1 < BOARD_HEIGHT => (x, y + 1),
        KeyCode::Up | KeyCode::Char('k') if y > 0 => (x, y - 1),
        _ => (x, y),
    };

    Coordinate { x, y }.to_index()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(2, KeyCode::Right), 2);
        assert_eq!(move_cursor(3, KeyCode::Left), 3);
        assert_eq!(move_cursor(1, KeyCode::Up), 1);
        assert_eq!(move_cursor(7, KeyCode::Down), 7);
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(move_cursor(0, KeyCode::Char('l')), 1);
        assert_eq!(move_cursor(0, KeyCode::Char('j')), 3);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(6, KeyCode::Char('x')), 6);
    }
}
