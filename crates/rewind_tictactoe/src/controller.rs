//! History-owning game controller with time travel.

use crate::board_view::BoardView;
use crate::error::HistoryError;
use crate::highlight::derive_highlight;
use crate::rules::{Line, check_winner, is_full};
use crate::{Board, CELL_COUNT, Mark};
use tracing::{debug, info, instrument, warn};

/// Owns the ordered history of board snapshots and the current move.
///
/// `history[0]` is always the empty board and every later snapshot adds
/// exactly one mark to its predecessor. The current move indexes into the
/// history; whose turn it is and whether the game is drawn are derived from
/// it rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    history: Vec<Board>,
    current_move: usize,
}

impl GameController {
    /// Creates a controller at the start of a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the current snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The snapshot at the current move.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// True when X places the next mark (even move numbers).
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Mark of the player to move.
    pub fn current_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// True once the move pointer reaches a full board.
    pub fn is_draw(&self) -> bool {
        self.current_move == CELL_COUNT
    }

    /// Winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.current_board())
    }

    /// Read-only board projection for the current move.
    ///
    /// `previous_highlight` is the line highlighted on the last render.
    pub fn board_view(&self, previous_highlight: Option<Line>) -> BoardView {
        let board = *self.current_board();
        BoardView::new(
            board,
            derive_highlight(previous_highlight, &board),
            self.x_is_next(),
            self.is_draw(),
        )
    }

    /// Plays `next` after the current move.
    ///
    /// Snapshots after the current move are discarded before `next` is
    /// appended, and the pointer moves to it. Snapshots up to the current
    /// move are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NotASingleMove`] if `next` is not the current
    /// snapshot plus exactly one mark on an empty cell. The history is not
    /// modified in that case.
    #[instrument(skip(self, next), fields(current_move = self.current_move))]
    pub fn play(&mut self, next: Board) -> Result<(), HistoryError> {
        if !follows(self.current_board(), &next) {
            warn!("Rejecting snapshot that is not a single placement");
            return Err(HistoryError::NotASingleMove {
                current_move: self.current_move,
            });
        }

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(
            discarded,
            new_move = self.current_move,
            board_full = is_full(&next),
            "Appended snapshot to history"
        );
        Ok(())
    }

    /// Places the current player's mark at `index`.
    ///
    /// Follows the board click rules: returns `Ok(false)` without changing
    /// anything when the cell is occupied or off the board, or the game is
    /// already won.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) -> Result<bool, HistoryError> {
        match self.board_view(None).click(index) {
            Some(next) => {
                self.play(next)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Travels back to `target`, discarding every later snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] if `target` is not a valid
    /// history index. The index is never clamped.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), HistoryError> {
        if target >= self.history.len() {
            return Err(HistoryError::MoveOutOfRange {
                requested: target,
                len: self.history.len(),
            });
        }

        self.history.truncate(target + 1);
        self.current_move = target;
        info!(target, "Jumped to move");
        Ok(())
    }

    /// Returns to the empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history.truncate(1);
        self.current_move = 0;
        info!("Restarted game");
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

/// True if `next` adds exactly one mark to an empty cell of `prev`.
fn follows(prev: &Board, next: &Board) -> bool {
    let mut changed = prev
        .cells()
        .iter()
        .zip(next.cells())
        .filter(|(before, after)| before != after);

    match (changed.next(), changed.next()) {
        (Some((before, after)), None) => before.is_empty() && !after.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut GameController, indices: &[usize]) {
        for &index in indices {
            assert!(game.place(index).unwrap(), "move at {index} was ignored");
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameController::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert!(game.x_is_next());
        assert!(!game.is_draw());
        assert_eq!(game.current_board(), &Board::new());
    }

    #[test]
    fn test_play_advances_pointer_and_turn() {
        let mut game = GameController::new();
        play_all(&mut game, &[4]);
        assert_eq!(game.current_move(), 1);
        assert!(!game.x_is_next());
        assert_eq!(game.current_mark(), Mark::O);
    }

    #[test]
    fn test_play_rejects_multi_cell_snapshot() {
        let mut game = GameController::new();
        let jump: Board = "XO. ... ...".parse().unwrap();
        assert_eq!(
            game.play(jump),
            Err(HistoryError::NotASingleMove { current_move: 0 })
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_play_rejects_overwrite() {
        let mut game = GameController::new();
        play_all(&mut game, &[0]);
        let overwrite: Board = "O.. ... ...".parse().unwrap();
        assert!(game.play(overwrite).is_err());
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_play_from_past_move_discards_future() {
        let mut game = GameController::new();
        play_all(&mut game, &[0, 1, 2]);
        let kept = game.history()[..2].to_vec();

        game.jump_to(1).unwrap();
        play_all(&mut game, &[8]);

        assert_eq!(game.history().len(), 3);
        assert_eq!(&game.history()[..2], kept.as_slice());
        assert!(game.current_board().is_empty(1));
    }

    #[test]
    fn test_jump_truncates_history() {
        let mut game = GameController::new();
        play_all(&mut game, &[0, 1, 2, 3]);
        game.jump_to(2).unwrap();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
        assert!(game.x_is_next());
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut game = GameController::new();
        play_all(&mut game, &[0]);
        assert_eq!(
            game.jump_to(2),
            Err(HistoryError::MoveOutOfRange {
                requested: 2,
                len: 2
            })
        );
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_place_ignores_occupied_and_won() {
        let mut game = GameController::new();
        play_all(&mut game, &[0]);
        assert!(!game.place(0).unwrap());

        play_all(&mut game, &[3, 1, 4, 2]);
        assert_eq!(game.winner(), Some(Mark::X));
        assert!(!game.place(8).unwrap());
        assert_eq!(game.current_move(), 5);
    }

    #[test]
    fn test_restart() {
        let mut game = GameController::new();
        play_all(&mut game, &[0, 4]);
        game.restart();
        assert_eq!(game, GameController::new());
    }

    #[test]
    fn test_board_view_carries_derived_flags() {
        let mut game = GameController::new();
        play_all(&mut game, &[0, 3, 4, 5, 8]);
        let view = game.board_view(None);
        assert_eq!(view.highlight(), &Some([0, 4, 8]));
        assert!(!view.x_is_next());
        assert!(!view.game_draw());
    }
}
