//! Tests for history management and time travel.

use rewind_tictactoe::{
    Board, Cell, GameController, HistoryError, Mark, SortOrder, check_winner, move_list,
    winning_line,
};

fn play(game: &mut GameController, indices: &[usize]) {
    for &index in indices {
        assert!(game.place(index).expect("valid placement"));
    }
}

#[test]
fn test_full_board_without_winner_is_a_draw() {
    let mut game = GameController::new();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.current_move(), 9);
    assert!(game.is_draw());
    assert_eq!(game.winner(), None);
    assert_eq!(game.board_view(None).status().to_string(), "Game draw");
}

#[test]
fn test_diagonal_win_reports_exact_line() {
    let mut game = GameController::new();
    play(&mut game, &[4, 1, 0, 2, 8]);

    let board = game.current_board();
    assert_eq!(winning_line(board), Some([0, 4, 8]));
    assert_eq!(check_winner(board), Some(Mark::X));
    assert_eq!(game.board_view(None).status().to_string(), "Winner: X");
}

#[test]
fn test_jump_then_play_discards_future() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 2, 3, 4]);

    for k in 0..5 {
        let mut branch = game.clone();
        branch.jump_to(k).unwrap();
        let next = branch
            .board_view(None)
            .click(8)
            .expect("cell 8 is empty before move 5");
        branch.play(next).unwrap();

        assert_eq!(branch.history().len(), k + 2);
        assert_eq!(&branch.history()[..=k], &game.history()[..=k]);
        assert_eq!(branch.current_move(), k + 1);
    }
}

#[test]
fn test_jump_back_without_playing_loses_future() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 2]);
    game.jump_to(1).unwrap();

    assert!(matches!(
        game.jump_to(3),
        Err(HistoryError::MoveOutOfRange { requested: 3, len: 2 })
    ));
}

#[test]
fn test_history_snapshots_differ_by_one_cell() {
    let mut game = GameController::new();
    play(&mut game, &[4, 0, 8, 2, 6]);

    for pair in game.history().windows(2) {
        let changed = pair[0]
            .cells()
            .iter()
            .zip(pair[1].cells())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }
}

#[test]
fn test_move_list_follows_history() {
    let mut game = GameController::new();
    play(&mut game, &[5, 0, 4]);
    game.jump_to(2).unwrap();

    let entries = move_list(game.history(), game.current_move(), SortOrder::Descending);
    let labels: Vec<String> = entries.iter().map(|e| e.label()).collect();
    assert_eq!(
        labels,
        vec![
            "You are at move #2 at coordinate (0, 0)",
            "Go to move #1 at coordinate (2, 1)",
            "Go to game start",
        ]
    );
}

#[test]
fn test_play_keeps_earlier_snapshots_immutable() {
    let mut game = GameController::new();
    play(&mut game, &[0]);
    let first = game.history()[1];
    play(&mut game, &[1]);

    assert_eq!(game.history()[1], first);
    assert_eq!(game.history()[0], Board::new());
    assert_eq!(game.history()[2].get(1), Some(Cell::Occupied(Mark::O)));
}

#[test]
fn test_ninth_move_win_still_reports_draw() {
    let mut game = GameController::new();
    // X O X / X O O / X X O, the last X completes the left column
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 8, 6]);

    assert_eq!(game.winner(), Some(Mark::X));
    assert!(game.is_draw());

    let view = game.board_view(None);
    assert_eq!(view.status().to_string(), "Game draw");
    assert_eq!(view.highlight(), &Some([0, 3, 6]));
}
