//! Full-game scenarios through the public API.

use tictactoe::ui::GameState;
use tictactoe::{Game, Line, Outcome, Player, Pos, RejectReason};

/// Alternate X and O moves; every move before the last must continue.
fn play(game: &mut Game, x_moves: &[(usize, usize)], o_moves: &[(usize, usize)]) -> Outcome {
    let mut last = Outcome::Continue;
    for (i, &(r, c)) in x_moves.iter().enumerate() {
        assert_eq!(last, Outcome::Continue, "game ended early at X move {i}");
        last = game.place(r, c);
        if let Some(&(r, c)) = o_moves.get(i) {
            if last != Outcome::Continue {
                break;
            }
            last = game.place(r, c);
        }
    }
    last
}

#[test]
fn test_row_win_with_rejected_reoccupy() {
    let mut game = Game::new();
    assert_eq!(game.place(0, 0), Outcome::Continue);
    assert_eq!(game.place(1, 1), Outcome::Continue);

    // O's cell can't be taken back by X
    assert_eq!(game.place(1, 1), Outcome::Rejected(RejectReason::Occupied));
    assert_eq!(game.active_player(), Player::X);

    assert_eq!(game.place(0, 1), Outcome::Continue);
    assert_eq!(game.place(2, 1), Outcome::Continue);
    assert_eq!(game.place(0, 2), Outcome::Continue);
    assert_eq!(game.place(3, 1), Outcome::Continue);
    assert_eq!(game.place(0, 3), Outcome::Continue);
    assert_eq!(game.place(4, 3), Outcome::Continue);
    assert_eq!(game.place(0, 4), Outcome::Win(Player::X));
    assert_eq!(game.winning_line(), Some(Line::Row(0)));
}

#[test]
fn test_main_diagonal_win() {
    let mut game = Game::new();
    let outcome = play(
        &mut game,
        &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)],
        &[(0, 1), (0, 2), (0, 3), (1, 0)],
    );
    assert_eq!(outcome, Outcome::Win(Player::X));
    assert_eq!(game.winning_line(), Some(Line::MainDiagonal));
}

#[test]
fn test_anti_diagonal_win() {
    let mut game = Game::new();
    let outcome = play(
        &mut game,
        &[(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)],
        &[(0, 0), (1, 1), (3, 3), (4, 4)],
    );
    assert_eq!(outcome, Outcome::Win(Player::X));
    assert_eq!(game.winning_line(), Some(Line::AntiDiagonal));
}

#[test]
fn test_win_not_detected_early() {
    let mut game = Game::new();
    // Four of five in column 2 is still just a move
    let outcome = play(
        &mut game,
        &[(0, 2), (1, 2), (2, 2), (3, 2)],
        &[(0, 0), (1, 0), (2, 0), (3, 3)],
    );
    assert_eq!(outcome, Outcome::Continue);
    assert!(!game.is_over());
    assert_eq!(game.place(4, 2), Outcome::Win(Player::X));
}

#[test]
fn test_presentation_round_trip() {
    let mut state = GameState::new();
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3)] {
        assert_eq!(state.click(Pos::new(r, c)), Outcome::Continue);
    }
    assert_eq!(state.click(Pos::new(0, 4)), Outcome::Win(Player::X));
    assert_eq!(state.status_text(), "Player X wins!");

    state.dismiss_game_over();
    assert_eq!(state.status_text(), "Player X's turn");
    assert!(state.board().is_board_empty());
}
