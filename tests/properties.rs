//! Property-based tests for the game engine.

use proptest::prelude::*;

use tictactoe::{Cell, Game, Outcome, Player, Pos, RejectReason, TOTAL_CELLS};

/// Strategy: a sequence of cell indices (repeats allowed).
fn clicks_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..TOTAL_CELLS, 0..60)
}

/// Strategy: every cell exactly once, in random order.
fn permutation_strategy() -> impl Strategy<Value = Vec<usize>> {
    Just((0..TOTAL_CELLS).collect::<Vec<_>>()).prop_shuffle()
}

fn place(game: &mut Game, idx: usize) -> Outcome {
    let pos = Pos::from_index(idx);
    game.place(pos.row as usize, pos.col as usize)
}

proptest! {
    // 1. Active player alternates strictly until a terminal outcome
    #[test]
    fn turns_alternate(order in permutation_strategy()) {
        let mut game = Game::new();
        let mut expected = Player::X;
        for idx in order {
            prop_assert_eq!(game.active_player(), expected);
            let outcome = place(&mut game, idx);
            prop_assert_eq!(game.cell(Pos::from_index(idx)), Cell::from(expected));
            if outcome.is_terminal() {
                break;
            }
            prop_assert_eq!(outcome, Outcome::Continue);
            expected = expected.opponent();
        }
    }

    // 2. Rejected placements never change board or turn
    #[test]
    fn rejected_is_noop(clicks in clicks_strategy()) {
        let mut game = Game::new();
        for idx in clicks {
            let board_before = game.board().clone();
            let player_before = game.active_player();
            let was_occupied = game.cell(Pos::from_index(idx)) != Cell::Empty;
            let was_over = game.is_over();

            let outcome = place(&mut game, idx);
            if was_over {
                prop_assert_eq!(outcome, Outcome::Rejected(RejectReason::GameOver));
            } else if was_occupied {
                prop_assert_eq!(outcome, Outcome::Rejected(RejectReason::Occupied));
            }
            if let Outcome::Rejected(_) = outcome {
                prop_assert_eq!(game.board(), &board_before);
                prop_assert_eq!(game.active_player(), player_before);
            }
        }
    }

    // 3. A filled cell keeps its mark until reset
    #[test]
    fn marks_are_permanent(clicks in clicks_strategy()) {
        let mut game = Game::new();
        let mut seen: Vec<Cell> = vec![Cell::Empty; TOTAL_CELLS];
        for idx in clicks {
            place(&mut game, idx);
            for (i, prev) in seen.iter_mut().enumerate() {
                let now = game.cell(Pos::from_index(i));
                if *prev != Cell::Empty {
                    prop_assert_eq!(now, *prev);
                }
                *prev = now;
            }
        }
    }

    // 4. A win is reported exactly on the completing move, and a full board
    //    without a win is a draw on the 25th placement
    #[test]
    fn terminal_outcome_on_completing_move(order in permutation_strategy()) {
        let mut game = Game::new();
        for (n, idx) in order.into_iter().enumerate() {
            let player = game.active_player();
            let pos = Pos::from_index(idx);
            let outcome = place(&mut game, idx);

            let completed = tictactoe::rules::completed_line(game.board(), pos, player);
            match outcome {
                Outcome::Win(winner) => {
                    prop_assert_eq!(winner, player);
                    prop_assert!(completed.is_some());
                    break;
                }
                Outcome::Draw => {
                    prop_assert_eq!(n + 1, TOTAL_CELLS);
                    prop_assert!(completed.is_none());
                    break;
                }
                Outcome::Continue => {
                    prop_assert!(completed.is_none());
                    prop_assert!(n + 1 < TOTAL_CELLS);
                }
                Outcome::Rejected(_) => prop_assert!(false, "fresh cell rejected"),
            }
        }
        prop_assert!(game.is_over());
    }

    // 5. Reset behaves like a fresh board
    #[test]
    fn reset_matches_fresh_game(prefix in clicks_strategy(), order in permutation_strategy()) {
        let mut played = Game::new();
        for idx in prefix {
            place(&mut played, idx);
        }
        played.reset();

        let mut fresh = Game::new();
        for idx in order {
            let a = place(&mut played, idx);
            let b = place(&mut fresh, idx);
            prop_assert_eq!(a, b);
            prop_assert_eq!(played.board(), fresh.board());
            prop_assert_eq!(played.active_player(), fresh.active_player());
            if a.is_terminal() {
                break;
            }
        }
    }
}
