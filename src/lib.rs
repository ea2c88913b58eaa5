//! 5x5 Tic-Tac-Toe
//!
//! Two local players alternate placing X and O on a 5x5 grid. A player wins
//! by filling a whole row, column, or diagonal; a full board without a winner
//! is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with one bitboard per player
//! - [`rules`]: Win and draw detection
//! - [`game`]: Game state and rule engine (`place` / `reset`)
//! - [`ui`]: egui/eframe front end that observes [`Outcome`]s
//! - [`cli`]: Launcher options
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! assert_eq!(game.place(2, 2), Outcome::Continue);
//! assert_eq!(game.active_player(), Player::O);
//!
//! // Occupied cells are refused without changing the turn
//! assert!(matches!(game.place(2, 2), Outcome::Rejected(_)));
//! assert_eq!(game.active_player(), Player::O);
//! ```

pub mod board;
pub mod cli;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use game::{Game, Outcome, Progress, RejectReason};
pub use rules::Line;
