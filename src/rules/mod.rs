//! Game rules for 5x5 tic-tac-toe
//!
//! - Win: a full row, column, or diagonal of one player's marks
//! - Draw: all 25 cells filled without a win

pub mod draw;
pub mod win;

// Re-exports for convenient access
pub use draw::is_full;
pub use win::{
    completed_line, has_win_at_pos, is_line_complete, lines_through, Line, WIN_LENGTH,
};
