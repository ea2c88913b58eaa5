//! Draw detection

use crate::board::Board;

/// Checks if every cell is occupied.
///
/// A full board with no completed line is a draw.
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Player, Pos};
    use crate::rules::win::has_win_at_pos;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_drawn_board() {
        // Pattern per row, no row/column/diagonal uniform:
        // X X O O X
        // O O X X O
        // X X O O X
        // O O X X O
        // X O X O X
        let layout = ["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XOXOX"];
        let mut board = Board::new();
        for (r, row) in layout.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let player = if ch == 'X' { Player::X } else { Player::O };
                board.place_mark(Pos::new(r as u8, c as u8), player);
            }
        }

        assert!(is_full(&board));
        for pos in Pos::all() {
            assert!(!has_win_at_pos(&board, pos, Player::X));
            assert!(!has_win_at_pos(&board, pos, Player::O));
        }
    }
}
