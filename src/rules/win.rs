//! Win condition checking
//!
//! A player wins by filling a complete line: one of the five rows, one of the
//! five columns, or either full diagonal. Only the lines through the cell that
//! was just played are scanned.

use crate::board::{Bitboard, Board, Player, Pos, BOARD_SIZE};
use tracing::instrument;

/// Marks needed to win: the full length of a line
pub const WIN_LENGTH: usize = BOARD_SIZE;

/// A full line of cells across the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(u8),
    Column(u8),
    /// Top-left to bottom-right
    MainDiagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Line {
    /// Cells of the line, in scan order
    pub fn cells(self) -> [Pos; WIN_LENGTH] {
        let last = (BOARD_SIZE - 1) as u8;
        std::array::from_fn(|i| {
            let i = i as u8;
            match self {
                Line::Row(r) => Pos::new(r, i),
                Line::Column(c) => Pos::new(i, c),
                Line::MainDiagonal => Pos::new(i, i),
                Line::AntiDiagonal => Pos::new(i, last - i),
            }
        })
    }

    /// Bit mask of the line's cells
    pub fn mask(self) -> Bitboard {
        let bits = self
            .cells()
            .iter()
            .fold(0u32, |acc, pos| acc | 1 << pos.to_index());
        Bitboard::from_bits(bits)
    }

    /// Whether `pos` lies on this line
    pub fn contains(self, pos: Pos) -> bool {
        match self {
            Line::Row(r) => pos.row == r,
            Line::Column(c) => pos.col == c,
            Line::MainDiagonal => pos.row == pos.col,
            Line::AntiDiagonal => pos.row as usize + pos.col as usize == BOARD_SIZE - 1,
        }
    }
}

/// Lines through a cell: its row, its column, then any diagonal it lies on.
///
/// Yields two lines for most cells, three for diagonal cells, and four for
/// the center.
pub fn lines_through(pos: Pos) -> impl Iterator<Item = Line> {
    [
        Some(Line::Row(pos.row)),
        Some(Line::Column(pos.col)),
        Line::MainDiagonal.contains(pos).then_some(Line::MainDiagonal),
        Line::AntiDiagonal.contains(pos).then_some(Line::AntiDiagonal),
    ]
    .into_iter()
    .flatten()
}

/// Check if `line` is entirely filled by `player`
#[inline]
pub fn is_line_complete(board: &Board, line: Line, player: Player) -> bool {
    board.marks(player).contains_all(line.mask())
}

/// Find a completed line through `pos` for `player`.
///
/// Scans row, column, main diagonal, anti-diagonal in that order and returns
/// the first one that is fully matched.
#[instrument(level = "trace", skip(board))]
pub fn completed_line(board: &Board, pos: Pos, player: Player) -> Option<Line> {
    lines_through(pos).find(|&line| is_line_complete(board, line, player))
}

/// Whether the last move at `pos` won the game for `player`
#[inline]
pub fn has_win_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    completed_line(board, pos, player).is_some()
}
