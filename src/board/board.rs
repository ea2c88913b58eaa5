//! Board structure

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, BOARD_SIZE};

/// Game board: one bitboard per player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// X marks
    pub x: Bitboard,
    /// O marks
    pub o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.x.get(pos) {
            Cell::X
        } else if self.o.get(pos) {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Mark a cell for `player`. Callers check emptiness first.
    #[inline]
    pub fn place_mark(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.is_empty(pos), "cell {pos:?} already marked");
        self.marks_mut(player).set(pos);
    }

    /// Bitboard for a player
    #[inline]
    pub fn marks(&self, player: Player) -> &Bitboard {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    #[inline]
    fn marks_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    /// All cells occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.x.union(self.o).is_full()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// Remove every mark
    pub fn clear(&mut self) {
        self.x = Bitboard::new();
        self.o = Bitboard::new();
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for pos in Pos::all() {
            rows[pos.row as usize][pos.col as usize] = self.get(pos);
        }
        rows
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
