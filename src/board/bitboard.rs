//! Bitboard for one player's marks

use super::{Pos, TOTAL_CELLS};

const FULL_MASK: u32 = (1u32 << TOTAL_CELLS) - 1;

/// One bit per cell, row-major. 25 cells fit in a single u32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u32,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a bitboard from raw bits, ignoring anything past the last cell
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            bits: bits & FULL_MASK,
        }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u32 << pos.to_index();
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True when every bit of `mask` is also set here
    #[inline]
    pub fn contains_all(&self, mask: Bitboard) -> bool {
        self.bits & mask.bits == mask.bits
    }

    /// Union of two bitboards
    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    /// True when all 25 cells are set
    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits == FULL_MASK
    }
}
