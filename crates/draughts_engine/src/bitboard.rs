//! # Packed side-partitioned bit sets
//!
//! A draughts piece never stands on a light square, so the 32 playable
//! squares fit in 32 bits. Both sides share one `u64`:
//!
//! - Bits 0-31: First (red), bit `i` = square index `i`
//! - Bits 32-63: Second (black), bit `32 + i` = square index `i`
//!
//! The board keeps two of these words, one for occupancy and one for the
//! crowned overlay. The same two words, written as decimal numbers, are the
//! save format, so this layout is part of the file format too.
//!
//! Common operations:
//! - **Insert**: `word |= 1 << bit` (O(1))
//! - **Remove**: `word &= !(1 << bit)` (O(1))
//! - **Contains**: `word & (1 << bit) != 0` (O(1))
//! - **Count**: `half.count_ones()`, hardware POPCNT (O(1))
//!
//! This is the only module that computes bit positions. Callers address bits
//! through `(Side, Square)` pairs.

use crate::square::Square;
use crate::types::Side;

/// Width of one side's half
pub const HALF_BITS: u32 = 32;

const HALF_MASK: u64 = 0xFFFF_FFFF;

/// Bit position of `square` in `side`'s half
#[inline]
fn bit(side: Side, square: Square) -> u32 {
    let base = match side {
        Side::First => 0,
        Side::Second => HALF_BITS,
    };
    base + square.index() as u32
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitSet(pub u64);

impl BitSet {
    pub const fn new() -> Self {
        BitSet(0)
    }

    #[inline]
    pub fn insert(&mut self, side: Side, square: Square) {
        self.0 |= 1u64 << bit(side, square);
    }

    #[inline]
    pub fn remove(&mut self, side: Side, square: Square) {
        self.0 &= !(1u64 << bit(side, square));
    }

    /// Clear `square` in both halves
    #[inline]
    pub fn remove_both(&mut self, square: Square) {
        self.remove(Side::First, square);
        self.remove(Side::Second, square);
    }

    #[inline]
    pub fn contains(&self, side: Side, square: Square) -> bool {
        (self.0 & (1u64 << bit(side, square))) != 0
    }

    /// The 32-bit half belonging to `side`
    #[inline]
    pub fn half(&self, side: Side) -> u32 {
        match side {
            Side::First => (self.0 & HALF_MASK) as u32,
            Side::Second => (self.0 >> HALF_BITS) as u32,
        }
    }

    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        self.half(side).count_ones()
    }

    #[inline]
    pub fn count_ones(&self) -> u32 {
        self.0.count_ones()
    }

    /// Squares set in `side`'s half, lowest index first
    pub fn squares(&self, side: Side) -> impl Iterator<Item = Square> {
        let mut bits = self.half(side);
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Square::from_index(index)
        })
    }
}
