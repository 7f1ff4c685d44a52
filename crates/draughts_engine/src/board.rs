//! Board state and position queries
//!
//! [`Board`] owns the two packed words (occupancy and crowned overlay) and
//! keeps two invariants at all times:
//! - no square is occupied by both sides
//! - every crowned bit sits on an occupied square of the same side
//!
//! Queries are pure O(1) lookups. Mutation is `pub(crate)` and only reached
//! through the move executor in [`crate::rules`].

use crate::bitboard::BitSet;
use crate::error::PersistenceError;
use crate::square::Square;
use crate::types::{Piece, Side};

/// Rows holding Second's men at the start
const SECOND_START_ROWS: std::ops::Range<i8> = 0..3;

/// Rows holding First's men at the start
const FIRST_START_ROWS: std::ops::Range<i8> = 5..8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: BitSet,
    kings: BitSet,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Standard starting layout, 12 men per side
    pub fn new() -> Self {
        let mut board = Board::empty();
        for square in Square::all() {
            if FIRST_START_ROWS.contains(&square.row()) {
                board.pieces.insert(Side::First, square);
            } else if SECOND_START_ROWS.contains(&square.row()) {
                board.pieces.insert(Side::Second, square);
            }
        }
        board
    }

    /// Board with no pieces
    pub const fn empty() -> Self {
        Board {
            pieces: BitSet::new(),
            kings: BitSet::new(),
        }
    }

    /// Build a custom position
    ///
    /// Later lists win when a square is named twice. `kings` marks squares
    /// already placed by `first` or `second` as crowned; kings on empty
    /// squares are ignored.
    pub fn from_squares(first: &[Square], second: &[Square], kings: &[Square]) -> Self {
        let mut board = Board::empty();
        for &square in first {
            board.place(square, Piece { side: Side::First, crowned: false });
        }
        for &square in second {
            board.place(square, Piece { side: Side::Second, crowned: false });
        }
        for &square in kings {
            if let Some(side) = board.piece_at(square) {
                board.kings.insert(side, square);
            }
        }
        board
    }

    /// Rebuild from the packed `(occupancy, crowned)` words
    pub fn from_raw(pieces: u64, kings: u64) -> Result<Self, PersistenceError> {
        let pieces = BitSet(pieces);
        let kings = BitSet(kings);

        let overlap = pieces.half(Side::First) & pieces.half(Side::Second);
        if overlap != 0 {
            return Err(PersistenceError::Inconsistent {
                message: format!("squares {:#010x} are occupied by both sides", overlap),
            });
        }
        if kings.0 & !pieces.0 != 0 {
            return Err(PersistenceError::Inconsistent {
                message: "crowned squares without a piece".to_string(),
            });
        }

        Ok(Board { pieces, kings })
    }

    /// Packed `(occupancy, crowned)` words
    #[inline]
    pub fn raw(&self) -> (u64, u64) {
        (self.pieces.0, self.kings.0)
    }

    /// Which side occupies `square`, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Side> {
        if self.pieces.contains(Side::First, square) {
            Some(Side::First)
        } else if self.pieces.contains(Side::Second, square) {
            Some(Side::Second)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_crowned(&self, square: Square) -> bool {
        self.kings.contains(Side::First, square) || self.kings.contains(Side::Second, square)
    }

    /// Full piece description at `square`
    #[inline]
    pub fn piece(&self, square: Square) -> Option<Piece> {
        self.piece_at(square).map(|side| Piece {
            side,
            crowned: self.kings.contains(side, square),
        })
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> u32 {
        self.pieces.count(side)
    }

    #[inline]
    pub fn king_count(&self, side: Side) -> u32 {
        self.kings.count(side)
    }

    /// Occupied squares of `side`, in index order
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> {
        self.pieces.squares(side)
    }

    /// Occupancy half of `side` as a 32-bit mask
    #[inline]
    pub fn occupancy(&self, side: Side) -> u32 {
        self.pieces.half(side)
    }

    /// Crowned half of `side` as a 32-bit mask
    #[inline]
    pub fn crowned(&self, side: Side) -> u32 {
        self.kings.half(side)
    }

    pub(crate) fn place(&mut self, square: Square, piece: Piece) {
        self.remove(square);
        self.pieces.insert(piece.side, square);
        if piece.crowned {
            self.kings.insert(piece.side, square);
        }
    }

    /// Clear `square` from both sides and from the crowned overlay
    pub(crate) fn remove(&mut self, square: Square) {
        self.pieces.remove_both(square);
        self.kings.remove_both(square);
    }

    /// Move `side`'s piece, carrying its crown along
    pub(crate) fn relocate(&mut self, side: Side, from: Square, to: Square) {
        self.pieces.remove(side, from);
        self.pieces.insert(side, to);
        if self.kings.contains(side, from) {
            self.kings.remove(side, from);
            self.kings.insert(side, to);
        }
    }

    pub(crate) fn crown(&mut self, side: Side, square: Square) {
        self.kings.insert(side, square);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_starting_layout() {
        let board = Board::new();
        assert_eq!(board.piece_count(Side::First), 12);
        assert_eq!(board.piece_count(Side::Second), 12);
        assert_eq!(board.king_count(Side::First), 0);

        assert_eq!(board.piece_at(sq(0, 1)), Some(Side::Second));
        assert_eq!(board.piece_at(sq(2, 7)), Some(Side::Second));
        assert_eq!(board.piece_at(sq(5, 0)), Some(Side::First));
        assert_eq!(board.piece_at(sq(7, 6)), Some(Side::First));
        assert!(board.is_empty(sq(3, 0)));
        assert!(board.is_empty(sq(4, 7)));
    }

    #[test]
    fn test_starting_layout_packing() {
        let (pieces, kings) = Board::new().raw();
        // First holds indices 20..32, Second holds indices 0..12
        assert_eq!(pieces & 0xFFFF_FFFF, 0xFFF0_0000);
        assert_eq!(pieces >> 32, 0x0000_0FFF);
        assert_eq!(kings, 0);
    }

    #[test]
    fn test_relocate_carries_crown() {
        let mut board = Board::from_squares(&[sq(4, 3)], &[], &[sq(4, 3)]);
        board.relocate(Side::First, sq(4, 3), sq(3, 4));

        assert!(board.is_empty(sq(4, 3)));
        assert!(!board.is_crowned(sq(4, 3)));
        assert_eq!(
            board.piece(sq(3, 4)),
            Some(Piece { side: Side::First, crowned: true })
        );
    }

    #[test]
    fn test_remove_clears_crown() {
        let mut board = Board::from_squares(&[], &[sq(2, 1)], &[sq(2, 1)]);
        board.remove(sq(2, 1));
        assert_eq!(board.raw(), (0, 0));
    }

    #[test]
    fn test_from_raw_rejects_overlap() {
        let both = 1u64 | (1u64 << 32);
        assert!(matches!(
            Board::from_raw(both, 0),
            Err(PersistenceError::Inconsistent { .. })
        ));
    }

    #[test]
    fn test_from_raw_rejects_orphan_crown() {
        assert!(matches!(
            Board::from_raw(0b10, 0b01),
            Err(PersistenceError::Inconsistent { .. })
        ));
    }

    #[test]
    fn test_from_raw_round_trip() {
        let board = Board::from_squares(&[sq(0, 3)], &[sq(7, 4), sq(3, 2)], &[sq(0, 3), sq(7, 4)]);
        let (pieces, kings) = board.raw();
        assert_eq!(Board::from_raw(pieces, kings).unwrap(), board);
    }
}
