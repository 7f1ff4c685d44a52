//! Playable squares and the square index mapping
//!
//! Only the 32 dark squares of the board can ever hold a piece. A dark square
//! is one where `row + col` is odd. Each of them maps to an index in `0..32`:
//!
//! ```text
//! index = row * 4 + col / 2
//! ```
//!
//! Row 0 is the top of the board as displayed (rank 8), column 0 is file `a`.
//!
//! [`Square::new`] is the only way to turn raw coordinates into a square, so
//! bounds and parity are checked in exactly one place.

use std::fmt;

/// Number of playable squares
pub const PLAYABLE_SQUARES: u8 = 32;

/// Board edge length
pub const BOARD_SIZE: i8 = 8;

/// Check whether `(row, col)` is on the board and dark
#[inline]
pub const fn is_playable_square(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE && (row + col) % 2 == 1
}

/// A dark, playable square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Square at `(row, col)`, or `None` for off-board and light squares
    #[inline]
    pub const fn new(row: i8, col: i8) -> Option<Square> {
        if is_playable_square(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Square for a packed index in `0..32`
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index >= PLAYABLE_SQUARES {
            return None;
        }
        let row = index / 4;
        // Even rows have their dark squares on odd columns and vice versa
        let col = (index % 4) * 2 + if row % 2 == 0 { 1 } else { 0 };
        Some(Square { row, col })
    }

    /// Packed index in `0..32`
    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 4 + self.col / 2
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row as i8
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col as i8
    }

    /// Square reached by stepping `(drow, dcol)`, if it is playable
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        Square::new(self.row() + drow, self.col() + dcol)
    }

    /// All playable squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..PLAYABLE_SQUARES).filter_map(Square::from_index)
    }
}

/// Algebraic name, e.g. `c3`
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE as u8 - self.row;
        write!(f, "{}{}", file, rank)
    }
}
