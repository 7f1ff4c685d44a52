//! Core engine types
//!
//! Sides, pieces, moves and what a move did to the board.

use std::fmt;

use crate::square::Square;

/// One of the two players
///
/// `First` (red, displayed `r`) starts on rows 5-7 and moves toward row 0.
/// `Second` (black, displayed `b`) starts on rows 0-2 and moves toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The other side
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Row step of an uncrowned piece
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::First => -1,
            Side::Second => 1,
        }
    }

    /// Row on which a piece of this side is crowned
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::First => 0,
            Side::Second => 7,
        }
    }

    /// Digit used by the save format
    #[inline]
    pub const fn to_digit(self) -> u8 {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    #[inline]
    pub const fn from_digit(digit: u64) -> Option<Side> {
        match digit {
            0 => Some(Side::First),
            1 => Some(Side::Second),
            _ => None,
        }
    }

    /// Lower-case glyph of an uncrowned piece
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Side::First => 'r',
            Side::Second => 'b',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "red"),
            Side::Second => write!(f, "black"),
        }
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub crowned: bool,
}

impl Piece {
    /// Render glyph: `r`/`b` for men, `R`/`B` for kings
    pub fn glyph(self) -> char {
        let c = self.side.glyph();
        if self.crowned {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// A single step or a single jump
///
/// A jump carries the square of the piece it removes. A capture chain is a
/// sequence of these, one per ply of the same side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    pub const fn step(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    pub const fn jump(from: Square, over: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: Some(over),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(_) => write!(f, "{}x{}", self.from, self.to),
            None => write!(f, "{}-{}", self.from, self.to),
        }
    }
}

/// What happened when a move was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Side that made the move
    pub side: Side,
    pub mv: Move,
    /// Square of the removed piece, if the move was a jump
    pub captured: Option<Square>,
    /// The moving piece was crowned by this move
    pub promoted: bool,
    /// Set when the same piece must keep jumping from this square
    pub chain: Option<Square>,
}

/// Result of a terminal check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Side),
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
