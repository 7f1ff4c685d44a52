//! Rules engine for English draughts (checkers)
//!
//! The engine keeps the whole position in two packed 64-bit words and exposes
//! typed accessors on top of them. Everything above the encoding works with
//! [`Square`] and [`Side`] and never touches raw bit positions.
//!
//! ## Module Organization
//!
//! - `square` - Playable-square coordinates and the square index mapping
//! - `bitboard` - Side-partitioned packed bit sets
//! - `board` - Board state and position queries
//! - `move_gen` - Simple and capture move generation, forced-capture detection
//! - `rules` - Move validation and execution
//! - `game` - Turn/chain state machine and terminal detection
//! - `bot` - Random capture-first opponent
//! - `persist` - Three-line save format

pub mod bitboard;
pub mod board;
pub mod bot;
pub mod error;
pub mod game;
pub mod move_gen;
pub mod persist;
pub mod rules;
pub mod square;
pub mod types;

pub use board::Board;
pub use error::{DraughtsError, DraughtsResult, IllegalMoveReason, PersistenceError};
pub use game::{Game, TurnState};
pub use square::Square;
pub use types::{GameStatus, Move, MoveOutcome, Piece, Side};
