//! Error types for the draughts engine
//!
//! Every error here is recoverable. A rejected move or a failed load leaves
//! the game exactly as it was; the caller reports it and asks again.

use std::path::PathBuf;

use thiserror::Error;

use crate::square::Square;
use crate::types::Side;

/// Why a requested move was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Coordinates outside the board or on a light square
    #[error("({row}, {col}) is not a playable square")]
    OffBoard { row: i8, col: i8 },

    /// Nothing to move at the source square
    #[error("No piece at {square}")]
    NoPiece { square: Square },

    /// Source piece belongs to the side that is not on move
    #[error("Piece at {square} belongs to {owner}, but it is {turn}'s turn")]
    NotYourTurn { square: Square, owner: Side, turn: Side },

    /// Destination square already holds a piece
    #[error("Destination {square} is occupied")]
    DestinationOccupied { square: Square },

    /// Another piece of the mover can capture, this one cannot
    #[error("A capture is available; {square} has no capture")]
    ForcedCapture { square: Square },

    /// A capture chain is pending and must be continued from its anchor
    #[error("Chain jump pending: continue capturing with the piece on {anchor}")]
    ChainContinuation { anchor: Square },

    /// The pair is not among the generated moves for the piece
    #[error("{from} to {to} is not a legal move")]
    NotInMoveSet { from: Square, to: Square },
}

/// Failures reading or writing a saved game
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// File could not be opened, read or written
    #[error("Could not access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field is absent from the saved data
    #[error("Invalid file format: missing {field}")]
    MissingField { field: &'static str },

    /// A field is present but does not parse
    #[error("Invalid file format: {field} '{value}' is not a valid number")]
    MalformedField { field: &'static str, value: String },

    /// Turn digit is neither 0 nor 1
    #[error("Invalid file format: side to move must be 0 or 1, found {value}")]
    InvalidTurn { value: u64 },

    /// Words parse but describe an impossible position
    #[error("Inconsistent position: {message}")]
    Inconsistent { message: String },
}

/// Any error the engine can produce
#[derive(Error, Debug)]
pub enum DraughtsError {
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveReason),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Result type alias for engine operations
pub type DraughtsResult<T> = Result<T, DraughtsError>;
