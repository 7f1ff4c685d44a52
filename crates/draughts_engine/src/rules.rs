//! Move validation and execution
//!
//! Validation checks, in order:
//! 1. the source holds a piece of the side to move
//! 2. the destination is empty (playability is guaranteed by [`Square`])
//! 3. a pending capture chain is continued from its anchor
//! 4. when the side has any capture, the moving piece has one too
//! 5. the pair is among the generated moves for the piece
//!
//! Validation never mutates the board. Execution assumes a validated move.

use tracing::debug;

use crate::board::Board;
use crate::error::IllegalMoveReason;
use crate::move_gen::{captures_from, forced_capture_exists, legal_moves_from};
use crate::square::Square;
use crate::types::{Move, Side};


/// Board-level effects of an executed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub captured: Option<Square>,
    pub promoted: bool,
}

/// Validate `from -> to` for `turn`, returning the matching generated move
///
/// `anchor` is the square a pending capture chain must continue from.
pub fn validate_move(
    board: &Board,
    turn: Side,
    anchor: Option<Square>,
    from: Square,
    to: Square,
) -> Result<Move, IllegalMoveReason> {
    match board.piece_at(from) {
        None => return Err(IllegalMoveReason::NoPiece { square: from }),
        Some(owner) if owner != turn => {
            return Err(IllegalMoveReason::NotYourTurn {
                square: from,
                owner,
                turn,
            })
        }
        Some(_) => {}
    }

    if !board.is_empty(to) {
        return Err(IllegalMoveReason::DestinationOccupied { square: to });
    }

    if let Some(anchor) = anchor {
        if from != anchor {
            return Err(IllegalMoveReason::ChainContinuation { anchor });
        }
    }

    let must_capture = forced_capture_exists(board, turn);
    if must_capture && !captures_from(board, from) {
        return Err(IllegalMoveReason::ForcedCapture { square: from });
    }

    // An anchor always has a jump, so `must_capture` holds and only jumps are generated
    match legal_moves_from(board, from, must_capture)
        .into_iter()
        .find(|mv| mv.to == to)
    {
        Some(mv) => Ok(mv),
        None => match anchor {
            Some(anchor) => Err(IllegalMoveReason::ChainContinuation { anchor }),
            None => Err(IllegalMoveReason::NotInMoveSet { from, to }),
        },
    }
}

/// Whether `from -> to` is legal for `turn` with no chain pending
pub fn is_legal(board: &Board, turn: Side, from: Square, to: Square) -> bool {
    validate_move(board, turn, None, from, to).is_ok()
}

/// Apply a validated move for `side`
///
/// Moves the piece and its crown, removes the jumped piece from both sides
/// and the crowned overlay, and crowns an uncrowned piece landing on the far
/// rank.
pub fn apply_move(board: &mut Board, side: Side, mv: Move) -> Applied {
    let was_crowned = board.is_crowned(mv.from);
    board.relocate(side, mv.from, mv.to);

    if let Some(captured) = mv.captured {
        board.remove(captured);
        debug!("[RULES] {} captured {}", side, captured);
    }

    let promoted = !was_crowned && mv.to.row() == side.promotion_row();
    if promoted {
        board.crown(side, mv.to);
        debug!("[RULES] {} crowned on {}", side, mv.to);
    }

    Applied {
        captured: mv.captured,
        promoted,
    }
}
