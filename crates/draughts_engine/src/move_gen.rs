//! Move generation
//!
//! Generates simple steps and single jumps for one piece, and answers the
//! forced-capture question for a whole side. Direction rules:
//! - uncrowned First pieces move toward decreasing row only
//! - uncrowned Second pieces move toward increasing row only
//! - crowned pieces use all four diagonals
//!
//! Moves of any other distance never come out of here, so no separate
//! distance check exists anywhere in the engine.

use tracing::trace;

use crate::board::Board;
use crate::square::Square;
use crate::types::{Move, Piece, Side};

/// Diagonal directions in scan order
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Directions available to `piece`
fn directions_for(piece: Piece) -> impl Iterator<Item = (i8, i8)> {
    DIRECTIONS
        .into_iter()
        .filter(move |&(drow, _)| piece.crowned || drow == piece.side.forward())
}

/// Jump from `from` in direction `(drow, dcol)`, if one is available
fn jump_in_direction(board: &Board, from: Square, piece: Piece, drow: i8, dcol: i8) -> Option<Move> {
    let over = from.offset(drow, dcol)?;
    let land = from.offset(2 * drow, 2 * dcol)?;

    if board.piece_at(over) == Some(piece.side.opponent()) && board.is_empty(land) {
        Some(Move::jump(from, over, land))
    } else {
        None
    }
}

/// All jumps for the piece on `from`
fn capture_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    directions_for(piece)
        .filter_map(|(drow, dcol)| jump_in_direction(board, from, piece, drow, dcol))
        .collect()
}

/// All one-step moves into empty squares for the piece on `from`
fn simple_moves(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    directions_for(piece)
        .filter_map(|(drow, dcol)| from.offset(drow, dcol))
        .filter(|&to| board.is_empty(to))
        .map(|to| Move::step(from, to))
        .collect()
}

/// Whether the piece on `square` has at least one jump
///
/// Returns `false` for an empty square.
pub fn captures_from(board: &Board, square: Square) -> bool {
    let Some(piece) = board.piece(square) else {
        return false;
    };
    directions_for(piece).any(|(drow, dcol)| jump_in_direction(board, square, piece, drow, dcol).is_some())
}

/// Whether any piece of `side` has a jump
pub fn forced_capture_exists(board: &Board, side: Side) -> bool {
    board.squares_of(side).any(|square| captures_from(board, square))
}

/// Moves for the piece on `square`
///
/// With `enforce_capture` set and at least one jump available only the jumps
/// are returned. Otherwise jumps come first, followed by simple steps.
pub fn legal_moves_from(board: &Board, square: Square, enforce_capture: bool) -> Vec<Move> {
    let Some(piece) = board.piece(square) else {
        return Vec::new();
    };

    let mut moves = capture_moves(board, square, piece);
    if !(enforce_capture && !moves.is_empty()) {
        moves.extend(simple_moves(board, square, piece));
    }

    trace!("[MOVEGEN] {} has {} candidate moves", square, moves.len());
    moves
}

/// Candidate moves for every piece of `side`, concatenated in square order
///
/// Uses the side's current forced-capture policy per piece. Pieces without a
/// jump still contribute their simple steps; callers that need the strict
/// rule filter to captures themselves.
pub fn moves_for_side(board: &Board, side: Side) -> Vec<Move> {
    let must_capture = forced_capture_exists(board, side);
    board
        .squares_of(side)
        .flat_map(|square| legal_moves_from(board, square, must_capture))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_men_only_move_forward() {
        let board = Board::from_squares(&[sq(4, 3)], &[sq(3, 4)], &[]);

        let red: Vec<Square> = legal_moves_from(&board, sq(4, 3), false)
            .iter()
            .map(|m| m.to)
            .collect();
        assert!(red.iter().all(|to| to.row() < 4));

        let black: Vec<Square> = legal_moves_from(&board, sq(3, 4), false)
            .iter()
            .map(|m| m.to)
            .collect();
        assert!(black.iter().all(|to| to.row() > 3));
    }

    #[test]
    fn test_king_uses_all_directions() {
        let board = Board::from_squares(&[sq(4, 3)], &[], &[sq(4, 3)]);
        let moves = legal_moves_from(&board, sq(4, 3), false);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_man_cannot_capture_backward() {
        // Second piece behind the red man
        let board = Board::from_squares(&[sq(3, 2)], &[sq(4, 3)], &[]);
        assert!(!captures_from(&board, sq(3, 2)));

        let crowned = Board::from_squares(&[sq(3, 2)], &[sq(4, 3)], &[sq(3, 2)]);
        assert!(captures_from(&crowned, sq(3, 2)));
    }

    #[test]
    fn test_capture_needs_empty_landing() {
        let board = Board::from_squares(&[sq(4, 1)], &[sq(3, 2), sq(2, 3)], &[]);
        assert!(!captures_from(&board, sq(4, 1)));
    }

    #[test]
    fn test_capture_cannot_leave_board() {
        let board = Board::from_squares(&[sq(2, 1)], &[sq(1, 0)], &[]);
        assert!(!captures_from(&board, sq(2, 1)));
    }

    #[test]
    fn test_cannot_jump_own_piece() {
        let board = Board::from_squares(&[sq(4, 1), sq(3, 2)], &[], &[]);
        assert!(!captures_from(&board, sq(4, 1)));
    }

    #[test]
    fn test_enforce_capture_suppresses_steps() {
        let board = Board::from_squares(&[sq(4, 1)], &[sq(3, 2)], &[]);

        let forced = legal_moves_from(&board, sq(4, 1), true);
        assert_eq!(forced, vec![Move::jump(sq(4, 1), sq(3, 2), sq(2, 3))]);

        let relaxed = legal_moves_from(&board, sq(4, 1), false);
        assert_eq!(relaxed.len(), 2);
        assert!(relaxed[0].is_capture());
        assert_eq!(relaxed[1], Move::step(sq(4, 1), sq(3, 0)));
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::new();
        assert!(legal_moves_from(&board, sq(4, 3), false).is_empty());
        assert!(!captures_from(&board, sq(4, 3)));
    }

    #[test]
    fn test_moves_for_side_at_start() {
        let board = Board::new();
        assert_eq!(moves_for_side(&board, Side::First).len(), 7);
        assert_eq!(moves_for_side(&board, Side::Second).len(), 7);
    }
}
