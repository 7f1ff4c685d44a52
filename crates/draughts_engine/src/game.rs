//! Turn and chain state machine
//!
//! ```text
//! Idle(side) --simple move--------------------------> Idle(other)
//! Idle(side) --capture, landing square can jump-----> Chaining(side, to)
//! Idle(side) --capture, no further jump-------------> Idle(other)
//! Chaining(side, anchor) --capture from anchor------> same check as above
//! ```
//!
//! Terminal detection reads the live board every time it is asked; nothing
//! about the outcome is cached.

use tracing::debug;

use crate::board::Board;
use crate::error::IllegalMoveReason;
use crate::move_gen::{captures_from, forced_capture_exists, legal_moves_from, moves_for_side};
use crate::rules::{apply_move, validate_move};
use crate::square::Square;
use crate::types::{GameStatus, Move, MoveOutcome, Side};

/// Whose turn it is and whether a jump chain is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// `side` to move, free choice of piece
    Idle(Side),
    /// `side` must keep capturing with the piece on `anchor`
    Chaining { side: Side, anchor: Square },
}

impl TurnState {
    #[inline]
    pub const fn side(&self) -> Side {
        match *self {
            TurnState::Idle(side) => side,
            TurnState::Chaining { side, .. } => side,
        }
    }

    #[inline]
    pub const fn anchor(&self) -> Option<Square> {
        match *self {
            TurnState::Idle(_) => None,
            TurnState::Chaining { anchor, .. } => Some(anchor),
        }
    }
}

/// One game session: the board plus the turn/chain state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: TurnState,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Standard start, First to move
    pub fn new() -> Self {
        Game::from_position(Board::new(), Side::First)
    }

    /// Arbitrary position with `turn` to move and no chain pending
    pub fn from_position(board: Board, turn: Side) -> Self {
        Game {
            board,
            state: TurnState::Idle(turn),
        }
    }

    /// Replace the whole position, dropping any pending chain
    pub fn reset_to(&mut self, board: Board, turn: Side) {
        self.board = board;
        self.state = TurnState::Idle(turn);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Side {
        self.state.side()
    }

    /// Square a pending chain must continue from
    #[inline]
    pub fn chain_anchor(&self) -> Option<Square> {
        self.state.anchor()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Side> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn is_crowned(&self, square: Square) -> bool {
        self.board.is_crowned(square)
    }

    pub fn forced_capture_exists(&self, side: Side) -> bool {
        forced_capture_exists(&self.board, side)
    }

    pub fn captures_from(&self, square: Square) -> bool {
        captures_from(&self.board, square)
    }

    /// Every move the side to move may legally play right now
    ///
    /// During a chain only jumps from the anchor are returned. Otherwise,
    /// when any capture exists, only captures are returned.
    pub fn legal_moves(&self) -> Vec<Move> {
        let side = self.turn();
        let mut moves = match self.state {
            TurnState::Chaining { anchor, .. } => legal_moves_from(&self.board, anchor, true),
            TurnState::Idle(_) => moves_for_side(&self.board, side),
        };
        if self.state.anchor().is_some() || forced_capture_exists(&self.board, side) {
            moves.retain(Move::is_capture);
        }
        moves
    }

    /// Validate and play `from -> to` for the side to move
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, IllegalMoveReason> {
        let mv = validate_move(&self.board, self.turn(), self.chain_anchor(), from, to)?;
        Ok(self.play(mv))
    }

    /// [`Game::try_move`] for raw `(row, col)` coordinates
    pub fn try_move_coords(
        &mut self,
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
    ) -> Result<MoveOutcome, IllegalMoveReason> {
        let from = Square::new(from_row, from_col).ok_or(IllegalMoveReason::OffBoard {
            row: from_row,
            col: from_col,
        })?;
        let to = Square::new(to_row, to_col).ok_or(IllegalMoveReason::OffBoard {
            row: to_row,
            col: to_col,
        })?;
        self.try_move(from, to)
    }

    /// Apply an already validated move and advance the state machine
    pub(crate) fn play(&mut self, mv: Move) -> MoveOutcome {
        let side = self.turn();
        let applied = apply_move(&mut self.board, side, mv);

        let chain = if mv.is_capture() && captures_from(&self.board, mv.to) {
            Some(mv.to)
        } else {
            None
        };

        self.state = match chain {
            Some(anchor) => TurnState::Chaining { side, anchor },
            None => TurnState::Idle(side.opponent()),
        };
        debug!("[GAME] {} played {}; now {:?}", side, mv, self.state);

        MoveOutcome {
            side,
            mv,
            captured: applied.captured,
            promoted: applied.promoted,
            chain,
        }
    }

    /// Whether `side` has at least one move under the current capture policy
    pub fn has_moves(&self, side: Side) -> bool {
        !moves_for_side(&self.board, side).is_empty()
    }

    /// Either side is out of pieces, or the side to move is blocked
    pub fn is_game_over(&self) -> bool {
        self.board.piece_count(Side::First) == 0
            || self.board.piece_count(Side::Second) == 0
            || self.legal_moves().is_empty()
    }

    /// Terminal classification of the current position
    pub fn outcome(&self) -> GameStatus {
        let turn = self.turn();
        if self.board.piece_count(Side::First) == 0 {
            GameStatus::Won(Side::Second)
        } else if self.board.piece_count(Side::Second) == 0 {
            GameStatus::Won(Side::First)
        } else if !self.legal_moves().is_empty() {
            GameStatus::InProgress
        } else if self.has_moves(turn.opponent()) {
            GameStatus::Won(turn.opponent())
        } else {
            GameStatus::Draw
        }
    }

    /// Winning side, `None` while in progress or drawn
    pub fn winner(&self) -> Option<Side> {
        match self.outcome() {
            GameStatus::Won(side) => Some(side),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new();
        assert_eq!(game.state(), TurnState::Idle(Side::First));
        assert_eq!(game.legal_moves().len(), 7);
        assert!(!game.is_game_over());
        assert_eq!(game.outcome(), GameStatus::InProgress);
    }

    #[test]
    fn test_simple_move_passes_turn() {
        let mut game = Game::new();
        let outcome = game.try_move(sq(5, 2), sq(4, 3)).unwrap();
        assert_eq!(outcome.chain, None);
        assert_eq!(game.state(), TurnState::Idle(Side::Second));
    }

    #[test]
    fn test_capture_enters_chain() {
        // Red jumps (3,2) landing on (2,3), then (1,2) is jumpable to (0,1)
        let board = Board::from_squares(&[sq(4, 1)], &[sq(3, 2), sq(1, 2), sq(0, 7)], &[]);
        let mut game = Game::from_position(board, Side::First);

        let first = game.try_move(sq(4, 1), sq(2, 3)).unwrap();
        assert_eq!(first.chain, Some(sq(2, 3)));
        assert_eq!(
            game.state(),
            TurnState::Chaining { side: Side::First, anchor: sq(2, 3) }
        );
        assert_eq!(
            game.legal_moves(),
            vec![Move::jump(sq(2, 3), sq(1, 2), sq(0, 1))]
        );

        let second = game.try_move(sq(2, 3), sq(0, 1)).unwrap();
        assert!(second.promoted);
        assert_eq!(second.chain, None);
        assert_eq!(game.state(), TurnState::Idle(Side::Second));
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut game = Game::new();
        let before = game.clone();
        assert!(game.try_move(sq(6, 1), sq(5, 0)).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_try_move_coords_off_board() {
        let mut game = Game::new();
        assert_eq!(
            game.try_move_coords(5, 2, 4, 2),
            Err(IllegalMoveReason::OffBoard { row: 4, col: 2 })
        );
        assert_eq!(
            game.try_move_coords(8, 1, 4, 3),
            Err(IllegalMoveReason::OffBoard { row: 8, col: 1 })
        );
    }

    #[test]
    fn test_blocked_side_to_move_loses() {
        // Red (7,0) walled in by black (6,1) with the landing (5,2) taken
        let board = Board::from_squares(&[sq(7, 0)], &[sq(6, 1), sq(5, 2)], &[]);
        let game = Game::from_position(board, Side::First);

        assert!(game.is_game_over());
        assert_eq!(game.winner(), Some(Side::Second));
    }

    #[test]
    fn test_both_sides_blocked_is_draw() {
        // Red man on row 0 without a crown cannot move; black man on row 7 likewise
        let board = Board::from_squares(&[sq(0, 1)], &[sq(7, 0)], &[]);
        let game = Game::from_position(board, Side::First);

        assert!(game.is_game_over());
        assert_eq!(game.outcome(), GameStatus::Draw);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_reset_drops_chain() {
        let board = Board::from_squares(&[sq(4, 1)], &[sq(3, 2), sq(1, 2)], &[]);
        let mut game = Game::from_position(board, Side::First);
        game.try_move(sq(4, 1), sq(2, 3)).unwrap();
        assert!(game.chain_anchor().is_some());

        game.reset_to(Board::new(), Side::Second);
        assert_eq!(game.state(), TurnState::Idle(Side::Second));
    }
}
