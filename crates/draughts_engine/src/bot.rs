//! Random capture-first opponent
//!
//! The bot does no search. Each ply it gathers every candidate move for its
//! side, keeps only captures when it must capture, and picks one uniformly.
//! A capture that leaves the turn in [`TurnState::Chaining`] is followed up
//! from the anchor in the same call, so the bot always finishes its chain.
//!
//! The random source is a parameter. Pass a seeded `StdRng` for reproducible
//! games.

use rand::Rng;
use tracing::{info, warn};

use crate::game::{Game, TurnState};
use crate::move_gen::{forced_capture_exists, legal_moves_from, moves_for_side};
use crate::types::{Move, MoveOutcome};

/// Upper bound on jumps in one turn; a side never has more than 12 pieces
pub const MAX_CHAIN_LENGTH: usize = 12;

/// Candidate moves for the side to move
///
/// Outside a chain: every piece's moves under the side's forced-capture
/// policy, reduced to captures when capturing is mandatory and at least one
/// capture is present. Inside a chain: jumps from the anchor only.
pub fn candidates(game: &Game) -> Vec<Move> {
    let board = game.board();
    match game.state() {
        TurnState::Chaining { anchor, .. } => legal_moves_from(board, anchor, true)
            .into_iter()
            .filter(Move::is_capture)
            .collect(),
        TurnState::Idle(side) => {
            let must_capture = forced_capture_exists(board, side);
            let moves = moves_for_side(board, side);
            if must_capture && moves.iter().any(Move::is_capture) {
                moves.into_iter().filter(Move::is_capture).collect()
            } else {
                moves
            }
        }
    }
}

/// Pick one candidate uniformly at random
pub fn choose_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<Move> {
    let moves = candidates(game);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

/// Play the bot's whole turn, including any capture chain
///
/// Returns the plies made, in order. Empty when the side to move has no
/// move at all.
pub fn play_turn<R: Rng + ?Sized>(game: &mut Game, rng: &mut R) -> Vec<MoveOutcome> {
    let side = game.turn();
    let mut plies = Vec::new();

    while plies.len() < MAX_CHAIN_LENGTH {
        let Some(mv) = choose_move(game, rng) else {
            if plies.is_empty() {
                info!("[BOT] {} has no moves", side);
            }
            break;
        };

        let outcome = game.play(mv);
        info!("[BOT] {} plays {}", side, mv);
        plies.push(outcome);

        match game.state() {
            TurnState::Chaining { side: chaining, .. } if chaining == side => {
                info!("[BOT] {} continues capturing", side);
            }
            _ => return plies,
        }
    }

    if game.chain_anchor().is_some() {
        warn!("[BOT] chain for {} stopped after {} plies", side, plies.len());
    }
    plies
}
