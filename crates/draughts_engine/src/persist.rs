//! Save and load
//!
//! A saved game is three whitespace-separated decimal fields, one per line:
//!
//! ```text
//! <occupancy u64>
//! <crowned u64>
//! <side to move: 0 or 1>
//! ```
//!
//! The two words are the packed board exactly as [`Board::raw`] returns it.
//! A pending capture chain is not saved; a loaded game always starts idle.
//!
//! Loading validates everything before touching the game. Any failure leaves
//! the in-memory state as it was.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::board::Board;
use crate::error::PersistenceError;
use crate::game::Game;
use crate::types::Side;

const FIELD_PIECES: &str = "occupancy";
const FIELD_KINGS: &str = "crowned";
const FIELD_TURN: &str = "side to move";

/// Text form of `game`
pub fn encode(game: &Game) -> String {
    let (pieces, kings) = game.board().raw();
    format!("{}\n{}\n{}\n", pieces, kings, game.turn().to_digit())
}

fn parse_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<u64, PersistenceError> {
    let value = fields
        .next()
        .ok_or(PersistenceError::MissingField { field })?;
    value
        .parse::<u64>()
        .map_err(|_| PersistenceError::MalformedField {
            field,
            value: value.to_string(),
        })
}

/// Parse the text form into a board and side to move
pub fn decode(text: &str) -> Result<(Board, Side), PersistenceError> {
    let mut fields = text.split_ascii_whitespace();

    let pieces = parse_field(&mut fields, FIELD_PIECES)?;
    let kings = parse_field(&mut fields, FIELD_KINGS)?;
    let turn = parse_field(&mut fields, FIELD_TURN)?;

    let side = Side::from_digit(turn).ok_or(PersistenceError::InvalidTurn { value: turn })?;
    let board = Board::from_raw(pieces, kings)?;
    Ok((board, side))
}

/// Write `game` to `path`
pub fn save(game: &Game, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    fs::write(path, encode(game)).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("[PERSIST] Game saved to {:?}", path);
    Ok(())
}

/// Replace `game`'s position with the one stored at `path`
pub fn load_into(game: &mut Game, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match decode(&text) {
        Ok((board, side)) => {
            game.reset_to(board, side);
            info!("[PERSIST] Game loaded from {:?}", path);
            Ok(())
        }
        Err(e) => {
            warn!("[PERSIST] Rejected {:?}: {}", path, e);
            Err(e)
        }
    }
}

/// Load a fresh game from `path`
pub fn load(path: impl AsRef<Path>) -> Result<Game, PersistenceError> {
    let mut game = Game::new();
    load_into(&mut game, path)?;
    Ok(game)
}
