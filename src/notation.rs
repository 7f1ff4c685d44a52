//! Algebraic square notation
//!
//! Files `a`-`h` are columns 0-7. Ranks `1`-`8` are rows 7-0, so rank 8 is
//! the top row of the display. Text only reaches the engine as [`Square`]s
//! built through `Square::new`.

use draughts_engine::Square;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid format! Use algebraic (c3 d4)")]
    Format,

    #[error("'{0}' is not a dark square")]
    NotPlayable(String),
}

/// Parse one square such as `c3`
pub fn parse_square(text: &str) -> Result<Square, NotationError> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::Format);
    };

    let file = file.to_ascii_lowercase();
    if !file.is_ascii_lowercase() || !rank.is_ascii_digit() {
        return Err(NotationError::Format);
    }

    let col = (file as u8 - b'a') as i8;
    let row = 8 - (rank as u8 - b'0') as i8;
    Square::new(row, col).ok_or_else(|| NotationError::NotPlayable(text.to_string()))
}

/// Parse `from to`, e.g. `c3 d4`
pub fn parse_move(text: &str) -> Result<(Square, Square), NotationError> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => Ok((parse_square(from)?, parse_square(to)?)),
        _ => Err(NotationError::Format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square_maps_ranks_top_down() {
        assert_eq!(parse_square("c3"), Ok(Square::new(5, 2).unwrap()));
        assert_eq!(parse_square("H8"), Ok(Square::new(0, 7).unwrap()));
        assert_eq!(parse_square("a1"), Ok(Square::new(7, 0).unwrap()));
    }

    #[test]
    fn test_parse_square_rejects_light_and_off_board() {
        assert_eq!(
            parse_square("a8"),
            Err(NotationError::NotPlayable("a8".to_string()))
        );
        assert!(matches!(parse_square("i1"), Err(NotationError::NotPlayable(_))));
        assert!(matches!(parse_square("c9"), Err(NotationError::NotPlayable(_))));
        assert_eq!(parse_square("c"), Err(NotationError::Format));
        assert_eq!(parse_square("c33"), Err(NotationError::Format));
        assert_eq!(parse_square("3c"), Err(NotationError::Format));
    }

    #[test]
    fn test_parse_move() {
        let (from, to) = parse_move("  c3   d4 ").unwrap();
        assert_eq!(from.to_string(), "c3");
        assert_eq!(to.to_string(), "d4");
        assert_eq!(parse_move("c3"), Err(NotationError::Format));
        assert_eq!(parse_move("c3 d4 e5"), Err(NotationError::Format));
    }
}
