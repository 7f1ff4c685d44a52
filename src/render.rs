//! Text rendering of the board and the packed words
//!
//! Row 0 is printed first and labelled rank 8. Men are `r`/`b`, kings
//! `R`/`B`, light squares are shaded.

use std::fmt::Write;

use draughts_engine::square::BOARD_SIZE;
use draughts_engine::{Board, Square};

/// Frame glyphs for one rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyle {
    top: [&'static str; 3],
    middle: [&'static str; 3],
    bottom: [&'static str; 3],
    horizontal: &'static str,
    vertical: &'static str,
    light: &'static str,
}

impl BoardStyle {
    pub const UNICODE: BoardStyle = BoardStyle {
        top: ["┏", "┳", "┓"],
        middle: ["┣", "╋", "┫"],
        bottom: ["┗", "┻", "┛"],
        horizontal: "━━━",
        vertical: "┃",
        light: "▓▓▓",
    };

    pub const ASCII: BoardStyle = BoardStyle {
        top: ["+", "+", "+"],
        middle: ["+", "+", "+"],
        bottom: ["+", "+", "+"],
        horizontal: "---",
        vertical: "|",
        light: "###",
    };

    fn rule(&self, glyphs: [&str; 3]) -> String {
        let mut line = String::from("  ");
        line.push_str(glyphs[0]);
        for col in 0..BOARD_SIZE {
            line.push_str(self.horizontal);
            line.push_str(if col + 1 < BOARD_SIZE { glyphs[1] } else { glyphs[2] });
        }
        line
    }
}

impl Default for BoardStyle {
    fn default() -> Self {
        BoardStyle::UNICODE
    }
}

const FILES: &str = "    a   b   c   d   e   f   g   h";

/// Board as printable text, one line per row plus frame and labels
pub fn render_board(board: &Board, style: &BoardStyle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", FILES);
    let _ = writeln!(out, "{}", style.rule(style.top));

    for row in 0..BOARD_SIZE {
        let rank = BOARD_SIZE - row;
        let _ = write!(out, "{} {}", rank, style.vertical);
        for col in 0..BOARD_SIZE {
            match Square::new(row, col) {
                None => out.push_str(style.light),
                Some(square) => match board.piece(square) {
                    Some(piece) => {
                        let _ = write!(out, " {} ", piece.glyph());
                    }
                    None => out.push_str("   "),
                },
            }
            out.push_str(style.vertical);
        }
        let _ = writeln!(out, " {}", rank);

        if row + 1 < BOARD_SIZE {
            let _ = writeln!(out, "{}", style.rule(style.middle));
        }
    }

    let _ = writeln!(out, "{}", style.rule(style.bottom));
    let _ = writeln!(out, "{}", FILES);
    out
}

/// Occupancy word in binary, high bit first, grouped by byte
pub fn render_binary(word: u64) -> String {
    let mut out = String::from("Binary: ");
    for bit in (0..64).rev() {
        out.push(if (word >> bit) & 1 == 1 { '1' } else { '0' });
        if bit % 8 == 0 && bit != 0 {
            out.push(' ');
        }
    }
    out
}

/// Occupancy word in hex
pub fn render_hex(word: u64) -> String {
    format!("Hex: 0x{:016X}", word)
}
