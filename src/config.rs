//! Command-line configuration
//!
//! Parsed once in `main` with clap. Logging defaults to `warn` so engine
//! diagnostics stay out of the board display unless asked for; `RUST_LOG`
//! overrides `--log-level` when set.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use draughts_engine::Side;

/// Single player checkers against a random opponent
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed for the opponent's random choices (omit for a random game)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side the human plays; red moves first
    #[arg(long, value_enum, default_value_t = Colour::Red)]
    pub human: Colour,

    /// Let the opponent play both sides and print the game
    #[arg(long, default_value_t = false)]
    pub bot_vs_bot: bool,

    /// Stop a bot-vs-bot game after this many turns and call it a draw
    #[arg(long, default_value_t = 400)]
    pub max_turns: usize,

    /// Load a saved game before starting
    #[arg(long, value_name = "PATH")]
    pub load: Option<PathBuf>,

    /// Default log filter when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Draw the board with plain ASCII instead of box-drawing glyphs
    #[arg(long, default_value_t = false)]
    pub ascii: bool,
}

/// Side names as typed on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Black,
}

impl From<Colour> for Side {
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::Red => Side::First,
            Colour::Black => Side::Second,
        }
    }
}
