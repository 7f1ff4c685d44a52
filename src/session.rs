//! Text front end: prompt, parse, play, print
//!
//! A [`Session`] owns the game and the opponent's random source and talks
//! over any `BufRead`/`Write` pair, so the binary hands it stdin/stdout and
//! the tests hand it in-memory buffers.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use draughts_engine::bot::play_turn;
use draughts_engine::persist::{load_into, save};
use draughts_engine::{Game, GameStatus, MoveOutcome, Side, Square};
use rand::Rng;
use tracing::{debug, info};

use crate::notation::{parse_move, parse_square, NotationError};
use crate::render::{render_binary, render_board, render_hex, BoardStyle};

const BANNER: &str =
    "-------------------------------- Single Player Checkers --------------------------------";
const RULE: &str =
    "-------------------------------- ---------------------- --------------------------------";

const HELP: &str = "Input options: 'xy xy' (c3 d4), 'binary', 'hex', 'moves', \
'save {name}', 'load {name}', 'help', 'quit'";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move { from: Square, to: Square },
    /// Destination only, continuing a pending chain
    Continue(Square),
    Binary,
    Hex,
    Moves,
    Save(PathBuf),
    Load(PathBuf),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, NotationError> {
        let line = line.trim();
        match line {
            "binary" => return Ok(Command::Binary),
            "hex" => return Ok(Command::Hex),
            "moves" => return Ok(Command::Moves),
            "help" => return Ok(Command::Help),
            "quit" => return Ok(Command::Quit),
            _ => {}
        }

        if let Some(path) = line.strip_prefix("save ") {
            return file_argument(path).map(Command::Save);
        }
        if let Some(path) = line.strip_prefix("load ") {
            return file_argument(path).map(Command::Load);
        }

        if line.split_whitespace().count() == 1 {
            return parse_square(line).map(Command::Continue);
        }
        parse_move(line).map(|(from, to)| Command::Move { from, to })
    }
}

fn file_argument(text: &str) -> Result<PathBuf, NotationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NotationError::Format);
    }
    Ok(PathBuf::from(text))
}

/// Interactive game between a human and the random bot, or two bots
pub struct Session<R, W, G> {
    input: R,
    output: W,
    rng: G,
    game: Game,
    /// `None` when the bot plays both sides
    human: Option<Side>,
    style: BoardStyle,
    max_turns: usize,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(input: R, output: W, rng: G) -> Self {
        Session {
            input,
            output,
            rng,
            game: Game::new(),
            human: Some(Side::First),
            style: BoardStyle::default(),
            max_turns: 400,
        }
    }

    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    pub fn with_human(mut self, human: Option<Side>) -> Self {
        self.human = human;
        self
    }

    pub fn with_style(mut self, style: BoardStyle) -> Self {
        self.style = style;
        self
    }

    /// Turn limit for bot-vs-bot play
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until the game ends, the human quits, or input runs out
    pub fn run(&mut self) -> Result<GameStatus> {
        let Some(human) = self.human else {
            return self.run_bot_vs_bot();
        };

        writeln!(self.output, "{}", BANNER)?;
        writeln!(self.output, "{}", HELP)?;
        writeln!(self.output, "{}", RULE)?;

        while !self.game.is_game_over() {
            if self.game.turn() != human {
                self.bot_turn()?;
                continue;
            }

            self.show_board()?;
            let anchor = self.game.chain_anchor();
            if anchor.is_none() && self.game.forced_capture_exists(human) {
                writeln!(self.output, "You must capture")?;
            }
            match anchor {
                Some(anchor) => write!(self.output, "\nChain jump on {} ", anchor)?,
                None => write!(self.output, "\nYour move ({}): ", human.glyph())?,
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("[SESSION] input closed");
                return Ok(self.game.outcome());
            }
            if line.trim().is_empty() {
                continue;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };
            debug!("[SESSION] {:?}", command);

            if command == Command::Quit {
                info!("[SESSION] quit");
                return Ok(self.game.outcome());
            }
            self.execute(command)?;
        }

        self.report()
    }

    /// Let the bot play both sides, up to the turn limit
    pub fn run_bot_vs_bot(&mut self) -> Result<GameStatus> {
        self.human = None;

        for _ in 0..self.max_turns {
            if self.game.is_game_over() {
                return self.report();
            }
            self.bot_turn()?;
        }

        if self.game.is_game_over() {
            return self.report();
        }
        self.show_board()?;
        writeln!(
            self.output,
            "\nGame Over: turn limit of {} reached. Draw",
            self.max_turns
        )?;
        Ok(GameStatus::Draw)
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Move { from, to } => {
                // A chain always continues from its anchor, whatever was typed
                let from = self.game.chain_anchor().unwrap_or(from);
                self.human_move(from, to)?;
            }
            Command::Continue(to) => match self.game.chain_anchor() {
                Some(anchor) => self.human_move(anchor, to)?,
                None => writeln!(self.output, "{}", NotationError::Format)?,
            },
            Command::Binary => {
                let (pieces, _) = self.game.board().raw();
                writeln!(self.output, "{}", render_binary(pieces))?;
            }
            Command::Hex => {
                let (pieces, _) = self.game.board().raw();
                writeln!(self.output, "{}", render_hex(pieces))?;
            }
            Command::Moves => {
                let moves: Vec<String> =
                    self.game.legal_moves().iter().map(ToString::to_string).collect();
                writeln!(self.output, "Legal moves: {}", moves.join(", "))?;
            }
            Command::Save(path) => match save(&self.game, &path) {
                Ok(()) => writeln!(self.output, "Game saved to '{}'", path.display())?,
                Err(err) => writeln!(self.output, "Error: {}", err)?,
            },
            Command::Load(path) => match load_into(&mut self.game, &path) {
                Ok(()) => writeln!(self.output, "Game loaded from '{}'", path.display())?,
                Err(err) => writeln!(self.output, "Error: {}", err)?,
            },
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn human_move(&mut self, from: Square, to: Square) -> Result<()> {
        match self.game.try_move(from, to) {
            Ok(outcome) => {
                self.report_ply(&outcome)?;
                if outcome.chain.is_some() {
                    writeln!(self.output, "Chain jump! Continue capturing.")?;
                }
            }
            Err(err) => {
                writeln!(self.output, "Invalid move: {}", err)?;
                let turn = self.game.turn();
                if self.game.chain_anchor().is_none() && self.game.forced_capture_exists(turn) {
                    writeln!(self.output, "You must capture")?;
                }
            }
        }
        Ok(())
    }

    fn bot_turn(&mut self) -> Result<()> {
        let side = self.game.turn();
        let name = self.name(side);
        let plies = play_turn(&mut self.game, &mut self.rng);

        if plies.is_empty() {
            writeln!(self.output, "{} has no moves", name)?;
        }
        for (i, ply) in plies.iter().enumerate() {
            if i > 0 {
                writeln!(self.output, "{} continues capturing...", name)?;
            }
            writeln!(self.output, "{}: {} {}", name, ply.mv.from, ply.mv.to)?;
            self.report_ply(ply)?;
        }
        Ok(())
    }

    fn report_ply(&mut self, outcome: &MoveOutcome) -> Result<()> {
        if let Some(square) = outcome.captured {
            writeln!(self.output, "Captured {}", square)?;
        }
        if outcome.promoted {
            writeln!(self.output, "Kinged!")?;
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(self.game.board(), &self.style))?;
        Ok(())
    }

    fn report(&mut self) -> Result<GameStatus> {
        self.show_board()?;
        write!(self.output, "\nGame Over ")?;

        let status = self.game.outcome();
        match status {
            GameStatus::Won(winner) => {
                let loser = winner.opponent();
                if self.game.board().piece_count(loser) > 0 {
                    let verb = if self.human == Some(loser) { "have" } else { "has" };
                    write!(self.output, "{} {} no moves. ", self.name(loser), verb)?;
                }
                if self.human == Some(winner) {
                    writeln!(self.output, "You win!")?;
                } else {
                    writeln!(self.output, "{} wins!", self.name(winner))?;
                }
            }
            GameStatus::Draw | GameStatus::InProgress => writeln!(self.output, "Draw")?,
        }
        info!("[SESSION] finished: {:?}", status);
        Ok(status)
    }

    fn name(&self, side: Side) -> String {
        match self.human {
            Some(human) if human == side => "You".to_string(),
            Some(_) => "Bot".to_string(),
            None => match side {
                Side::First => "Red".to_string(),
                Side::Second => "Black".to_string(),
            },
        }
    }
}
