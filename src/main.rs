use anyhow::Context;
use clap::Parser;
use draughts_engine::{persist, Game, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

use checkers::render::BoardStyle;
use checkers::{Cli, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .init();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let game = match &cli.load {
        Some(path) => persist::load(path)
            .with_context(|| format!("Failed to load game from {}", path.display()))?,
        None => Game::new(),
    };

    let style = if cli.ascii {
        BoardStyle::ASCII
    } else {
        BoardStyle::UNICODE
    };
    let human: Option<Side> = if cli.bot_vs_bot {
        None
    } else {
        Some(cli.human.into())
    };

    tracing::info!(
        "checkers v{} starting (seed {:?}, human {:?})",
        env!("CARGO_PKG_VERSION"),
        cli.seed,
        human
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), rng)
        .with_game(game)
        .with_human(human)
        .with_style(style)
        .with_max_turns(cli.max_turns);

    let status = session.run()?;
    tracing::info!("session ended: {:?}", status);
    Ok(())
}
