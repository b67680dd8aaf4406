//! Play Othello against the computer in the terminal.

use anyhow::Result;
use clap::Parser;
use othello_player::config::Cli;
use othello_player::{terminal, GameSession};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    info!(opponent = ?cli.opponent, seed = ?cli.seed, "starting game");

    let mut session = GameSession::with_strategy(cli.strategy());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    terminal::run(&mut session, stdin.lock(), &mut stdout, cli.hints())?;

    info!(scores = %session.scores(), "leaving game");
    Ok(())
}
