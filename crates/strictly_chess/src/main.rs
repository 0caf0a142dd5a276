//! Strictly Chess - terminal chess board.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_chess::{run_tui, UiConfig};
use strictly_chess_rules::GameState;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play { config: None }) {
        Command::Play { config } => run_play(config.as_deref()),
        Command::Show => run_show(),
    }
}

/// Run the terminal board
fn run_play(config_path: Option<&Path>) -> Result<()> {
    let config = UiConfig::load(config_path)?;

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_file = %config.log_file().display(), "Logging initialised");
    run_tui(&config)
}

/// Print the starting position
fn run_show() -> Result<()> {
    let game = GameState::new();
    println!("{}", game.board().display());
    println!("{} to move", game.turn());
    Ok(())
}
