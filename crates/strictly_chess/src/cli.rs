//! Command-line interface for strictly_chess.

use clap::{Parser, Subcommand};

/// Strictly Chess - play on a terminal chess board
#[derive(Parser, Debug)]
#[command(name = "strictly_chess")]
#[command(about = "Terminal chess board with a partial rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal board
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the starting position and exit
    Show,
}
