//! Command-line interface for hotseat.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Hotseat - tic-tac-toe for two players sharing one keyboard
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Tui {
        /// Shared game options
        #[command(flatten)]
        game: GameArgs,
    },

    /// Play line by line on stdin/stdout
    Plain {
        /// Shared game options
        #[command(flatten)]
        game: GameArgs,

        /// Emit one JSON object per frame instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every mode.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to the config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "hotseat.toml")]
    pub config: PathBuf,

    /// Prefill the X player's name on the setup form
    #[arg(long)]
    pub player_x: Option<String>,

    /// Prefill the O player's name on the setup form
    #[arg(long)]
    pub player_o: Option<String>,
}
