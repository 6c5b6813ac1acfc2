//! Hotseat - terminal tic-tac-toe for two players.

use std::io;

use anyhow::Result;
use clap::Parser;
use hotseat::{
    App, Cli, Command, GameArgs, HotseatConfig, JsonRenderer, TextRenderer, init_file_logging,
    init_stderr_logging, run_lines, run_terminal,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { game } => run_tui(game),
        Command::Plain { game, json } => run_plain(game, json),
    }
}

/// Run the full-screen terminal UI
fn run_tui(args: GameArgs) -> Result<()> {
    let config = HotseatConfig::load_or_default(&args.config)?;
    // Logs go to a file so they don't corrupt the display
    init_file_logging(config.log_file())?;
    info!(config = %args.config.display(), "Starting hotseat TUI");

    let mut app = App::new(&config, args.player_x, args.player_o);
    run_terminal(&mut app)
}

/// Run the line-based mode on stdin/stdout
#[instrument(skip(args))]
fn run_plain(args: GameArgs, json: bool) -> Result<()> {
    init_stderr_logging();
    let config = HotseatConfig::load_or_default(&args.config)?;
    info!(config = %args.config.display(), "Starting hotseat plain mode");

    let mut app = App::new(&config, args.player_x, args.player_o);
    let input = io::stdin().lock();
    if json {
        run_lines(&mut app, input, &mut JsonRenderer::new(io::stdout()))
    } else {
        run_lines(&mut app, input, &mut TextRenderer::new(io::stdout()))
    }
}
