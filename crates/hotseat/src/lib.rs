//! Hotseat - two players, one keyboard, one game of tic-tac-toe.
//!
//! The rules live in [`hotseat_engine`]; this crate turns keyboard and line
//! input into [`Action`]s, applies them to an [`App`] and draws the result
//! with a [`Renderer`].
//!
//! # Architecture
//!
//! - **Setup**: a two-field form that collects player names
//! - **App**: the screen state machine that owns the live game
//! - **Input**: key and line translation into actions
//! - **Render**: terminal (ratatui), plain text and JSON-lines output
//!
//! # Example
//!
//! ```
//! use hotseat::{App, HotseatConfig, TextRenderer, run_lines};
//! use std::io::Cursor;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut app = App::new(&HotseatConfig::default(), None, None);
//! let mut renderer = TextRenderer::new(Vec::new());
//! run_lines(&mut app, Cursor::new("Ada\nBob\n5\n"), &mut renderer)?;
//! assert_eq!(app.session().map(|s| s.history().len()), Some(1));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod app;
mod cli;
mod config;
mod input;
mod logging;
mod render;
mod runner;
mod setup;

// Crate-level exports - Actions and input
pub use action::{Action, Direction};
pub use input::{action_for_key, actions_for_line, move_cursor};

// Crate-level exports - Application state
pub use app::{App, AppView, PlayState, Screen};
pub use setup::{Field, NAMES_REQUIRED_PROMPT, SETUP_PROMPT, SetupForm};

// Crate-level exports - Configuration
pub use cli::{Cli, Command, GameArgs};
pub use config::{ConfigError, HotseatConfig};
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Rendering
pub use render::{JsonRenderer, Renderer, TerminalRenderer, TextRenderer, draw};
pub use runner::{run_lines, run_terminal};
