//! Hotseat engine - tic-tac-toe rules for two players on one device.
//!
//! The engine is a set of pure functions over an explicit [`GameSession`]
//! value. Nothing here knows how the game is displayed; presentation layers
//! draw a [`GameView`] and feed player actions back through [`apply_move`]
//! and [`restart`].
//!
//! # Example
//!
//! ```
//! use hotseat_engine::{GameStatus, Symbol, apply_move, start_game};
//!
//! let session = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(start_game("Ada", ""), apply_move);
//! assert_eq!(session.status(), GameStatus::Won(Symbol::X));
//! assert_eq!(session.player(Symbol::O).name(), "Player O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod position;
mod session;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use engine::{apply_move, restart, start_game, start_game_with};
pub use position::Position;
pub use rules::{WIN_PATTERNS, WinPattern, check_draw, check_win, check_winner, winning_pattern};
pub use session::{GameSession, PlayerDefaults};
pub use types::{Board, GameStatus, Player, Square, Symbol};
pub use view::{DRAW_MESSAGE, GameView, status_message};
