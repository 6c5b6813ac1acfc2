//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! session bookkeeping so they can be tested and reused on their own.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{WIN_PATTERNS, WinPattern, check_win, check_winner, winning_pattern};
