//! Presentation-neutral snapshot of a session.
//!
//! Renderers never read a [`GameSession`] directly; they draw a
//! [`GameView`], which carries everything a display needs.

use crate::rules::WinPattern;
use crate::session::GameSession;
use crate::types::{GameStatus, Square, Symbol};
use serde::Serialize;

/// Message shown when the board fills without a winner.
pub const DRAW_MESSAGE: &str = "It's a Draw! Play again.";

/// Builds the status line for a session.
pub fn status_message(session: &GameSession) -> String {
    match session.status() {
        GameStatus::InProgress => {
            format!("{}, you're up!", session.player(session.turn()).name())
        }
        GameStatus::Won(symbol) => {
            format!("{} congratulations, you won!", session.player(symbol).name())
        }
        GameStatus::Draw => DRAW_MESSAGE.to_string(),
    }
}

/// What a renderer needs to draw one frame of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Cells in row-major order.
    pub cells: [Square; 9],
    /// Status line.
    pub message: String,
    /// Whether the restart control should be offered.
    pub show_restart: bool,
    /// Line to highlight after a win.
    pub winning_line: Option<WinPattern>,
    /// Symbol to move (or that moved last, once the game is over).
    pub turn: Symbol,
    /// Game status.
    pub status: GameStatus,
    /// Name of the X player.
    pub player_x: String,
    /// Name of the O player.
    pub player_o: String,
}

impl GameView {
    /// Snapshots `session`.
    pub fn of(session: &GameSession) -> Self {
        Self {
            cells: *session.board().squares(),
            message: status_message(session),
            show_restart: session.status().is_terminal(),
            winning_line: session.winning_line(),
            turn: session.turn(),
            status: session.status(),
            player_x: session.player(Symbol::X).name().to_string(),
            player_o: session.player(Symbol::O).name().to_string(),
        }
    }

    /// True if the cell at `index` belongs to the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_move, start_game};

    #[test]
    fn test_in_progress_names_player_to_move() {
        let session = start_game("Ada", "Bob");
        let view = GameView::of(&session);
        assert_eq!(view.message, "Ada, you're up!");
        assert!(!view.show_restart);

        let view = GameView::of(&apply_move(session, 0));
        assert_eq!(view.message, "Bob, you're up!");
    }

    #[test]
    fn test_win_message_and_highlight() {
        let session = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(start_game("Ada", "Bob"), apply_move);
        let view = GameView::of(&session);
        assert_eq!(view.message, "Ada congratulations, you won!");
        assert!(view.show_restart);
        assert!(view.is_highlighted(1));
        assert!(!view.is_highlighted(3));
    }

    #[test]
    fn test_draw_message() {
        let session = [0, 1, 2, 4, 3, 5, 7, 6, 8]
            .into_iter()
            .fold(start_game("Ada", "Bob"), apply_move);
        let view = GameView::of(&session);
        assert_eq!(view.message, DRAW_MESSAGE);
        assert!(view.show_restart);
        assert_eq!(view.winning_line, None);
    }
}
