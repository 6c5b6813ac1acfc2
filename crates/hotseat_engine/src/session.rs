//! Game session state.

use crate::rules::WinPattern;
use crate::types::{Board, GameStatus, Player, Symbol};
use serde::{Deserialize, Serialize};

/// Names substituted when a player leaves their name blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDefaults {
    /// Name for the X player.
    pub x: String,
    /// Name for the O player.
    pub o: String,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            x: "Player X".to_string(),
            o: "Player O".to_string(),
        }
    }
}

impl PlayerDefaults {
    /// Default name for the given symbol.
    pub fn for_symbol(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }
}

/// One game between two named players.
///
/// Sessions are plain values: the engine functions take a session and
/// hand back the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) turn: Symbol,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<usize>,
    pub(crate) winning_line: Option<WinPattern>,
}

impl GameSession {
    pub(crate) fn fresh(players: [Player; 2]) -> Self {
        Self {
            board: Board::new(),
            players,
            turn: Symbol::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player holding `symbol`.
    pub fn player(&self, symbol: Symbol) -> &Player {
        match symbol {
            Symbol::X => &self.players[0],
            Symbol::O => &self.players[1],
        }
    }

    /// Symbol whose player moves next. Once the game is over this is the
    /// symbol that made the last move.
    pub fn turn(&self) -> Symbol {
        self.turn
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Indices played so far, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<WinPattern> {
        self.winning_line
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(symbol) => Some(self.player(symbol)),
            _ => None,
        }
    }
}
