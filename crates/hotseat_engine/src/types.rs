//! Core domain types for hotseat tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Mark placed on the board. X always moves first.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// First mover.
    X,
    /// Second mover.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Claimed by a symbol for the rest of the game.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol in this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 board, row-major (0-8).
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Claims an empty square. Returns `false` and leaves the board alone
    /// if the index is out of range or already taken.
    pub(crate) fn claim(&mut self, index: usize, symbol: Symbol) -> bool {
        match self.squares.get_mut(index) {
            Some(square @ Square::Empty) => {
                *square = Square::Occupied(symbol);
                true
            }
            _ => false,
        }
    }

    /// Formats the board as text; empty squares show their cell number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => result.push_str(&(index + 1).to_string()),
                    Square::Occupied(symbol) => result.push_str(&symbol.to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// The symbol's player completed a line.
    Won(Symbol),
    /// The board filled without a line.
    Draw,
}

impl GameStatus {
    /// True once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A named participant bound to one symbol for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbol this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}
