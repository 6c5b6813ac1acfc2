//! Win detection.

use crate::types::{Board, Square, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices that form a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinPattern([usize; 3]);

impl WinPattern {
    /// Indices of the line, in ascending order.
    pub fn cells(self) -> [usize; 3] {
        self.0
    }

    /// True if `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }

    fn is_filled_by(self, board: &Board, symbol: Symbol) -> bool {
        self.0
            .iter()
            .all(|&i| board.get(i) == Some(Square::Occupied(symbol)))
    }
}

/// The eight lines, checked in this order.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    // Rows
    WinPattern([0, 1, 2]),
    WinPattern([3, 4, 5]),
    WinPattern([6, 7, 8]),
    // Columns
    WinPattern([0, 3, 6]),
    WinPattern([1, 4, 7]),
    WinPattern([2, 5, 8]),
    // Diagonals
    WinPattern([0, 4, 8]),
    WinPattern([2, 4, 6]),
];

/// First line fully held by `symbol`, if any.
#[instrument(skip(board))]
pub fn winning_pattern(board: &Board, symbol: Symbol) -> Option<WinPattern> {
    WIN_PATTERNS
        .iter()
        .copied()
        .find(|pattern| pattern.is_filled_by(board, symbol))
}

/// True if `symbol` holds any full line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, symbol: Symbol) -> bool {
    winning_pattern(board, symbol).is_some()
}

/// Returns the symbol holding a full line, checking X first.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    [Symbol::X, Symbol::O]
        .into_iter()
        .find(|&symbol| check_win(board, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, Symbol)]) -> Board {
        let mut squares = [Square::Empty; 9];
        for &(i, symbol) in cells {
            squares[i] = Square::Occupied(symbol);
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Symbol::X));
        assert!(!check_win(&board, Symbol::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Symbol::X), (1, Symbol::X), (2, Symbol::X)]);
        assert!(check_win(&board, Symbol::X));
        assert!(!check_win(&board, Symbol::O));
        assert_eq!(winning_pattern(&board, Symbol::X), Some(WIN_PATTERNS[0]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Symbol::O), (4, Symbol::O), (6, Symbol::O)]);
        assert_eq!(winning_pattern(&board, Symbol::O).map(WinPattern::cells), Some([2, 4, 6]));
        assert_eq!(check_winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[(0, Symbol::X), (1, Symbol::O), (2, Symbol::X)]);
        assert!(!check_win(&board, Symbol::X));
        assert!(!check_win(&board, Symbol::O));
    }

    #[test]
    fn test_first_pattern_in_order_is_reported() {
        // X holds both the top row and the left column.
        let board = board_with(&[
            (0, Symbol::X),
            (1, Symbol::X),
            (2, Symbol::X),
            (3, Symbol::X),
            (6, Symbol::X),
        ]);
        assert_eq!(winning_pattern(&board, Symbol::X).map(WinPattern::cells), Some([0, 1, 2]));
    }
}
