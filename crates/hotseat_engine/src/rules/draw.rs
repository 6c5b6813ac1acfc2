//! Draw detection.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if every square is occupied.
///
/// Win is evaluated before this during a move, so a full board
/// reported here with a line on it is still a win.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
