//! Monotonic board invariant: squares are only ever filled, never cleared.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: the occupied squares are exactly the squares in the move
/// history, each played once.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        let mut seen = [false; 9];
        for &index in history {
            if index >= seen.len() || seen[index] || session.board().is_empty(index) {
                return false;
            }
            seen[index] = true;
        }
        session.board().occupied() == history.len()
    }

    fn description() -> &'static str {
        "Board only changes by filling the squares recorded in history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_move, start_game};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&start_game("a", "b")));
    }

    #[test]
    fn test_rejected_move_keeps_history_in_step() {
        let session = apply_move(start_game("a", "b"), 2);
        let session = apply_move(session, 2);
        assert_eq!(session.history(), &[2]);
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut session = apply_move(start_game("a", "b"), 2);
        session.history.push(2);
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
