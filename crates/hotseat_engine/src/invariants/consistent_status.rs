//! Status invariant: the recorded outcome matches the board.

use super::Invariant;
use crate::rules::{check_draw, check_winner, winning_pattern};
use crate::session::GameSession;
use crate::types::GameStatus;

/// Invariant: `Won` only with a completed line through the last move,
/// `Draw` only on a full board without a line, `InProgress` otherwise.
pub struct ConsistentStatusInvariant;

impl Invariant<GameSession> for ConsistentStatusInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        match session.status() {
            GameStatus::InProgress => {
                check_winner(board).is_none()
                    && !check_draw(board)
                    && session.winning_line().is_none()
            }
            GameStatus::Draw => {
                check_draw(board) && check_winner(board).is_none() && session.winning_line().is_none()
            }
            GameStatus::Won(symbol) => {
                let line = winning_pattern(board, symbol);
                let last = session.history().last().copied();
                line.is_some()
                    && session.winning_line() == line
                    && last.is_some_and(|index| line.is_some_and(|l| l.contains(index)))
            }
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_move, start_game};

    #[test]
    fn test_won_game_holds() {
        let session = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(start_game("a", "b"), apply_move);
        assert!(ConsistentStatusInvariant::holds(&session));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut session = apply_move(start_game("a", "b"), 0);
        session.status = GameStatus::Draw;
        assert!(!ConsistentStatusInvariant::holds(&session));
    }
}
