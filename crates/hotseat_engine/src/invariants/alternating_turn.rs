//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::session::GameSession;
use crate::types::{Square, Symbol};

/// Invariant: moves alternate starting with X, and the turn marker agrees
/// with the history.
///
/// While the game runs, the turn belongs to whoever did not make the last
/// move. Once it ends, the turn stays on the player who finished it.
pub struct AlternatingTurnInvariant;

fn mover(ply: usize) -> Symbol {
    if ply % 2 == 0 { Symbol::X } else { Symbol::O }
}

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        let alternates = history
            .iter()
            .enumerate()
            .all(|(ply, &index)| session.board().get(index) == Some(Square::Occupied(mover(ply))));
        if !alternates {
            return false;
        }

        let expected = match (session.status().is_terminal(), history.len()) {
            (true, len) if len > 0 => mover(len - 1),
            (true, _) => return false,
            (false, len) => mover(len),
        };
        session.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
