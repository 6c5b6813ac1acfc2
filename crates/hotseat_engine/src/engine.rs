//! Game engine: starting, playing and restarting sessions.
//!
//! Every operation takes a [`GameSession`] by value and returns the next
//! one. Illegal moves are ignored rather than reported: the session comes
//! back untouched.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::{check_draw, winning_pattern};
use crate::session::{GameSession, PlayerDefaults};
use crate::types::{GameStatus, Player, Symbol};
use tracing::{debug, info, instrument};

/// Starts a game with the standard default names.
pub fn start_game(name1: &str, name2: &str) -> GameSession {
    start_game_with(name1, name2, &PlayerDefaults::default())
}

/// Starts a game, substituting `defaults` for blank names.
///
/// `name1` plays X and moves first; `name2` plays O.
#[instrument(skip(defaults))]
pub fn start_game_with(name1: &str, name2: &str, defaults: &PlayerDefaults) -> GameSession {
    let players = [
        Player::new(normalize_name(name1, Symbol::X, defaults), Symbol::X),
        Player::new(normalize_name(name2, Symbol::O, defaults), Symbol::O),
    ];
    info!(x = players[0].name(), o = players[1].name(), "Starting game");
    GameSession::fresh(players)
}

fn normalize_name(name: &str, symbol: Symbol, defaults: &PlayerDefaults) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        defaults.for_symbol(symbol).to_string()
    } else {
        trimmed.to_string()
    }
}

/// Places the current turn's symbol at `index` (0-8).
///
/// Returns the session unchanged if the game is over, the index is out of
/// range, or the square is taken.
#[instrument(skip(session), fields(turn = %session.turn, status = ?session.status))]
pub fn apply_move(mut session: GameSession, index: usize) -> GameSession {
    if session.status.is_terminal() {
        debug!("Ignoring move: game is over");
        return session;
    }

    let symbol = session.turn;
    if !session.board.claim(index, symbol) {
        debug!("Ignoring move: square unavailable");
        return session;
    }
    session.history.push(index);

    if let Some(pattern) = winning_pattern(&session.board, symbol) {
        info!(winner = %symbol, line = ?pattern.cells(), "Game won");
        session.status = GameStatus::Won(symbol);
        session.winning_line = Some(pattern);
    } else if check_draw(&session.board) {
        info!("Game drawn");
        session.status = GameStatus::Draw;
    } else {
        session.turn = symbol.opponent();
        debug!(next = %session.turn, "Turn passes");
    }

    debug_assert!(
        SessionInvariants::check_all(&session).is_ok(),
        "session invariants violated after move at {index}"
    );
    session
}

/// Starts over with the same players.
#[instrument(skip(session))]
pub fn restart(session: GameSession) -> GameSession {
    info!(
        x = session.players[0].name(),
        o = session.players[1].name(),
        "Restarting game"
    );
    GameSession::fresh(session.players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn play(indices: &[usize]) -> GameSession {
        indices
            .iter()
            .fold(start_game("Ada", "Bob"), |session, &i| apply_move(session, i))
    }

    #[test]
    fn test_blank_names_use_defaults() {
        let session = start_game("   ", "");
        assert_eq!(session.player(Symbol::X).name(), "Player X");
        assert_eq!(session.player(Symbol::O).name(), "Player O");
    }

    #[test]
    fn test_names_are_trimmed() {
        let session = start_game("  Ada ", "Bob\t");
        assert_eq!(session.player(Symbol::X).name(), "Ada");
        assert_eq!(session.player(Symbol::O).name(), "Bob");
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = PlayerDefaults {
            x: "Crosses".to_string(),
            o: "Noughts".to_string(),
        };
        let session = start_game_with("", "", &defaults);
        assert_eq!(session.player(Symbol::X).name(), "Crosses");
        assert_eq!(session.player(Symbol::O).name(), "Noughts");
    }

    #[test]
    fn test_move_places_symbol_and_flips_turn() {
        let session = play(&[4]);
        assert_eq!(session.board().get(4), Some(Square::Occupied(Symbol::X)));
        assert_eq!(session.turn(), Symbol::O);
        assert_eq!(session.history(), &[4]);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let before = play(&[0]);
        let after = apply_move(before.clone(), 9);
        assert_eq!(before, after);
    }

    #[test]
    fn test_winning_move_keeps_turn() {
        let session = play(&[0, 3, 1, 4, 2]);
        assert_eq!(session.status(), GameStatus::Won(Symbol::X));
        assert_eq!(session.turn(), Symbol::X);
        assert_eq!(session.winning_line().map(|p| p.cells()), Some([0, 1, 2]));
    }

    #[test]
    fn test_restart_keeps_players() {
        let finished = play(&[0, 3, 1, 4, 2]);
        let players = finished.players().clone();
        let session = restart(finished);
        assert_eq!(session.players(), &players);
        assert_eq!(session.board(), &crate::Board::new());
        assert_eq!(session.turn(), Symbol::X);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.history().is_empty());
        assert_eq!(session.winning_line(), None);
    }
}
