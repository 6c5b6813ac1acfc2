//! Session invariants.
//!
//! Properties every session reachable through the engine must satisfy.
//! The engine checks them in debug builds after each accepted move; tests
//! check them directly.

mod alternating_turn;
mod consistent_status;
mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use consistent_status::ConsistentStatusInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every session invariant.
pub type SessionInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    ConsistentStatusInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Square, Symbol};
    use crate::{apply_move, start_game};

    #[test]
    fn test_holds_for_new_game() {
        assert!(SessionInvariants::check_all(&start_game("a", "b")).is_ok());
    }

    #[test]
    fn test_holds_after_moves() {
        let session = [0, 4, 8]
            .into_iter()
            .fold(start_game("a", "b"), apply_move);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_detects_corrupted_board() {
        let mut session = apply_move(start_game("a", "b"), 4);
        session.board = crate::Board::from_squares({
            let mut squares = [Square::Empty; 9];
            squares[4] = Square::Occupied(Symbol::X);
            squares[0] = Square::Occupied(Symbol::O);
            squares
        });
        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_pair_of_invariants() {
        type Pair = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(Pair::check_all(&start_game("a", "b")).is_ok());
    }
}
