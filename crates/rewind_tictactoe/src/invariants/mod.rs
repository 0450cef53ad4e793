//! First-class invariants for the board history.
//!
//! Invariants are logical properties of a [`Timeline`] of boards that every
//! sequence of legal plays and jumps preserves. The engine checks them after
//! each move in debug builds; tests check them against hand-built histories.

use crate::Board;
use crate::error::EngineError;
use crate::timeline::Timeline;

pub mod alternating_marks;
pub mod monotonic_history;
pub mod no_moves_after_win;

pub use alternating_marks::AlternatingMarks;
pub use monotonic_history::MonotonicHistory;
pub use no_moves_after_win::NoMovesAfterWin;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
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
        into_result(violations)
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
        into_result(violations)
    }
}

/// Every invariant the engine maintains over its history.
pub type EngineInvariants = (MonotonicHistory, AlternatingMarks, NoMovesAfterWin);

/// Shorthand for the state all history invariants inspect.
pub type BoardHistory = Timeline<Board>;

/// Checks [`EngineInvariants`] after a transition.
///
/// Every violation is folded into one [`EngineError::InvariantViolation`].
pub fn check_postconditions(history: &BoardHistory) -> Result<(), EngineError> {
    EngineInvariants::check_all(history).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        EngineError::invariant(format!("Postcondition failed: {descriptions}"))
    })
}
