//! Engine error types.

use crate::timeline::TimelineError;

/// Errors reported by [`GameEngine`](crate::GameEngine) queries and jumps.
///
/// Rejected moves are not errors; see [`PlayOutcome`](crate::PlayOutcome).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A jump or lookup named a move that is not in the history.
    #[display("Move #{requested} is out of range (history holds {len} boards)")]
    MoveOutOfRange {
        /// The requested move index.
        requested: usize,
        /// Number of boards in the history.
        len: usize,
    },

    /// Stored history broke one of its structural guarantees.
    #[display("Invariant violation: {reason}")]
    InvariantViolation {
        /// What went wrong.
        reason: String,
    },
}

impl EngineError {
    /// Creates an invariant violation error.
    pub fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<TimelineError> for EngineError {
    fn from(err: TimelineError) -> Self {
        match err {
            TimelineError::OutOfRange { requested, len } => {
                EngineError::MoveOutOfRange { requested, len }
            }
        }
    }
}
