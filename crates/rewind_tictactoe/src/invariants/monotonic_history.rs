//! Monotonic history invariant: each board adds exactly one mark.

use super::{BoardHistory, Invariant};
use crate::Position;

/// Invariant: boards only ever gain marks, one per move.
///
/// The first board is empty. Each later board keeps every mark of its
/// predecessor and fills exactly one more square.
pub struct MonotonicHistory;

impl Invariant<BoardHistory> for MonotonicHistory {
    fn holds(history: &BoardHistory) -> bool {
        if history.as_slice()[0].filled_count() != 0 {
            return false;
        }

        history.as_slice().windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            let kept = Position::ALL
                .iter()
                .all(|&pos| before.is_empty(pos) || before.get(pos) == after.get(pos));
            kept && after.filled_count() == before.filled_count() + 1
        })
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark and keeps the others"
    }
}
