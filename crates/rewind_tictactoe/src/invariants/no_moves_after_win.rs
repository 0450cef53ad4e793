//! No moves are recorded past a won board.

use super::{BoardHistory, Invariant};
use crate::rules::check_winner;

/// Invariant: only the last board of a history may hold a winning line.
pub struct NoMovesAfterWin;

impl Invariant<BoardHistory> for NoMovesAfterWin {
    fn holds(history: &BoardHistory) -> bool {
        let boards = history.as_slice();
        boards[..boards.len() - 1]
            .iter()
            .all(|board| check_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won board"
    }
}
