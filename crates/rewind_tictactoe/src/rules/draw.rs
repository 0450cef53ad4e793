//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// Only meaningful as a draw test once a winner has been ruled out.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a finished game with no winner.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
