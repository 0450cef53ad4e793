//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who won and which three squares did it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player holding all three squares.
    pub winner: Player,
    /// The winning triple.
    pub line: [Position; 3],
}

impl Win {
    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line, in [`LINES`] order, held entirely by one player.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player().map(|winner| Win { winner, line });
        }
    }

    None
}
