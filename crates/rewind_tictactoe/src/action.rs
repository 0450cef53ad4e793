//! Moves and the outcome of trying to play one.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a play request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Ignored {
    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The square is already taken.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The index does not name a square.
    #[display("Square index {_0} is off the board")]
    OffBoard(usize),
}

/// Result of a play request.
///
/// Rejected requests are silent no-ops; callers may drop this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The move was recorded.
    Placed(Move),
    /// Nothing changed.
    Ignored(Ignored),
}

impl PlayOutcome {
    /// Returns true if the move was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}
