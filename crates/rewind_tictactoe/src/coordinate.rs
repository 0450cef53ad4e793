//! Locating the square a move was played on.

use crate::error::EngineError;
use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 1-based row and column of a square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coordinate {
    /// Row, 1 at the top.
    pub row: usize,
    /// Column, 1 at the left.
    pub col: usize,
}

impl From<Position> for Coordinate {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row() + 1,
            col: pos.col() + 1,
        }
    }
}

/// Finds the single square that differs between two consecutive boards.
#[instrument(level = "trace")]
pub fn changed_position(before: &Board, after: &Board) -> Result<Position, EngineError> {
    let mut changed = Position::ALL
        .iter()
        .copied()
        .filter(|pos| before.get(*pos) != after.get(*pos));

    match (changed.next(), changed.next()) {
        (Some(pos), None) => Ok(pos),
        (None, _) => Err(EngineError::invariant(
            "consecutive boards are identical",
        )),
        (Some(_), Some(_)) => Err(EngineError::invariant(
            "consecutive boards differ in more than one square",
        )),
    }
}

/// Returns the coordinate of the square played between two consecutive boards.
pub fn move_coordinate(before: &Board, after: &Board) -> Result<Coordinate, EngineError> {
    changed_position(before, after).map(Coordinate::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_center_is_two_two() {
        let before = Board::new();
        let after = before.with(Position::Center, Square::Occupied(Player::O));
        let coord = move_coordinate(&before, &after).unwrap();
        assert_eq!(coord, Coordinate { row: 2, col: 2 });
        assert_eq!(coord.to_string(), "(2, 2)");
    }

    #[test]
    fn test_bottom_right() {
        let before = Board::new().with(Position::TopLeft, Square::Occupied(Player::X));
        let after = before.with(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(
            move_coordinate(&before, &after).unwrap(),
            Coordinate { row: 3, col: 3 }
        );
    }

    #[test]
    fn test_identical_boards_are_a_violation() {
        let board = Board::new();
        assert!(matches!(
            move_coordinate(&board, &board),
            Err(EngineError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_two_changes_are_a_violation() {
        let before = Board::new();
        let after = before
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopRight, Square::Occupied(Player::O));
        assert!(move_coordinate(&before, &after).is_err());
    }
}
