//! Status line selection.

use super::{check_winner, is_full};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line says about a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Board is full with no line.
    #[display("Draw")]
    Draw,
    /// Game continues with this player to move.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Returns true once no further moves are accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Derives the status of a board.
///
/// Winner is checked before fullness: a last move that both fills the
/// board and completes a line is a win. The player to move follows from
/// the number of marks on the board.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> Status {
    if let Some(win) = check_winner(board) {
        Status::Winner(win.winner)
    } else if is_full(board) {
        Status::Draw
    } else {
        Status::NextPlayer(Player::for_move(board.filled_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_board_x_to_move() {
        let s = status(&Board::new());
        assert_eq!(s, Status::NextPlayer(Player::X));
        assert_eq!(s.to_string(), "Next player: X");
        assert!(!s.is_over());
    }

    #[test]
    fn test_o_to_move_after_one_mark() {
        let board = Board::new().with(Position::Center, Square::Occupied(Player::X));
        assert_eq!(status(&board).to_string(), "Next player: O");
    }

    #[test]
    fn test_winner_beats_full_board() {
        // X O X / O X O / O X X: full, X holds the main diagonal.
        #[rustfmt::skip]
        let squares = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::O,
            Player::O, Player::X, Player::X,
        ]
        .map(Square::Occupied);
        let s = status(&Board::from_squares(squares));
        assert_eq!(s, Status::Winner(Player::X));
        assert_eq!(s.to_string(), "Winner: X");
    }

    #[test]
    fn test_draw_text() {
        #[rustfmt::skip]
        let squares = [
            Player::X, Player::O, Player::X,
            Player::X, Player::O, Player::O,
            Player::O, Player::X, Player::X,
        ]
        .map(Square::Occupied);
        let s = status(&Board::from_squares(squares));
        assert_eq!(s, Status::Draw);
        assert_eq!(s.to_string(), "Draw");
        assert!(s.is_over());
    }
}
