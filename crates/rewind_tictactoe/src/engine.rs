//! The game engine: board history, the current move, and transitions.

use crate::action::{Ignored, Move, PlayOutcome};
use crate::coordinate::{Coordinate, move_coordinate};
use crate::error::EngineError;
use crate::rules::{self, Status, Win};
use crate::timeline::Timeline;
use crate::{Board, Player, Position, Square};
use tracing::{debug, instrument};

#[cfg(debug_assertions)]
use crate::invariants::check_postconditions;
#[cfg(debug_assertions)]
use tracing::warn;

/// Tic-tac-toe engine with time travel.
///
/// Holds every board the game has passed through, oldest first, and a
/// cursor naming the board currently shown. Jumping moves the cursor;
/// playing from a past board discards the boards after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    history: Timeline<Board>,
}

impl GameEngine {
    /// Creates an engine holding a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: Timeline::new(Board::new()),
        }
    }

    /// Board at the current move.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// Index of the current move; 0 is the empty board.
    pub fn current_move(&self) -> usize {
        self.history.cursor()
    }

    /// Every board in play order, including any future branch past the cursor.
    pub fn history(&self) -> &Timeline<Board> {
        &self.history
    }

    /// Player whose mark the next move places.
    pub fn turn(&self) -> Player {
        Player::for_move(self.current_move())
    }

    /// Winning line on the current board, if any.
    pub fn winner(&self) -> Option<Win> {
        rules::check_winner(self.board())
    }

    /// Status of the current board.
    pub fn status(&self) -> Status {
        rules::status(self.board())
    }

    /// Places the current player's mark at `position`.
    ///
    /// Playing on a won board or an occupied square changes nothing.
    /// A move made after jumping back discards every later board.
    #[instrument(skip(self), fields(current_move = self.current_move(), player = %self.turn()))]
    pub fn play(&mut self, position: Position) -> PlayOutcome {
        let board = *self.board();

        if rules::check_winner(&board).is_some() {
            debug!("Ignoring move on finished game");
            return PlayOutcome::Ignored(Ignored::GameOver);
        }
        if !board.is_empty(position) {
            debug!("Ignoring move on occupied square");
            return PlayOutcome::Ignored(Ignored::SquareOccupied(position));
        }

        let player = self.turn();
        let discarded = self
            .history
            .commit(board.with(position, Square::Occupied(player)));
        debug!(
            discarded,
            current_move = self.current_move(),
            "Move recorded"
        );

        #[cfg(debug_assertions)]
        if let Err(e) = check_postconditions(&self.history) {
            warn!(error = %e, "Move broke a history invariant");
        }

        PlayOutcome::Placed(Move::new(player, position))
    }

    /// Places the current player's mark at a raw board index (0-8).
    ///
    /// Indices off the board are ignored like any other rejected move.
    pub fn play_index(&mut self, index: usize) -> PlayOutcome {
        match Position::from_index(index) {
            Some(position) => self.play(position),
            None => {
                debug!(index, "Ignoring move off the board");
                PlayOutcome::Ignored(Ignored::OffBoard(index))
            }
        }
    }

    /// Makes `move_index` the current move. History is left as is.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), EngineError> {
        self.history.jump_to(move_index)?;
        debug!("Jumped");
        Ok(())
    }

    /// Returns to a single empty board, dropping all history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history.reset();
    }

    /// Coordinate of the square played at `move_index`.
    ///
    /// Move 0 is the empty starting board and has no coordinate.
    pub fn coordinate_of(&self, move_index: usize) -> Result<Option<Coordinate>, EngineError> {
        let after = self
            .history
            .get(move_index)
            .ok_or(EngineError::MoveOutOfRange {
                requested: move_index,
                len: self.history.len(),
            })?;
        match move_index.checked_sub(1).and_then(|i| self.history.get(i)) {
            Some(before) => move_coordinate(before, after).map(Some),
            None => Ok(None),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
