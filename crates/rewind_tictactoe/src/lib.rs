//! Tic-tac-toe engine with branching move history.
//!
//! The engine keeps every board the game has passed through and a cursor
//! naming the one on screen. Players can jump back to any earlier board;
//! playing from there discards the boards that came after it.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameEngine, Player, Status};
//!
//! let mut engine = GameEngine::new();
//! for square in [0, 4, 1, 5, 2] {
//!     engine.play_index(square);
//! }
//! assert_eq!(engine.status(), Status::Winner(Player::X));
//!
//! engine.jump_to(0).unwrap();
//! engine.play_index(8);
//! assert_eq!(engine.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinate;
mod engine;
mod error;
mod move_list;
mod position;
mod timeline;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Ignored, Move, PlayOutcome};
pub use coordinate::{Coordinate, changed_position, move_coordinate};
pub use engine::GameEngine;
pub use error::EngineError;
pub use move_list::{ListOrder, MoveEntry, move_entries};
pub use position::Position;
pub use rules::{Status, Win, check_winner, is_draw, is_full, status};
pub use timeline::{Timeline, TimelineError};
pub use types::{Board, Player, Square};
