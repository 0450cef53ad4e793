//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from history
//! storage so the engine, the invariants and the view model can share them.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::{Status, status};
pub use win::{LINES, Win, check_winner};
