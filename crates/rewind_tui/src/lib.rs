//! Terminal front end for the rewind tic-tac-toe engine.
//!
//! The front end owns presentation state only: the board cursor, which
//! pane has focus, and the move list order. Every game decision is
//! delegated to [`rewind_tictactoe::GameEngine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::move_cursor;
pub use terminal::{RestoreGuard, restore_terminal};
pub use ui::draw;
