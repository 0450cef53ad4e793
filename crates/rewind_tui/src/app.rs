//! Application state and key handling.

use crate::input::move_cursor;
use crossterm::event::KeyCode;
use rewind_tictactoe::{
    EngineError, GameEngine, ListOrder, MoveEntry, PlayOutcome, Position, move_entries,
};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    MoveList,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::MoveList,
            Focus::MoveList => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    order: ListOrder,
    focus: Focus,
    /// Move index highlighted in the move list.
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application showing an empty board.
    pub fn new(order: ListOrder) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            order,
            focus: Focus::Board,
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Move list order.
    pub fn order(&self) -> ListOrder {
        self.order
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move index highlighted in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Explanation of the last ignored key, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move list entries in display order.
    pub fn entries(&self) -> Result<Vec<MoveEntry>, EngineError> {
        Ok(self.order.arrange(move_entries(&self.engine)?))
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), EngineError> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = self.engine.current_move();
            }
            KeyCode::Char('o') => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "Toggled move list order");
            }
            KeyCode::Char('r') => {
                info!("Restarting game");
                self.engine.restart();
                self.selected = 0;
                self.message = None;
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::MoveList => self.handle_list_key(key)?,
            },
        }
        Ok(())
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Position::from_index)
                {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) -> Result<(), EngineError> {
        let last = self.engine.history().last_index();
        // Up means "earlier row on screen", which depends on the display order.
        let towards_newer = match (key, self.order) {
            (KeyCode::Down, ListOrder::Ascending) | (KeyCode::Up, ListOrder::Descending) => true,
            (KeyCode::Up, ListOrder::Ascending) | (KeyCode::Down, ListOrder::Descending) => false,
            (KeyCode::Enter, _) => {
                self.engine.jump_to(self.selected)?;
                self.message = None;
                info!(current_move = self.selected, "Jumped");
                return Ok(());
            }
            _ => return Ok(()),
        };

        self.selected = if towards_newer {
            (self.selected + 1).min(last)
        } else {
            self.selected.saturating_sub(1)
        };
        Ok(())
    }

    fn play(&mut self, pos: Position) {
        match self.engine.play(pos) {
            PlayOutcome::Placed(mv) => {
                info!(%mv, "Move played");
                self.message = None;
            }
            PlayOutcome::Ignored(reason) => {
                debug!(%reason, "Move ignored");
                self.message = Some(reason.to_string());
            }
        }
        self.selected = self.engine.current_move();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ListOrder::default())
    }
}
