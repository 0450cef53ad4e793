//! View model for the list of past moves.
//!
//! The list is derived from the engine on every render. Its display order is
//! presentation state and is kept by the caller in a [`ListOrder`].

use crate::coordinate::Coordinate;
use crate::error::EngineError;
use crate::GameEngine;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Move number; 0 is the game start.
    pub index: usize,
    /// Square played at this move. `None` for the game start.
    pub coordinate: Option<Coordinate>,
    /// True for the move the engine is currently showing.
    pub is_current: bool,
}

impl MoveEntry {
    /// Text shown for this entry.
    pub fn description(&self) -> String {
        let coordinate = self
            .coordinate
            .map(|c| format!(" {c}"))
            .unwrap_or_default();
        if self.is_current {
            format!("You are at move #{}{}", self.index, coordinate)
        } else if self.index > 0 {
            format!("Go to move #{}{}", self.index, coordinate)
        } else {
            "Go to game start".to_string()
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

/// Builds one entry per board in the engine's history, oldest first.
#[instrument(skip(engine), fields(len = engine.history().len()))]
pub fn move_entries(engine: &GameEngine) -> Result<Vec<MoveEntry>, EngineError> {
    (0..engine.history().len())
        .map(|index| -> Result<MoveEntry, EngineError> {
            Ok(MoveEntry {
                index,
                coordinate: engine.coordinate_of(index)?,
                is_current: index == engine.current_move(),
            })
        })
        .collect()
}

/// Order the move list is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ListOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl ListOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            ListOrder::Ascending => ListOrder::Descending,
            ListOrder::Descending => ListOrder::Ascending,
        }
    }

    /// Label for the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            ListOrder::Ascending => "Ascending",
            ListOrder::Descending => "Descending",
        }
    }

    /// Puts entries, given oldest first, into display order.
    pub fn arrange<T>(self, mut entries: Vec<T>) -> Vec<T> {
        if self == ListOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_has_one_current_entry() {
        let entries = move_entries(&GameEngine::new()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description(), "You are at move #0");
    }

    #[test]
    fn test_descriptions() {
        let mut engine = GameEngine::new();
        engine.play_index(4);
        engine.play_index(0);
        engine.jump_to(1).unwrap();

        let text: Vec<String> = move_entries(&engine)
            .unwrap()
            .iter()
            .map(MoveEntry::description)
            .collect();
        assert_eq!(
            text,
            vec![
                "Go to game start",
                "You are at move #1 (2, 2)",
                "Go to move #2 (1, 1)",
            ]
        );
    }

    #[test]
    fn test_toggle_reverses() {
        let order = ListOrder::default();
        assert_eq!(order.arrange(vec![0, 1, 2]), vec![0, 1, 2]);
        let order = order.toggle();
        assert_eq!(order, ListOrder::Descending);
        assert_eq!(order.arrange(vec![0, 1, 2]), vec![2, 1, 0]);
        assert_eq!(order.toggle(), ListOrder::Ascending);
    }
}
