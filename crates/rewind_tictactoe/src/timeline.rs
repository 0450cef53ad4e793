//! Ordered sequence with a cursor and branching overwrite.
//!
//! A [`Timeline`] always holds at least one entry. The cursor can move
//! freely over existing entries; committing a new entry from a past
//! position discards everything after the cursor first.

use serde::Serialize;
use tracing::{debug, instrument};

/// Error returned when the cursor would leave the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TimelineError {
    /// Requested index is past the last entry.
    #[display("Index {requested} is out of range for a timeline of {len} entries")]
    OutOfRange {
        /// The requested index.
        requested: usize,
        /// Number of entries in the timeline.
        len: usize,
    },
}

impl std::error::Error for TimelineError {}

/// Non-empty vector with a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T> Timeline<T> {
    /// Creates a timeline holding only `initial`, with the cursor on it.
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Entry under the cursor.
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a timeline holds at least its first entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the newest entry.
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// All entries, oldest first.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Iterates entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Moves the cursor to `index` without touching the entries.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), TimelineError> {
        if index >= self.entries.len() {
            return Err(TimelineError::OutOfRange {
                requested: index,
                len: self.entries.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Drops every entry after the cursor, appends `entry` and moves the
    /// cursor onto it.
    ///
    /// Returns the number of entries that were discarded.
    #[instrument(skip(self, entry), fields(cursor = self.cursor, len = self.entries.len()))]
    pub fn commit(&mut self, entry: T) -> usize {
        let discarded = self.entries.len() - (self.cursor + 1);
        self.entries.truncate(self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarded future branch");
        }
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
        discarded
    }

    /// Drops everything but the first entry and rewinds the cursor to it.
    pub fn reset(&mut self) {
        self.entries.truncate(1);
        self.cursor = 0;
    }
}

impl<'a, T> IntoIterator for &'a Timeline<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
