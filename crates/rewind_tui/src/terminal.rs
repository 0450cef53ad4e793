//! Terminal mode cleanup.

use crossterm::{cursor::Show, execute, terminal::LeaveAlternateScreen};
use std::io;
use tracing::{debug, warn};

/// Runs a cleanup closure when dropped.
///
/// Create it right after entering raw mode.
pub struct RestoreGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Arms a guard that calls `restore` once on drop.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            debug!("Running terminal restore");
            restore();
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Each step is attempted even if an earlier one fails.
pub fn restore_terminal() {
    if let Err(e) = crossterm::terminal::disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}
