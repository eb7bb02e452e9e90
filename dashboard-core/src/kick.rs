//! Kick button state
//!
//! The kick button asks the manager to run an out-of-band maintenance step
//! (refreshing its task download). Pressing it hides the button until the
//! request settles, so one click triggers at most one request.

use serde::Serialize;

/// Label of a button that has not failed yet
pub const DEFAULT_LABEL: &str = "Kick task downloader";

/// Label after a failed kick; details go to the log
pub const ERROR_LABEL: &str = "Error, see console.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KickButton {
    visible: bool,
    label: String,
}

impl KickButton {
    pub fn new() -> Self {
        Self {
            visible: true,
            label: DEFAULT_LABEL.to_string(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Hides the button for the duration of a kick.
    ///
    /// Returns false while a previous kick is still in flight; the caller must
    /// not send another request in that case.
    pub fn press(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Shows the button again once the kick settled.
    ///
    /// A failure replaces the label with [`ERROR_LABEL`]. A later success
    /// leaves that label in place.
    pub fn settle<E>(&mut self, outcome: &Result<(), E>) {
        if outcome.is_err() {
            self.label = ERROR_LABEL.to_string();
        }
        self.visible = true;
    }
}

impl Default for KickButton {
    fn default() -> Self {
        Self::new()
    }
}
