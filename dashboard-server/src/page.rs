//! Page state
//!
//! The served page is a set of regions the poller rewrites wholesale every
//! cycle, plus the kick button. HTTP handlers only read it, except for the
//! kick handler which drives the button.

use std::sync::Arc;
use std::time::Duration;

use dashboard_core::kick::KickButton;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::render::RegionUpdate;

/// Page state shared between the poller and the HTTP handlers
pub type SharedPage = Arc<RwLock<Page>>;

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Manager version from the last successful poll
    version: String,
    /// Summary region, or the error panel after a failed poll
    status: String,
    /// Worker table body
    workers: String,
    kick: KickButton,
    /// Browser refresh interval in whole seconds
    refresh_secs: u64,
}

impl Page {
    pub fn new(refresh: Duration) -> Self {
        Self {
            version: String::new(),
            status: String::new(),
            workers: String::new(),
            kick: KickButton::new(),
            refresh_secs: refresh.as_secs().max(1),
        }
    }

    pub fn shared(refresh: Duration) -> SharedPage {
        Arc::new(RwLock::new(Self::new(refresh)))
    }

    /// Replaces the regions named by the update
    pub fn apply(&mut self, update: RegionUpdate) {
        match update {
            RegionUpdate::Dashboard {
                version,
                status,
                workers,
            } => {
                self.version = version;
                self.status = status;
                self.workers = workers;
            }
            RegionUpdate::Failure { status } => {
                self.status = status;
            }
        }
    }

    /// Empty until the first successful poll
    pub fn version(&self) -> &str {
        &self.version
    }

    #[cfg(test)]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[cfg(test)]
    pub fn workers(&self) -> &str {
        &self.workers
    }

    #[cfg(test)]
    pub fn kick(&self) -> &KickButton {
        &self.kick
    }

    pub fn kick_mut(&mut self) -> &mut KickButton {
        &mut self.kick
    }
}
