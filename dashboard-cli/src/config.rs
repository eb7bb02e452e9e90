//! Configuration module
//!
//! Handles CLI configuration including the manager URL and request timeout.

use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the manager service
    pub manager_url: String,
    /// Timeout for a single request to the manager
    pub request_timeout: Duration,
}
