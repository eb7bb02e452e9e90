//! Server configuration
//!
//! Where the manager lives, where the dashboard listens, and how often the
//! manager is polled.

use std::time::Duration;

use dashboard_core::Cadence;
use dashboard_core::cycle::{FAILURE_DELAY, SUCCESS_DELAY};

/// Dashboard server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Manager base URL (e.g., "http://localhost:8083/")
    pub manager_url: String,

    /// Address the dashboard page is served on
    pub bind_addr: String,

    /// Delay before the next poll after a successful one
    pub poll_interval: Duration,

    /// Delay before the next poll after a failed one
    pub retry_interval: Duration,

    /// Timeout for a single request to the manager
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(manager_url: String) -> Self {
        Self {
            manager_url,
            bind_addr: "0.0.0.0:8090".to_string(),
            poll_interval: SUCCESS_DELAY,
            retry_interval: FAILURE_DELAY,
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - MANAGER_URL (default: http://localhost:8083/)
    /// - DASHBOARD_BIND_ADDR (default: 0.0.0.0:8090)
    /// - POLL_INTERVAL_MS (milliseconds, default: 2000)
    /// - RETRY_INTERVAL_MS (milliseconds, default: 10000)
    /// - REQUEST_TIMEOUT (seconds, default: 10)
    ///
    /// Unparsable numbers fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let manager_url = std::env::var("MANAGER_URL").unwrap_or(defaults.manager_url);

        let bind_addr = std::env::var("DASHBOARD_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let poll_interval = std::env::var("POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);

        let retry_interval = std::env::var("RETRY_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.retry_interval);

        let request_timeout = std::env::var("REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Self {
            manager_url,
            bind_addr,
            poll_interval,
            retry_interval,
            request_timeout,
        }
    }

    /// Poll delays derived from this configuration
    pub fn cadence(&self) -> Cadence {
        Cadence {
            on_success: self.poll_interval,
            on_failure: self.retry_interval,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.manager_url.is_empty() {
            anyhow::bail!("manager_url cannot be empty");
        }

        if !self.manager_url.starts_with("http://") && !self.manager_url.starts_with("https://") {
            anyhow::bail!("manager_url must start with http:// or https://");
        }

        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.retry_interval.is_zero() {
            anyhow::bail!("retry_interval must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8083/".to_string())
    }
}
