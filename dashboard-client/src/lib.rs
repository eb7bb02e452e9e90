//! Dashboard HTTP Client
//!
//! A small, type-safe HTTP client for the manager endpoints the dashboard
//! consumes: the `/as-json` status report and the `/kick` trigger.
//!
//! Both the dashboard server and the CLI go through this crate, and through
//! [`run_cycle`] for a complete poll cycle.
//!
//! # Example
//!
//! ```no_run
//! use dashboard_client::{ManagerClient, run_cycle};
//! use dashboard_core::{Cadence, SystemClock};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ManagerClient::new("http://localhost:8083/");
//!     let decision = run_cycle(&client, &SystemClock, &Cadence::default()).await;
//!     println!("next poll in {:?}", decision.next_delay);
//! }
//! ```

pub mod error;
mod kick;
mod status;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use kick::KickTarget;
pub use status::{StatusSource, run_cycle};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the manager
#[derive(Debug, Clone)]
pub struct ManagerClient {
    /// Base URL of the manager (e.g., "http://localhost:8083")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ManagerClient {
    /// Create a new manager client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the manager (e.g., "http://localhost:8083")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new manager client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use dashboard_client::ManagerClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ManagerClient::with_client("http://localhost:8083", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the manager
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// The body is read as text first so that it can be reported verbatim
    /// when the status is not a success or the JSON does not parse. An
    /// unreadable error body is reported as empty; the status still counts.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ClientError::InvalidPayload {
            status: status.as_u16(),
            body,
            source,
        })
    }

    /// Handle an API response whose body is not interpreted
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
