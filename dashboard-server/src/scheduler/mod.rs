//! Scheduler layer for the dashboard
//!
//! This layer drives the poll chain: each cycle fetches the manager's status,
//! rewrites the page, and then waits for the delay that cycle decided on
//! before the next one starts. Cycles never overlap.

pub mod poller;

pub use poller::StatusPoller;

use async_trait::async_trait;
use std::time::Duration;

/// Waits between poll cycles
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn wait(&self, delay: Duration);
}

/// Scheduler backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
