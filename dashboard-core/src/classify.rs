//! Worker classification
//!
//! Splits the workers of a report into "current" ones, shown in the worker
//! table, and "idle" ones that have not been seen for too long.

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::worker::Worker;

/// Workers quiet for longer than this are listed as idle
pub const IDLE_THRESHOLD: TimeDelta = TimeDelta::days(14);

/// Workers split by recent activity, each side in report order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition<'a> {
    pub current: Vec<&'a Worker>,
    pub idle: Vec<&'a Worker>,
}

/// Whether a worker counts as idle at `now`
///
/// A worker without any recorded activity is always idle.
pub fn is_idle(worker: &Worker, now: DateTime<Utc>) -> bool {
    match worker.last_activity {
        None => true,
        Some(seen) => now - seen > IDLE_THRESHOLD,
    }
}

/// Partitions workers into current and idle
pub fn partition(workers: &[Worker], now: DateTime<Utc>) -> Partition<'_> {
    let (idle, current) = workers.iter().partition(|w| is_idle(w, now));
    Partition { current, idle }
}
