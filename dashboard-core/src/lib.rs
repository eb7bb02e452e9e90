//! Dashboard Core
//!
//! Core types and pure logic for the manager status dashboard.
//!
//! This crate contains:
//! - Domain types: the manager's status report and its workers
//! - Classification: splitting workers into current and idle
//! - Time formatting: human readable "x minutes ago" strings
//! - View model: what a poll cycle renders, independent of any output format
//! - Cycle decision: what to render and when to poll next
//! - Kick button: state of the manual kick trigger
//!
//! Nothing in here performs I/O; the client and server crates own the side effects.

pub mod classify;
pub mod clock;
pub mod cycle;
pub mod domain;
pub mod kick;
pub mod timefmt;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use cycle::{Cadence, Decision, PollFailure, Render};
pub use domain::report::StatusReport;
pub use domain::worker::{Worker, WorkerStatus};
