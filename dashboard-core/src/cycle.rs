//! Poll cycle decision
//!
//! The outcome of a single poll is turned into a [`Decision`]: what to render
//! and how long to wait before polling again. Performing the render and the
//! wait is left to the caller.

use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::report::StatusReport;
use crate::view::{self, DashboardView, ErrorView};

/// Delay before the next poll after a successful one
pub const SUCCESS_DELAY: Duration = Duration::from_millis(2_000);

/// Delay before the next poll after a failed one
pub const FAILURE_DELAY: Duration = Duration::from_millis(10_000);

/// Why a poll produced no report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollFailure {
    /// Transport-level failure; no HTTP status available
    #[error("manager unreachable: {0}")]
    Unreachable(String),

    /// The manager answered, but not with a usable report
    #[error("manager returned status {status}: {body}")]
    Http { status: u16, body: String },
}

impl PollFailure {
    /// HTTP status the manager answered with, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            PollFailure::Unreachable(_) => None,
            PollFailure::Http { status, .. } => Some(*status),
        }
    }

    /// Error panel for this failure
    pub fn to_view(&self) -> ErrorView {
        match self {
            PollFailure::Unreachable(_) => ErrorView::new(None, ""),
            PollFailure::Http { status, body } => ErrorView::new(Some(*status), body),
        }
    }
}

/// Delays between polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub on_success: Duration,
    pub on_failure: Duration,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            on_success: SUCCESS_DELAY,
            on_failure: FAILURE_DELAY,
        }
    }
}

/// What a cycle renders
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    /// Replace the summary and the worker table
    Dashboard(DashboardView),
    /// Replace the summary with an error panel
    Failure(ErrorView),
}

/// Result of one poll cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub render: Render,
    pub next_delay: Duration,
}

impl Decision {
    /// Decides with the default cadence
    pub fn from_outcome(outcome: Result<StatusReport, PollFailure>, now: DateTime<Utc>) -> Self {
        Self::with_cadence(outcome, now, &Cadence::default())
    }

    pub fn with_cadence(
        outcome: Result<StatusReport, PollFailure>,
        now: DateTime<Utc>,
        cadence: &Cadence,
    ) -> Self {
        match outcome {
            Ok(report) => Self {
                render: Render::Dashboard(view::render(&report, now)),
                next_delay: cadence.on_success,
            },
            Err(failure) => Self {
                render: Render::Failure(failure.to_view()),
                next_delay: cadence.on_failure,
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.render, Render::Failure(_))
    }
}
