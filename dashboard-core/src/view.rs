//! View model
//!
//! Declarative description of what one poll cycle shows. Renderers (HTML in
//! the server, colored text in the CLI) consume these types and never look
//! at the raw report.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::partition;
use crate::domain::report::StatusReport;
use crate::domain::worker::Worker;
use crate::timefmt::{absolute, time_diff};

/// Placeholder for an absent status or task
pub const NONE_PLACEHOLDER: &str = "-none-";

/// Shown when the manager could not be reached at all
pub const UNREACHABLE_MESSAGE: &str =
    "Unable to get the status report. Is the Manager still running & reachable?";

pub const TASKS_TOOLTIP: &str = "Number of tasks in database. Probably not all queued.";
pub const IDLE_WORKERS_TOOLTIP: &str = "Workers not seen in over two weeks.";

/// Everything rendered after a successful poll
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub manager_version: String,
    pub summary: SummaryView,
    pub rows: Vec<WorkerRow>,
}

/// Summary panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub nr_of_workers: u64,
    pub nr_of_tasks: u64,
    pub tasks_tooltip: &'static str,
    pub server: Link,
    /// Empty when no worker is idle; the panel then omits the section
    pub idle_workers: Vec<IdleWorker>,
    pub idle_tooltip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// Idle worker name, with its id as tooltip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdleWorker {
    pub nickname: String,
    pub id: String,
}

/// One row of the worker table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerRow {
    pub id: String,
    /// `status-<status>` followed by the semantic class, if any
    pub classes: Vec<String>,
    pub nickname: String,
    pub address: String,
    pub status: String,
    pub status_class: String,
    pub software: String,
    pub task: TaskCell,
    pub last_activity: ActivityCell,
}

/// Current task column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskCell {
    /// Worker has a task; rendered as a link to it
    Assigned { href: String, text: String },
    /// Rendered as [`NONE_PLACEHOLDER`]
    Unassigned,
}

impl TaskCell {
    pub fn text(&self) -> &str {
        match self {
            TaskCell::Assigned { text, .. } => text,
            TaskCell::Unassigned => NONE_PLACEHOLDER,
        }
    }
}

/// Last activity column: relative text, absolute time as tooltip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCell {
    pub text: String,
    pub title: Option<String>,
}

/// Error panel shown when a poll fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub message: String,
}

impl ErrorView {
    /// `"Error <status>: <body>"` when the manager answered, a generic
    /// unreachable message otherwise
    pub fn new(status: Option<u16>, body: &str) -> Self {
        let message = match status {
            Some(status) => format!("Error {}: {}", status, body),
            None => UNREACHABLE_MESSAGE.to_string(),
        };
        Self { message }
    }
}

/// Maps a report onto the view model
pub fn render(report: &StatusReport, now: DateTime<Utc>) -> DashboardView {
    let split = partition(&report.workers, now);

    let summary = SummaryView {
        nr_of_workers: report.nr_of_workers,
        nr_of_tasks: report.nr_of_tasks,
        tasks_tooltip: TASKS_TOOLTIP,
        server: Link {
            href: report.server_url(),
            text: report.server.clone(),
        },
        idle_workers: split
            .idle
            .iter()
            .map(|w| IdleWorker {
                nickname: w.nickname.clone(),
                id: w.id.clone(),
            })
            .collect(),
        idle_tooltip: IDLE_WORKERS_TOOLTIP,
    };

    let rows = split
        .current
        .iter()
        .map(|w| worker_row(report, w, now))
        .collect();

    DashboardView {
        manager_version: report.version.clone(),
        summary,
        rows,
    }
}

fn worker_row(report: &StatusReport, worker: &Worker, now: DateTime<Utc>) -> WorkerRow {
    let status_class = format!(
        "status-{}",
        worker.status.as_ref().map_or("none", |s| s.as_str())
    );

    let mut classes = vec![status_class.clone()];
    if let Some(semantic) = worker.status.as_ref().and_then(|s| s.semantic_class()) {
        classes.push(semantic.to_string());
    }

    WorkerRow {
        id: worker.id.clone(),
        classes,
        nickname: worker.nickname.clone(),
        address: worker.address.clone(),
        status: worker
            .status
            .as_ref()
            .map_or_else(|| NONE_PLACEHOLDER.to_string(), |s| s.to_string()),
        status_class,
        software: worker.software_label(),
        task: task_cell(report, worker, now),
        last_activity: ActivityCell {
            text: time_diff(worker.last_activity, now),
            title: worker.last_activity.as_ref().map(absolute),
        },
    }
}

fn task_cell(report: &StatusReport, worker: &Worker, now: DateTime<Utc>) -> TaskCell {
    let Some(task) = &worker.current_task else {
        return TaskCell::Unassigned;
    };

    let text = match (&worker.current_task_status, worker.current_task_updated) {
        (Some(status), Some(updated)) => {
            format!("{} ({} {})", task, status, time_diff(Some(updated), now))
        }
        (Some(status), None) => format!("{} ({})", task, status),
        (None, _) => task.clone(),
    };

    TaskCell::Assigned {
        href: report.task_url(task),
        text,
    }
}
