//! Worker domain model
//!
//! Represents a remote compute node as reported by the manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Software string the stock worker reports; only its version is worth showing.
pub const DEFAULT_SOFTWARE_PREFIX: &str = "Flamenco-Worker/";

/// Shown when a worker never reported its software.
pub const UNKNOWN_SOFTWARE: &str = "-unknown-";

/// A worker known to the manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier of the worker
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Human-friendly name
    #[serde(default)]
    pub nickname: String,

    /// Network address the worker was last seen from
    #[serde(default)]
    pub address: String,

    /// Last reported status, if any
    #[serde(default)]
    pub status: Option<WorkerStatus>,

    /// User agent of the worker software (e.g. "Flamenco-Worker/2.3")
    #[serde(default)]
    pub software: Option<String>,

    /// Task the worker is currently assigned to
    #[serde(default)]
    pub current_task: Option<String>,

    /// Status of the current task
    #[serde(default)]
    pub current_task_status: Option<String>,

    /// Last time the current task was updated
    #[serde(default, deserialize_with = "super::lenient_timestamp")]
    pub current_task_updated: Option<DateTime<Utc>>,

    /// Last time the worker talked to the manager
    #[serde(default, deserialize_with = "super::lenient_timestamp")]
    pub last_activity: Option<DateTime<Utc>>,
}

impl Worker {
    /// Software name with the default worker prefix stripped
    ///
    /// `"Flamenco-Worker/2.3"` becomes `"2.3"`; anything else is returned as-is.
    pub fn software_label(&self) -> String {
        match &self.software {
            Some(software) if !software.is_empty() => normalize_software(software).to_string(),
            _ => UNKNOWN_SOFTWARE.to_string(),
        }
    }
}

/// Strips the default worker software prefix, keeping the trailing version.
pub fn normalize_software(software: &str) -> &str {
    software
        .strip_prefix(DEFAULT_SOFTWARE_PREFIX)
        .unwrap_or(software)
}

/// Status of a worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkerStatus {
    /// Worker is alive and talking to the manager
    Awake,

    /// Worker signed off
    Down,

    /// Worker stopped responding
    Timeout,

    /// Any status this dashboard has no special treatment for
    Other(String),
}

impl WorkerStatus {
    /// The raw status string as sent by the manager
    pub fn as_str(&self) -> &str {
        match self {
            WorkerStatus::Awake => "awake",
            WorkerStatus::Down => "down",
            WorkerStatus::Timeout => "timeout",
            WorkerStatus::Other(raw) => raw,
        }
    }

    /// Semantic highlight class for table rows
    pub fn semantic_class(&self) -> Option<&'static str> {
        match self {
            WorkerStatus::Awake => Some("success"),
            WorkerStatus::Down => Some("default"),
            WorkerStatus::Timeout => Some("danger"),
            WorkerStatus::Other(_) => None,
        }
    }
}

impl From<String> for WorkerStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "awake" => WorkerStatus::Awake,
            "down" => WorkerStatus::Down,
            "timeout" => WorkerStatus::Timeout,
            _ => WorkerStatus::Other(raw),
        }
    }
}

impl From<WorkerStatus> for String {
    fn from(status: WorkerStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker_json(extra: &str) -> String {
        format!(
            r#"{{"_id": "w1", "nickname": "bolt", "address": "10.0.0.5"{}}}"#,
            extra
        )
    }

    #[test]
    fn test_normalize_software_strips_default_prefix() {
        assert_eq!(normalize_software("Flamenco-Worker/2.3"), "2.3");
        assert_eq!(normalize_software("CustomWorker/1.0"), "CustomWorker/1.0");
    }

    #[test]
    fn test_software_label_unknown() {
        let worker: Worker = serde_json::from_str(&worker_json("")).unwrap();
        assert_eq!(worker.software_label(), UNKNOWN_SOFTWARE);

        let worker: Worker =
            serde_json::from_str(&worker_json(r#", "software": "Flamenco-Worker/2.1.0""#)).unwrap();
        assert_eq!(worker.software_label(), "2.1.0");
    }

    #[test]
    fn test_status_parsing() {
        let worker: Worker =
            serde_json::from_str(&worker_json(r#", "status": "timeout""#)).unwrap();
        assert_eq!(worker.status, Some(WorkerStatus::Timeout));
        assert_eq!(worker.status.unwrap().semantic_class(), Some("danger"));

        let worker: Worker =
            serde_json::from_str(&worker_json(r#", "status": "testing""#)).unwrap();
        let status = worker.status.unwrap();
        assert_eq!(status, WorkerStatus::Other("testing".to_string()));
        assert_eq!(status.to_string(), "testing");
        assert_eq!(status.semantic_class(), None);
    }

    #[test]
    fn test_id_alias_and_unknown_fields() {
        let json = r#"{"id": "w2", "platform": "linux", "supported_job_types": ["sleep"]}"#;
        let worker: Worker = serde_json::from_str(json).unwrap();
        assert_eq!(worker.id, "w2");
        assert!(worker.status.is_none());
        assert!(worker.last_activity.is_none());
    }

    #[test]
    fn test_timestamps_are_lenient() {
        let worker: Worker = serde_json::from_str(&worker_json(
            r#", "last_activity": "2024-03-01T12:00:00Z", "current_task_updated": "garbage""#,
        ))
        .unwrap();
        assert!(worker.last_activity.is_some());
        assert!(worker.current_task_updated.is_none());

        let worker: Worker =
            serde_json::from_str(&worker_json(r#", "last_activity": null"#)).unwrap();
        assert!(worker.last_activity.is_none());
    }
}
