//! Status report domain model

use serde::{Deserialize, Deserializer, Serialize};

use super::worker::Worker;

/// Snapshot of the manager's state, fetched fresh on every poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Manager version string
    #[serde(default)]
    pub version: String,

    /// Public URL of the server the manager reports to, including trailing slash
    #[serde(default)]
    pub server: String,

    #[serde(default)]
    pub nr_of_workers: u64,

    /// Number of tasks in the manager's database (not all of them queued)
    #[serde(default)]
    pub nr_of_tasks: u64,

    /// Workers in manager order; null or absent means none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub workers: Vec<Worker>,
}

impl StatusReport {
    /// Link to the server's web interface
    pub fn server_url(&self) -> String {
        format!("{}flamenco/", self.server)
    }

    /// Link to a task on the server's web interface
    pub fn task_url(&self, task_id: &str) -> String {
        format!("{}flamenco/tasks/{}", self.server, task_id)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Worker>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Worker>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_workers() {
        let with_null: StatusReport = serde_json::from_str(
            r#"{"version": "2.2", "server": "https://cloud/", "nr_of_workers": 0, "nr_of_tasks": 3, "workers": null}"#,
        )
        .unwrap();
        let missing: StatusReport = serde_json::from_str(
            r#"{"version": "2.2", "server": "https://cloud/", "nr_of_workers": 0, "nr_of_tasks": 3}"#,
        )
        .unwrap();
        let empty: StatusReport = serde_json::from_str(
            r#"{"version": "2.2", "server": "https://cloud/", "nr_of_workers": 0, "nr_of_tasks": 3, "workers": []}"#,
        )
        .unwrap();

        assert!(with_null.workers.is_empty());
        assert_eq!(with_null, empty);
        assert_eq!(missing, empty);
    }

    #[test]
    fn test_links() {
        let report = StatusReport {
            version: "2.2".to_string(),
            server: "https://cloud.example.com/".to_string(),
            nr_of_workers: 0,
            nr_of_tasks: 0,
            workers: vec![],
        };

        assert_eq!(report.server_url(), "https://cloud.example.com/flamenco/");
        assert_eq!(
            report.task_url("5a1b"),
            "https://cloud.example.com/flamenco/tasks/5a1b"
        );
    }
}
