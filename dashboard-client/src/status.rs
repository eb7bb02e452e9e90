//! Status report endpoint and poll cycle

use async_trait::async_trait;
use dashboard_core::{Cadence, Clock, Decision, PollFailure, StatusReport};
use tracing::{debug, warn};

use crate::ManagerClient;
use crate::error::Result;

/// Anything that can produce a status report
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> std::result::Result<StatusReport, PollFailure>;
}

impl ManagerClient {
    /// Fetch the manager's status report
    ///
    /// `GET /as-json`
    pub async fn status_report(&self) -> Result<StatusReport> {
        let url = self.url("as-json");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl StatusSource for ManagerClient {
    async fn fetch_status(&self) -> std::result::Result<StatusReport, PollFailure> {
        self.status_report().await.map_err(PollFailure::from)
    }
}

/// Runs one poll cycle: fetch, classify, build the view model.
///
/// Never fails; a failed fetch becomes an error panel with the slower
/// cadence. Rendering the decision and waiting are up to the caller.
pub async fn run_cycle<S, C>(source: &S, clock: &C, cadence: &Cadence) -> Decision
where
    S: StatusSource + ?Sized,
    C: Clock + ?Sized,
{
    let outcome = source.fetch_status().await;

    match &outcome {
        Ok(report) => debug!(
            "Fetched status report: {} worker(s), {} task(s)",
            report.workers.len(),
            report.nr_of_tasks
        ),
        Err(failure) => warn!(
            status = ?failure.status(),
            "Failed to fetch status report: {}",
            failure
        ),
    }

    Decision::with_cadence(outcome, clock.now(), cadence)
}
