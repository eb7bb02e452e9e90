//! Status poller
//!
//! Polls the manager for its status report and rewrites the page regions.
//! After a successful poll the next one follows quickly; after a failure
//! the poller backs off.

use std::sync::Arc;
use std::time::Duration;

use dashboard_client::{StatusSource, run_cycle};
use dashboard_core::{Cadence, Clock, SystemClock};
use tracing::{debug, error, info};

use super::{Scheduler, TokioScheduler};
use crate::page::SharedPage;
use crate::render::Renderer;

/// Self-rescheduling status poller
pub struct StatusPoller {
    source: Arc<dyn StatusSource>,
    clock: Arc<dyn Clock>,
    scheduler: Arc<dyn Scheduler>,
    page: SharedPage,
    renderer: Arc<Renderer>,
    cadence: Cadence,
}

impl StatusPoller {
    /// Creates a poller using the wall clock and the tokio timer
    pub fn new(
        source: Arc<dyn StatusSource>,
        page: SharedPage,
        renderer: Arc<Renderer>,
        cadence: Cadence,
    ) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            scheduler: Arc::new(TokioScheduler),
            page,
            renderer,
            cadence,
        }
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[cfg(test)]
    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Starts the polling chain; runs for the lifetime of the process
    pub async fn run(&self) {
        info!(
            "Starting status poller (success delay: {:?}, failure delay: {:?})",
            self.cadence.on_success, self.cadence.on_failure
        );

        loop {
            self.tick().await;
        }
    }

    /// Runs one cycle, then waits the delay it decided on
    ///
    /// Returns the delay that was waited.
    pub async fn tick(&self) -> Duration {
        let delay = self.poll_once().await;
        self.scheduler.wait(delay).await;
        delay
    }

    /// Performs a single poll cycle and returns the delay before the next one
    async fn poll_once(&self) -> Duration {
        debug!("Polling manager status");

        let decision = run_cycle(self.source.as_ref(), self.clock.as_ref(), &self.cadence).await;

        match self.renderer.render(&decision.render) {
            Ok(update) => {
                self.page.write().await.apply(update);
                debug!("Page updated, next poll in {:?}", decision.next_delay);
                decision.next_delay
            }
            Err(e) => {
                error!("Failed to render page regions: {:#}", e);
                self.cadence.on_failure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use dashboard_core::{FixedClock, PollFailure, StatusReport};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays scripted poll outcomes, one per cycle
    struct ScriptedSource {
        outcomes: Mutex<VecDeque<Result<StatusReport, PollFailure>>>,
    }

    impl ScriptedSource {
        fn new(outcomes: Vec<Result<StatusReport, PollFailure>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
            }
        }
    }

    #[async_trait]
    impl StatusSource for ScriptedSource {
        async fn fetch_status(&self) -> Result<StatusReport, PollFailure> {
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("no scripted outcome left")
        }
    }

    /// Records requested delays instead of sleeping
    #[derive(Default)]
    struct RecordingScheduler {
        delays: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Scheduler for RecordingScheduler {
        async fn wait(&self, delay: Duration) {
            self.delays.lock().unwrap().push(delay);
        }
    }

    fn report() -> StatusReport {
        serde_json::from_str(
            r#"{
                "version": "2.2.0",
                "server": "https://cloud.example.com/",
                "nr_of_workers": 1,
                "nr_of_tasks": 4,
                "workers": [
                    {"_id": "w1", "nickname": "bolt", "address": "10.0.0.5", "status": "awake",
                     "last_activity": "2024-03-15T11:59:00Z"}
                ]
            }"#,
        )
        .unwrap()
    }

    fn poller(
        outcomes: Vec<Result<StatusReport, PollFailure>>,
    ) -> (StatusPoller, SharedPage, Arc<RecordingScheduler>) {
        let page = Page::shared(Duration::from_millis(2000));
        let scheduler = Arc::new(RecordingScheduler::default());
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());

        let poller = StatusPoller::new(
            Arc::new(ScriptedSource::new(outcomes)),
            page.clone(),
            Arc::new(Renderer::new().unwrap()),
            Cadence::default(),
        )
        .with_clock(Arc::new(clock))
        .with_scheduler(scheduler.clone());

        (poller, page, scheduler)
    }

    #[tokio::test]
    async fn test_success_reschedules_after_two_seconds() {
        let (poller, page, scheduler) = poller(vec![Ok(report())]);

        let delay = poller.tick().await;

        assert_eq!(delay, Duration::from_millis(2000));
        assert_eq!(
            *scheduler.delays.lock().unwrap(),
            vec![Duration::from_millis(2000)]
        );
        let page = page.read().await;
        assert!(page.workers().contains(r#"<tr id="w1""#));
        assert!(page.workers().contains("1 minutes ago"));
    }

    #[tokio::test]
    async fn test_failure_backs_off_and_keeps_table() {
        let (poller, page, scheduler) = poller(vec![
            Ok(report()),
            Err(PollFailure::Unreachable("connection refused".to_string())),
            Err(PollFailure::Http {
                status: 503,
                body: "busy".to_string(),
            }),
            Ok(report()),
        ]);

        poller.tick().await;
        poller.tick().await;
        {
            let page = page.read().await;
            assert!(page.status().contains("Unable to get the status report."));
            assert!(page.workers().contains(r#"<tr id="w1""#));
        }

        poller.tick().await;
        assert!(page.read().await.status().contains("Error 503: busy"));

        poller.tick().await;
        assert!(page.read().await.status().contains("Nr. of workers"));

        assert_eq!(
            *scheduler.delays.lock().unwrap(),
            vec![
                Duration::from_millis(2000),
                Duration::from_millis(10000),
                Duration::from_millis(10000),
                Duration::from_millis(2000),
            ]
        );
    }
}
