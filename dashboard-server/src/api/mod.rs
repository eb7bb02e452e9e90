//! API Module
//!
//! HTTP layer of the dashboard: the page itself, the kick trigger and a
//! health check.

pub mod dashboard;
pub mod error;
pub mod health;
pub mod kick;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use dashboard_client::KickTarget;
use tower_http::trace::TraceLayer;

use crate::page::SharedPage;
use crate::render::Renderer;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub page: SharedPage,
    pub renderer: Arc<Renderer>,
    pub kicker: Arc<dyn KickTarget>,
    /// Upper bound on a kick; the button is settled with an error after it
    pub kick_timeout: Duration,
}

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Dashboard page
        .route("/", get(dashboard::index))
        // Manual kick
        .route("/kick", get(kick::kick))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// State backed by an empty page and a manager nobody listens on
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use dashboard_client::ManagerClient;

    use crate::page::Page;

    AppState {
        page: Page::shared(Duration::from_secs(2)),
        renderer: Arc::new(Renderer::new().unwrap()),
        kicker: Arc::new(ManagerClient::new("http://127.0.0.1:9")),
        kick_timeout: Duration::from_secs(1),
    }
}
