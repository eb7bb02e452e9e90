//! Health Check API Handler

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::api::AppState;

/// GET /health
/// Liveness of the dashboard itself, with the manager version last seen
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let page = state.page.read().await;

    Json(json!({
        "status": "ok",
        "manager_version": page.version(),
    }))
}
