//! Dashboard Page Handler

use axum::{extract::State, response::Html};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// GET /
/// The dashboard page as last written by the poller
pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let page = state.page.read().await;

    let document = state
        .renderer
        .document(&page)
        .map_err(ApiError::RenderError)?;

    Ok(Html(document))
}
