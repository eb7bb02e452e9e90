//! Kick API Handler
//!
//! Forwards a click on the kick button to the manager. The button stays
//! hidden while the request is in flight and shows an error label if the
//! manager refused.
//!
//! The request to the manager runs in its own task, so the button is
//! settled even when the browser goes away before the manager answers.

use axum::{extract::State, response::Redirect};
use tracing::{debug, error, info};

use crate::api::AppState;

/// GET /kick
/// Kick the manager's task downloader, then return to the dashboard
pub async fn kick(State(state): State<AppState>) -> Redirect {
    let pressed = state.page.write().await.kick_mut().press();
    if !pressed {
        debug!("Kick already in flight, ignoring click");
        return Redirect::to("/");
    }

    info!("Kicking manager task downloader");
    let task = tokio::spawn(send_kick(state));
    if let Err(e) = task.await {
        error!("Kick task failed: {}", e);
    }

    Redirect::to("/")
}

/// Sends the kick and settles the button with its outcome
async fn send_kick(state: AppState) {
    let outcome = match tokio::time::timeout(state.kick_timeout, state.kicker.kick()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err(format!("no answer within {:?}", state.kick_timeout)),
    };
    if let Err(e) = &outcome {
        error!("Kick failed: {}", e);
    }

    state.page.write().await.kick_mut().settle(&outcome);
}
