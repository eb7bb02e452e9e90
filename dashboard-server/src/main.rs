//! Dashboard Server
//!
//! Serves a live status page for a render-farm manager.
//!
//! Architecture:
//! - Configuration: load settings from environment or defaults
//! - Scheduler: self-rescheduling poll chain against the manager's status report
//! - Render: Handlebars templates turning each cycle into HTML regions
//! - API: the page, the kick trigger and a health check
//!
//! The poller rewrites the page regions after every cycle; browsers pick up
//! the new state on their next refresh.

mod api;
mod config;
mod page;
mod render;
mod scheduler;

use std::sync::Arc;

use anyhow::{Context, Result};
use dashboard_client::ManagerClient;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::config::Config;
use crate::page::Page;
use crate::render::Renderer;
use crate::scheduler::StatusPoller;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Dashboard Server");

    let config = Config::from_env();
    config.validate()?;
    info!(
        "Loaded configuration: manager_url={}, bind_addr={}",
        config.manager_url, config.bind_addr
    );

    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let client = Arc::new(ManagerClient::with_client(
        config.manager_url.clone(),
        http_client,
    ));

    let renderer = Arc::new(Renderer::new()?);
    let page = Page::shared(config.poll_interval);

    let poller = StatusPoller::new(
        client.clone(),
        page.clone(),
        renderer.clone(),
        config.cadence(),
    );
    let poller_handle = tokio::spawn(async move { poller.run().await });

    let app = api::create_router(AppState {
        page,
        renderer,
        kicker: client,
        kick_timeout: config.request_timeout,
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!("Listening on {}", config.bind_addr);

    let served = axum::serve(listener, app).await;
    poller_handle.abort();

    if let Err(e) = served {
        error!("Server error: {}", e);
        return Err(e).context("Failed to serve dashboard");
    }

    Ok(())
}
