//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod kick;
mod status;

use anyhow::{Context, Result};
use clap::Subcommand;
use dashboard_client::ManagerClient;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Poll the manager once and show workers and tasks
    Status,
    /// Ask the manager to refresh its task download
    Kick,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = manager_client(config)?;

    match command {
        Commands::Status => status::show_status(&client).await,
        Commands::Kick => kick::kick(&client).await,
    }
}

fn manager_client(config: &Config) -> Result<ManagerClient> {
    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(ManagerClient::with_client(&config.manager_url, http_client))
}
