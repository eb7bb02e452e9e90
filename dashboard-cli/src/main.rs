//! Dashboard CLI
//!
//! Command-line view of a render-farm manager's status.

mod commands;
mod config;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Manager status dashboard", long_about = None)]
struct Cli {
    /// Manager URL
    #[arg(
        long,
        env = "DASHBOARD_MANAGER_URL",
        default_value = "http://localhost:8083/"
    )]
    manager_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "DASHBOARD_REQUEST_TIMEOUT", default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        manager_url: cli.manager_url,
        request_timeout: Duration::from_secs(cli.timeout),
    };

    handle_command(cli.command, &config).await
}
