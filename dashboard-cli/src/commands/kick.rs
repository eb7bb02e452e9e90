//! Kick command handler
//!
//! Sends a single kick to the manager. The outcome is reported the same way
//! the page's kick button reports it; the error itself goes to stderr.

use anyhow::Result;
use colored::*;
use dashboard_client::{KickTarget, ManagerClient};
use dashboard_core::kick::KickButton;

/// Kick the manager's task downloader
pub async fn kick(client: &ManagerClient) -> Result<()> {
    let mut button = KickButton::new();
    button.press();

    let outcome = client.kick().await;
    if let Err(e) = &outcome {
        eprintln!("{}", format!("Kick failed: {}", e).dimmed());
    }
    button.settle(&outcome);

    match outcome {
        Ok(()) => println!("{} {}", "✓".green(), "Manager kicked.".bold()),
        Err(_) => println!("{}", button.label().red()),
    }

    outcome.map_err(Into::into)
}
