//! Status command handler
//!
//! Runs a single poll cycle and prints the summary and worker table.

use anyhow::{Result, bail};
use colored::*;
use dashboard_client::{ManagerClient, run_cycle};
use dashboard_core::view::{DashboardView, WorkerRow};
use dashboard_core::{Cadence, Render, SystemClock};

/// Show the manager status
///
/// Fails when the manager could not be polled, after printing the error panel.
pub async fn show_status(client: &ManagerClient) -> Result<()> {
    let decision = run_cycle(client, &SystemClock, &Cadence::default()).await;

    match decision.render {
        Render::Dashboard(view) => {
            print_summary(&view);
            print_workers(&view);
            Ok(())
        }
        Render::Failure(error) => {
            eprintln!("{}", error.message.red());
            bail!("status poll failed")
        }
    }
}

/// Print the summary panel
fn print_summary(view: &DashboardView) {
    let summary = &view.summary;

    println!(
        "{} {}",
        "Manager".bold(),
        view.manager_version.dimmed()
    );
    println!("  Nr. of workers: {}", summary.nr_of_workers);
    println!("  Nr. of tasks:   {}", summary.nr_of_tasks);
    println!(
        "  Server:         {}",
        summary.server.href.underline()
    );

    if !summary.idle_workers.is_empty() {
        let names: Vec<String> = summary
            .idle_workers
            .iter()
            .map(|w| format!("{} ({})", w.nickname, w.id))
            .collect();
        println!("  Old workers:    {}", names.join(", ").dimmed());
    }
    println!();
}

/// Print one block per current worker
fn print_workers(view: &DashboardView) {
    if view.rows.is_empty() {
        println!("{}", "No active workers.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Found {} active worker(s):", view.rows.len()).bold()
    );
    println!();
    for row in &view.rows {
        print_worker_row(row);
    }
}

fn print_worker_row(row: &WorkerRow) {
    println!("  {} Worker {}", "▸".cyan(), row.nickname.bold());
    println!("    ID:            {}", row.id);
    println!("    Address:       {}", row.address);
    println!("    Status:        {}", colorize_status(row));
    println!("    Software:      {}", row.software);
    println!("    Current task:  {}", row.task.text());
    println!(
        "    Last activity: {} {}",
        row.last_activity.text,
        row.last_activity
            .title
            .as_deref()
            .map(|t| format!("({})", t))
            .unwrap_or_default()
            .dimmed()
    );
    println!();
}

/// Colorize worker status the way the page highlights its rows
fn colorize_status(row: &WorkerRow) -> ColoredString {
    let semantic = row.classes.get(1).map(String::as_str);
    match semantic {
        Some("success") => row.status.green(),
        Some("danger") => row.status.red(),
        Some("default") => row.status.dimmed(),
        _ => row.status.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::view::{ActivityCell, TaskCell};

    fn row(classes: &[&str], status: &str) -> WorkerRow {
        WorkerRow {
            id: "w1".to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            nickname: "bolt".to_string(),
            address: "10.0.0.5".to_string(),
            status: status.to_string(),
            status_class: classes[0].to_string(),
            software: "2.3".to_string(),
            task: TaskCell::Unassigned,
            last_activity: ActivityCell {
                text: "just now".to_string(),
                title: None,
            },
        }
    }

    #[test]
    fn test_colorize_status_follows_row_class() {
        assert_eq!(
            colorize_status(&row(&["status-awake", "success"], "awake")),
            "awake".green()
        );
        assert_eq!(
            colorize_status(&row(&["status-timeout", "danger"], "timeout")),
            "timeout".red()
        );
        assert_eq!(
            colorize_status(&row(&["status-asleep"], "asleep")),
            "asleep".normal()
        );
    }
}
