//! Trigger command handler

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;
use crate::report::print_run_summary;

/// Trigger a bucket and list the runs it started
pub async fn handle_trigger(trigger_url: &str, config: &Config) -> Result<()> {
    let client = config.client()?;

    let runs = client
        .trigger_bucket(trigger_url)
        .await
        .context("Failed to trigger bucket")?
        .into_runs();

    if runs.is_empty() {
        println!("{}", "Bucket started no runs.".yellow());
    } else {
        println!("{}", format!("Started {} run(s):", runs.len()).bold());
        println!();
        for run in &runs {
            print_run_summary(run);
        }
    }

    Ok(())
}
