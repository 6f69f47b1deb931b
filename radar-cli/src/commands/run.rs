//! Run command handler
//!
//! Triggers a bucket, polls until no run is working and turns the verdict
//! into the process exit status.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use radar_client::{BucketPoller, PollPolicy};
use radar_core::domain::outcome::RunOutcome;
use tracing::info;

use crate::config::Config;
use crate::report::{print_mismatches, print_result_row};

/// Arguments of `radar run`
pub struct RunArgs {
    pub trigger_url: String,
    pub expected: RunOutcome,
    pub interval: u64,
    pub retry_limit: u32,
    pub json: bool,
}

/// Handle the run command
///
/// Returns an error when any run ended with an unexpected result, so the
/// process exits non-zero.
pub async fn handle_run(args: RunArgs, config: &Config) -> Result<()> {
    let client = config.client()?;
    let policy = PollPolicy::new(Duration::from_secs(args.interval), args.retry_limit);
    let poller = BucketPoller::new(Arc::new(client), policy);

    info!(
        "Expecting '{}' from every run (interval: {:?}, retry limit: {})",
        args.expected, policy.interval, policy.retry_limit
    );

    let verdict = poller
        .poll_and_evaluate(&args.trigger_url, &args.expected)
        .await
        .context("Failed to poll bucket results")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict.results)?);
    } else {
        println!("{}", format!("Results for {} run(s):", verdict.results.len()).bold());
        println!();
        for result in &verdict.results {
            print_result_row(result, &verdict.expected);
        }
        println!();
    }

    if verdict.passed {
        println!("{}", verdict.summary().green());
        Ok(())
    } else {
        print_mismatches(&verdict);
        anyhow::bail!("Unexpected test results")
    }
}
