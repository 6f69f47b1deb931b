//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod result;
mod run;
mod trigger;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Trigger a bucket, wait for every run and check the results
    Run {
        /// Trigger URL of the bucket
        #[arg(long, env = "RADAR_TRIGGER_URL")]
        trigger_url: Option<String>,

        /// Result every run must have (exact match)
        #[arg(long, default_value = "pass")]
        expected: String,

        /// Seconds to sleep between polls
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Polls allowed after the first one before giving up
        #[arg(long, default_value_t = 60)]
        retry_limit: u32,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Trigger a bucket without waiting for results
    Trigger {
        /// Trigger URL of the bucket
        #[arg(long, env = "RADAR_TRIGGER_URL")]
        trigger_url: Option<String>,
    },
    /// Show the result of a single run
    Result {
        /// Bucket key
        bucket_key: String,
        /// Test ID
        test_id: String,
        /// Test run ID
        run_id: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run {
            trigger_url,
            expected,
            interval,
            retry_limit,
            json,
        } => {
            let args = run::RunArgs {
                trigger_url: trigger_url.unwrap_or_default(),
                expected: expected.into(),
                interval,
                retry_limit,
                json,
            };
            run::handle_run(args, config).await
        }
        Commands::Trigger { trigger_url } => {
            trigger::handle_trigger(&trigger_url.unwrap_or_default(), config).await
        }
        Commands::Result {
            bucket_key,
            test_id,
            run_id,
        } => result::handle_result(&bucket_key, &test_id, &run_id, config).await,
    }
}
