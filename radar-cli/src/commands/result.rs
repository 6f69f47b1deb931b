//! Result command handler

use anyhow::{Context, Result};
use radar_core::domain::run::RunDescriptor;

use crate::config::Config;
use crate::report::print_result_details;

/// Fetch and display the current result of one run
pub async fn handle_result(
    bucket_key: &str,
    test_id: &str,
    run_id: &str,
    config: &Config,
) -> Result<()> {
    let client = config.client()?;
    let run = RunDescriptor::from_identity(bucket_key, test_id, run_id);

    let result = client
        .fetch_result(&run)
        .await
        .with_context(|| format!("Failed to fetch result for run {}", run_id))?;

    print_result_details(&result);

    Ok(())
}
