//! Result detail endpoint

use crate::RadarClient;
use crate::error::Result;
use radar_core::domain::run::{RunDescriptor, RunResult};
use radar_core::dto::result::ResultDetailResponse;
use reqwest::StatusCode;
use tracing::debug;

impl RadarClient {
    // =============================================================================
    // Result Detail
    // =============================================================================

    /// Fetch the latest result detail for a run
    ///
    /// # Arguments
    /// * `run` - The run to look up
    ///
    /// # Returns
    /// A new result value carrying the run's identity and the fetched outcome
    pub async fn fetch_result(&self, run: &RunDescriptor) -> Result<RunResult> {
        let url = format!("{}{}", self.base_url, run.result_path());
        debug!("Fetching result detail for run {}", run.test_run_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let response: ResultDetailResponse =
            self.handle_response(response, StatusCode::OK).await?;

        Ok(response.into_result(run.clone()))
    }
}
