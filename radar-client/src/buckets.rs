//! Bucket trigger endpoint

use crate::RadarClient;
use crate::error::{ClientError, Result};
use radar_core::dto::trigger::TriggerResponse;
use reqwest::StatusCode;
use tracing::info;

impl RadarClient {
    // =============================================================================
    // Bucket Trigger
    // =============================================================================

    /// Trigger every test in a bucket
    ///
    /// The trigger URL is absolute and is used as given; it is not joined
    /// to the client's base URL and carries no authorization header.
    ///
    /// # Arguments
    /// * `trigger_url` - The bucket's trigger URL
    ///
    /// # Returns
    /// The parsed trigger response, runs in the order the service listed them
    ///
    /// # Example
    /// ```no_run
    /// # use radar_client::RadarClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = RadarClient::new("https://api.runscope.com", "token");
    /// let response = client
    ///     .trigger_bucket("https://api.runscope.com/radar/bucket/abc/trigger")
    ///     .await?;
    /// for run in response.into_runs() {
    ///     println!("{}", run.test_run_id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn trigger_bucket(&self, trigger_url: &str) -> Result<TriggerResponse> {
        let trigger_url = trigger_url.trim();
        if trigger_url.is_empty() {
            return Err(ClientError::MissingTriggerUrl);
        }

        let response = self.client.get(trigger_url).send().await?;
        let response: TriggerResponse = self
            .handle_response(response, StatusCode::CREATED)
            .await?;

        info!("Triggered test bucket url -> {}", trigger_url);
        if let Some(total) = response.data.runs_total {
            info!(
                "Bucket started {} of {} run(s), {} failed to start",
                response.data.runs_started.unwrap_or_default(),
                total,
                response.data.runs_failed.unwrap_or_default()
            );
        }

        Ok(response)
    }
}
