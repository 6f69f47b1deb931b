//! Radar API seam
//!
//! The poller only needs two calls from the service. They are expressed
//! as a trait so the polling loop can run against any implementation.

use async_trait::async_trait;
use radar_core::domain::run::{RunDescriptor, RunResult};

use crate::RadarClient;
use crate::error::Result;

/// The calls the bucket poller makes against the Radar service
#[async_trait]
pub trait RadarApi: Send + Sync {
    /// Trigger a bucket and return its runs in response order
    async fn trigger(&self, trigger_url: &str) -> Result<Vec<RunDescriptor>>;

    /// Fetch fresh result detail for one run
    async fn fetch_result(&self, run: &RunDescriptor) -> Result<RunResult>;
}

#[async_trait]
impl RadarApi for RadarClient {
    async fn trigger(&self, trigger_url: &str) -> Result<Vec<RunDescriptor>> {
        Ok(self.trigger_bucket(trigger_url).await?.into_runs())
    }

    async fn fetch_result(&self, run: &RunDescriptor) -> Result<RunResult> {
        RadarClient::fetch_result(self, run).await
    }
}
