//! Configuration module
//!
//! Handles CLI configuration: API location, credentials and HTTP settings.

use std::time::Duration;

use anyhow::{Context, Result};
use radar_client::RadarClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Radar API
    pub api_url: String,

    /// Bearer token for result detail calls, empty when unset
    pub access_token: String,

    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }

    /// Builds the API client shared by every call of a command
    pub fn client(&self) -> Result<RadarClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(RadarClient::with_client(
            &self.api_url,
            &self.access_token,
            http_client,
        ))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: radar_client::DEFAULT_BASE_URL.to_string(),
            access_token: String::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}
