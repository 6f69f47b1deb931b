//! Radar HTTP Client
//!
//! A small, type-safe client for triggering Radar test buckets and polling
//! their results until every run has finished.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use radar_client::{BucketPoller, PollPolicy, RadarClient, access_token_from_env, ACCESS_TOKEN_VAR};
//! use radar_core::domain::outcome::RunOutcome;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = RadarClient::new(
//!         radar_client::DEFAULT_BASE_URL,
//!         access_token_from_env(ACCESS_TOKEN_VAR),
//!     );
//!     let poller = BucketPoller::new(Arc::new(client), PollPolicy::default());
//!
//!     let verdict = poller
//!         .poll_and_evaluate("https://api.runscope.com/radar/bucket/abc/trigger", &RunOutcome::Pass)
//!         .await?;
//!
//!     println!("{}", verdict.summary());
//!     Ok(())
//! }
//! ```

mod api;
mod buckets;
pub mod error;
pub mod poller;
mod results;

// Re-export commonly used types
pub use api::RadarApi;
pub use error::{ClientError, Result};
pub use poller::{BucketPoller, BucketVerdict, PollPolicy};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Base URL of the public Radar API
pub const DEFAULT_BASE_URL: &str = "https://api.runscope.com";

/// Environment variable holding the API access token by default
pub const ACCESS_TOKEN_VAR: &str = "RUNSCOPE_ACCESS_TOKEN";

/// Read an access token from the named environment variable
///
/// A missing variable yields an empty token. The API rejects it on the
/// first authenticated call, which reports the remote error in full.
pub fn access_token_from_env(var: &str) -> String {
    std::env::var(var).unwrap_or_default()
}

/// HTTP client for the Radar API
///
/// Constructed once and shared by the trigger and result-detail calls.
#[derive(Debug, Clone)]
pub struct RadarClient {
    /// Base URL of the API (e.g., "https://api.runscope.com")
    base_url: String,
    /// Bearer token for authenticated calls
    access_token: String,
    /// HTTP client instance
    client: Client,
}

impl RadarClient {
    /// Create a new Radar client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "https://api.runscope.com")
    /// * `access_token` - Bearer token sent with result detail requests
    ///
    /// # Example
    /// ```
    /// use radar_client::RadarClient;
    ///
    /// let client = RadarClient::new("https://api.runscope.com", "token");
    /// ```
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_client(base_url, access_token, Client::new())
    }

    /// Create a new Radar client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use radar_client::RadarClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = RadarClient::with_client("https://api.runscope.com", "token", http_client);
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an access token is configured
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code against the one the call expects and
    /// deserialize the JSON body
    ///
    /// The service answers trigger calls with 201 and detail calls with
    /// 200, so anything else, including other 2xx codes, is reported as a
    /// remote error carrying the raw body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status != expected {
            return Err(ClientError::remote(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                body,
            ));
        }

        debug!("Received {} ({} bytes)", status, body.len());

        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
