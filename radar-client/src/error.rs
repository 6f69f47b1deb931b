//! Error types for the Radar client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when triggering or polling a bucket
#[derive(Debug, Error)]
pub enum ClientError {
    /// No trigger URL was supplied
    #[error("A trigger URL is required")]
    MissingTriggerUrl,

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API answered with a status other than the one the call expects
    #[error("Received error {status} {message} {body}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        message: String,
        /// Raw response body
        body: String,
    },

    /// Response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Runs were still working after the retry limit was exhausted
    #[error("Timed out waiting for results, tests still 'working'")]
    TimedOut {
        /// Number of fetch rounds performed
        attempts: u32,
    },
}

impl ClientError {
    /// Create a remote error from status code, reason phrase and body
    pub fn remote(status: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
            body: body.into(),
        }
    }

    /// Status code of a remote error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Remote { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Remote { status, .. } if *status >= 500)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }
}
