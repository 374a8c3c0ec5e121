//! Error types for the API client
//!
//! Provides unified error handling using thiserror.

use serde_json::Value;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the request pipeline.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Remote API answered with a non-success status
    #[error("Request failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response payload, passed through unmodified
        body: Value,
    },

    /// Remote API rejected the credential; the session has already been reset
    #[error("Authentication rejected, session cleared")]
    Unauthorized,

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Payload could not be decoded into the requested type
    #[error("Decode error: {0}")]
    Decode(String),

    /// Malformed path or URL
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    // == Status ==
    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

// == reqwest Conversion ==
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the API client.
pub type Result<T> = std::result::Result<T, ApiError>;
