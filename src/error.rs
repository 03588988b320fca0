//! Error types for the portal client

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for portal client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx HTTP response. Callers distinguish conflict, auth, and other
    /// failures by inspecting `status`.
    #[error("API request failed with status {status}: {message}")]
    Response { status: StatusCode, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status of the server response, if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key not configured. Set one via ClientConfig::api_key or WORKOS_API_KEY.")]
    MissingApiKey,
}
