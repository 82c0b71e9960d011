use thiserror::Error;

/// Errors from a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure: DNS, refused connection, reset, connect timeout.
    #[error("Connection to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("Failed to decode sensor list: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Client(_) => "client_error",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode(_) => "decode_error",
        }
    }
}
