//! Error types for Domain Insights.

use thiserror::Error;

/// Result type for Domain Insights operations.
pub type Result<T> = std::result::Result<T, InsightsError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsightsError {
    /// The key endpoint answered with a non-2xx status
    #[error("Failed to fetch API key (status {status})")]
    KeyEndpoint { status: u16 },

    /// The key endpoint answered, but without a usable `API_KEY`
    #[error("API key is missing")]
    MissingApiKey,

    /// A query was attempted before the key was loaded
    #[error("Configuration unavailable: API key has not been loaded")]
    ConfigurationUnavailable,

    /// Network error (connection failed, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the analytics API
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Invalid JSON or unexpected response format
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Nothing left of the domain after normalization
    #[error("Please enter a domain.")]
    EmptyDomain,

    /// A submission is already loading
    #[error("A lookup is already in progress")]
    SubmissionInFlight,
}

impl From<serde_json::Error> for InsightsError {
    fn from(err: serde_json::Error) -> Self {
        InsightsError::Parse(err.to_string())
    }
}
