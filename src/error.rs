//! Error types for the social sentiment library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unreadable configuration resource (e.g. the stopword list)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Sentiment oracle failed to score a text
    #[error("Sentiment oracle error: {0}")]
    Oracle(String),

    /// Caller passed a label a query does not accept
    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    /// Remote API returned an error response
    #[error("API request failed: {0}")]
    Api(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
