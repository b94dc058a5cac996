//! Error types for the tag sweeper
//!
//! Transport failures and service failures are kept apart so the scheduler
//! can log them differently; both are recoverable per work item.

use thiserror::Error;

/// Error type for all tag sweeper operations
#[derive(Error, Debug)]
pub enum SweepError {
    /// Network or HTTP transport failure
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Service returned {status}: {message}")]
    ServiceError { status: u16, message: String },

    /// The API answered with a payload we could not decode
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// `contentDetails.duration` was not an ISO-8601 duration
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// No API key was provided
    #[error("Missing API key (set YT_API_KEY)")]
    MissingApiKey,

    /// Too many IDs for a single detail request
    #[error("Batch of {got} ids exceeds the limit of {max}")]
    BatchTooLarge { max: usize, got: usize },

    /// Configuration rejected before any work started
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SweepError {
    /// Whether this error came from the transport rather than the service
    pub fn is_transport(&self) -> bool {
        matches!(self, SweepError::HttpError(_))
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(err: serde_json::Error) -> Self {
        SweepError::ParseError(err.to_string())
    }
}

/// Result type alias for tag sweeper operations
pub type Result<T> = std::result::Result<T, SweepError>;
