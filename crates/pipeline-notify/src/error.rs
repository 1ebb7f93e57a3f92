//! Error types for pipeline notifications.

use thiserror::Error;

/// Errors that can occur while building or delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Job status is neither `success` nor `failure`
    #[error("Invalid job status '{0}', expected 'success' or 'failure'")]
    InvalidStatus(String),

    /// Pipeline type has no message layout
    #[error("Unrecognized pipeline type '{0}'")]
    UnrecognizedPipelineType(String),

    /// Pipeline start timestamp could not be parsed
    #[error("Invalid pipeline start timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A required setting was not provided
    #[error("Missing configuration: {0} is not set")]
    MissingConfiguration(&'static str),

    /// Webhook answered with something other than 200
    #[error("Request to Slack returned an error {status}, the response is:\n{body}")]
    DeliveryFailed { status: u16, body: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = NotifyError> = std::result::Result<T, E>;
