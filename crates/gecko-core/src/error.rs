use thiserror::Error;

/// Configuration and parameter errors raised before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid api tier '{value}', expected one of demo, pro")]
    InvalidTier { value: String },

    #[error("invalid timeout '{value}', expected a positive number of milliseconds")]
    InvalidTimeout { value: String },

    #[error("invalid {field} '{value}'")]
    InvalidOption { field: &'static str, value: String },

    #[error("timestamp {seconds} is outside the supported date range")]
    TimestampOutOfRange { seconds: i64 },

    #[error("date could not be formatted: {message}")]
    DateFormat { message: String },
}

/// Failure of a single API call.
///
/// `message()` carries the remote service's own error text when the response
/// body provides one, otherwise the transport error text, otherwise the raw
/// response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{message}")]
    Transport { message: String, timed_out: bool },

    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

impl RequestFailure {
    pub fn message(&self) -> &str {
        match self {
            Self::Api { message, .. } => message,
            Self::Transport { message, .. } => message,
            Self::Decode { message } => message,
        }
    }

    /// HTTP status of the rejected response, when the server answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Top-level error type for client operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestFailure),
}
