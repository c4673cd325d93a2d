use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] gecko_core::ValidationError),

    #[error(transparent)]
    Request(#[from] gecko_core::RequestFailure),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<gecko_core::Error> for CliError {
    fn from(error: gecko_core::Error) -> Self {
        match error {
            gecko_core::Error::Validation(invalid) => Self::Validation(invalid),
            gecko_core::Error::Request(failure) => Self::Request(failure),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Command(_) => 2,
            Self::Request(gecko_core::RequestFailure::Api { .. }) => 3,
            Self::Request(_) => 4,
            Self::Serialization(_) => 5,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use gecko_core::{Error, RequestFailure, ValidationError};

    use super::*;

    #[test]
    fn rejected_requests_and_transport_faults_differ() {
        let rejected = CliError::from(Error::Request(RequestFailure::Api {
            status: 429,
            message: String::from("rate limited"),
        }));
        let unreachable = CliError::from(Error::Request(RequestFailure::Transport {
            message: String::from("connection refused"),
            timed_out: false,
        }));

        assert_eq!(rejected.exit_code(), 3);
        assert_eq!(rejected.to_string(), "rate limited");
        assert_eq!(unreachable.exit_code(), 4);
    }

    #[test]
    fn bad_input_is_a_usage_error() {
        let invalid = CliError::from(ValidationError::InvalidTimeout {
            value: String::from("0"),
        });
        assert_eq!(invalid.exit_code(), 2);
    }
}
