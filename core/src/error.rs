//! Error types for the collection API client.
//!
//! # Design
//! Every variant renders to the message shown in the page's error status, so
//! `Display` is the user-facing text. `Operation` tells the two endpoints
//! apart because their messages differ.

use std::fmt;

use crate::text;

/// Which API operation produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Detail,
}

impl Operation {
    /// Fallback shown when an error carries no message of its own.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Search => text::SEARCH_FAILED_FALLBACK,
            Operation::Detail => text::WORK_FAILED_FALLBACK,
        }
    }
}

/// Errors returned by `ArticClient` parse methods and `WorksApi` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Raised by the simulation policy before any network call.
    SimulatedError(Operation),

    /// The server returned a non-2xx status.
    NetworkError { operation: Operation, status: u16 },

    /// The response body could not be deserialized into the expected type.
    ParseError(String),

    /// The host could not complete the round-trip.
    TransportError(String),
}

impl ApiError {
    /// The message to show for this error, or `None` if it has nothing to say.
    pub fn message(&self) -> Option<String> {
        let message = self.to_string();
        (!message.trim().is_empty()).then_some(message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::SimulatedError(Operation::Search) => f.write_str(text::SIMULATED_SEARCH_ERROR),
            ApiError::SimulatedError(Operation::Detail) => f.write_str(text::SIMULATED_WORK_ERROR),
            ApiError::NetworkError { operation, status } => {
                let prefix = match operation {
                    Operation::Search => text::SEARCH_STATUS_PREFIX,
                    Operation::Detail => text::WORK_STATUS_PREFIX,
                };
                write!(f, "{prefix} ({status})")
            }
            ApiError::ParseError(msg) => f.write_str(msg),
            ApiError::TransportError(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_messages_differ_per_operation() {
        assert_eq!(ApiError::SimulatedError(Operation::Search).to_string(), "Hermuð villa í leit");
        assert_eq!(
            ApiError::SimulatedError(Operation::Detail).to_string(),
            "Hermuð villa í sækja stakt verk"
        );
    }

    #[test]
    fn network_error_carries_status() {
        let err = ApiError::NetworkError {
            operation: Operation::Search,
            status: 503,
        };
        assert_eq!(err.to_string(), "Leit brást (503)");
        let err = ApiError::NetworkError {
            operation: Operation::Detail,
            status: 404,
        };
        assert_eq!(err.to_string(), "Sækja verk brást (404)");
    }

    #[test]
    fn blank_message_is_none() {
        assert_eq!(ApiError::TransportError(String::new()).message(), None);
        assert_eq!(ApiError::ParseError("  ".to_string()).message(), None);
        assert_eq!(
            ApiError::ParseError("expected value at line 1 column 1".to_string()).message().as_deref(),
            Some("expected value at line 1 column 1")
        );
    }
}
