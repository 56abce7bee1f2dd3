//! Domain errors for Verity.

use thiserror::Error;

use super::models::Severity;

/// Explanation displayed when the verification call itself failed.
pub const UNABLE_TO_COMPLETE: &str = "Unable to complete verification. Please try again.";

/// Errors raised by a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Failures of the call to the remote verification service.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The service answered with a non-success status code.
    #[error("HTTP error: status {0}")]
    Status(u16),

    /// The call could not be completed (connection refused, DNS, timeout...).
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered 2xx but the body was not JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// Message surfaced to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status(code) => {
                format!("Verification service returned an error (HTTP {code}). Please try again.")
            }
            Self::Network(_) | Self::Decode(_) => {
                "Could not reach the verification service. Check your connection and try again."
                    .to_string()
            }
        }
    }
}

/// An index outside the current history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("History index {index} is out of range (history has {len} entries)")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Every way a user intent handled by the orchestrator can fail.
///
/// All variants are recovered locally: the orchestrator has already updated
/// its state and posted a notification by the time one is returned.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("History index {index} is out of range (history has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

impl VerifyError {
    /// Text of the notification posted for this failure.
    pub fn notification_message(&self) -> String {
        match self {
            Self::EmptyInput => "Please enter some text to verify.".to_string(),
            Self::MalformedResponse(_) => {
                "Received an invalid response from the verification service.".to_string()
            }
            Self::ServiceError(message) => message.clone(),
            Self::Transport(err) => err.user_message(),
            Self::OutOfRange { index, .. } => format!("History entry {index} does not exist."),
        }
    }

    /// Severity of the notification posted for this failure.
    pub fn severity(&self) -> Severity {
        match self {
            Self::EmptyInput | Self::OutOfRange { .. } => Severity::Warning,
            Self::MalformedResponse(_) | Self::ServiceError(_) | Self::Transport(_) => {
                Severity::Error
            }
        }
    }

    /// Explanation shown in the result display, if this failure replaces it.
    pub fn display_message(&self) -> Option<String> {
        match self {
            Self::EmptyInput | Self::OutOfRange { .. } => None,
            Self::MalformedResponse(_) => {
                Some("The verification service returned an incomplete result.".to_string())
            }
            Self::ServiceError(message) => Some(message.clone()),
            Self::Transport(_) => Some(UNABLE_TO_COMPLETE.to_string()),
        }
    }
}

impl From<OutOfRange> for VerifyError {
    fn from(err: OutOfRange) -> Self {
        Self::OutOfRange {
            index: err.index,
            len: err.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_network_messages_differ() {
        let status = TransportError::Status(503).user_message();
        let network = TransportError::Network("connection refused".to_string()).user_message();

        assert!(status.contains("503"));
        assert_ne!(status, network);
    }

    #[test]
    fn test_service_error_surfaces_message_verbatim() {
        let err = VerifyError::ServiceError("bad format".to_string());
        assert_eq!(err.notification_message(), "bad format");
        assert_eq!(err.display_message().as_deref(), Some("bad format"));
        assert_eq!(err.severity(), Severity::Error);
    }

    #[test]
    fn test_empty_input_is_a_warning_without_display() {
        let err = VerifyError::EmptyInput;
        assert_eq!(err.severity(), Severity::Warning);
        assert!(err.display_message().is_none());
    }

    #[test]
    fn test_transport_failures_share_generic_display() {
        let status = VerifyError::from(TransportError::Status(500));
        let network = VerifyError::from(TransportError::Network("offline".to_string()));

        assert_eq!(status.display_message().as_deref(), Some(UNABLE_TO_COMPLETE));
        assert_eq!(network.display_message().as_deref(), Some(UNABLE_TO_COMPLETE));
    }

    #[test]
    fn test_out_of_range_converts() {
        let err = VerifyError::from(OutOfRange { index: 99, len: 3 });
        assert!(matches!(err, VerifyError::OutOfRange { index: 99, len: 3 }));
        assert_eq!(err.notification_message(), "History entry 99 does not exist.");
        assert_eq!(err.severity(), Severity::Warning);
    }
}
