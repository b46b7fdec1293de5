//! Error types for ledger service access.
//!
//! These cover the remote-access layer only. The verification engine
//! never returns an error: every failure mode is folded into the
//! [`Verdict`](crate::verdict::Verdict) it produces.

use thiserror::Error;

/// Errors that can occur while talking to the ledger service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// `data_type` is not exactly 64 characters. Raised before any I/O.
    #[error("data_type must be exactly 64 hex characters (32 bytes), got {0} characters")]
    DataTypeLength(usize),

    /// `data_type` contains a non-hex character. Raised before any I/O.
    #[error("data_type must contain only valid hex characters (0-9, a-f, A-F)")]
    DataTypeCharset,

    /// The service answered with a non-2xx status.
    #[error("ledger API error: {status} {status_text} - {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical status text, when known
        status_text: String,
        /// Raw response body text
        body: String,
    },

    /// Network-level request failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
            body: "maintenance window".to_string(),
        };
        assert!(err.to_string().contains("503 Service Unavailable"));
        assert!(err.to_string().contains("maintenance window"));
    }

    #[test]
    fn test_data_type_length_display() {
        let err = ClientError::DataTypeLength(6);
        assert!(err.to_string().contains("exactly 64 hex characters"));
        assert!(err.to_string().contains("got 6"));
    }
}
