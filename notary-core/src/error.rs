//! Error types for the core data layer.

use thiserror::Error;

/// Structural errors raised while interpreting an envelope's embedded
/// remote-timestamp payload.
///
/// The payload is stored verbatim from a prior submission response and
/// re-interpreted loosely at verification time, so a malformed shape is
/// reported as a structural error rather than a hash mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The stored response is not a JSON object.
    #[error("invalid timestamp response structure")]
    ResponseNotObject,

    /// The stored response has no `data` object.
    #[error("invalid timestamp response structure: missing data")]
    MissingData,

    /// `data.computed_hash_hex` is missing or not a string.
    #[error("invalid timestamp response structure: missing computed_hash_hex")]
    MissingRecordedHash,
}
