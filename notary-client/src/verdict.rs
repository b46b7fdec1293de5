//! Verification verdict structures.
//!
//! The engine's sole output. Every failure mode — structural,
//! mismatch, or transport — is encoded here rather than raised, so
//! callers branch on [`Verdict::valid`] instead of catching errors.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use notary_core::EnvelopeError;

/// Why a verification came back invalid.
///
/// Serialized as its display string, matching the message set callers
/// of the ledger service already know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyFailure {
    /// The envelope carries no recorded hash.
    #[error("missing field: envelope.metadata.hash")]
    MissingHash,

    /// The recomputed digest differs from the one the envelope recorded.
    #[error("hash mismatch: computed hash does not match envelope hash")]
    HashMismatch,

    /// The embedded timestamp response has the wrong shape.
    #[error("{0}")]
    MalformedTimestamp(#[from] EnvelopeError),

    /// The remote record could not be fetched, even after the retry.
    /// Wraps the underlying error text.
    #[error("failed to fetch remote record: {0}")]
    RemoteFetch(String),

    /// The remote record disagrees with the recomputed digest.
    #[error("remote verification failed: hash does not match remote record")]
    RemoteMismatch,
}

impl Serialize for VerifyFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Per-check detail of a verification, populated incrementally: fields
/// not yet computed at the point of failure are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictDetails {
    /// Whether the recomputed digest matched the envelope's.
    pub hash_match: bool,

    /// Whether the remote record matched; absent when no remote check
    /// ran (local-only verification).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_match: Option<bool>,

    /// Digest recomputed from the envelope's payload.
    pub computed_hash: String,

    /// Digest recorded in the envelope's metadata.
    pub envelope_hash: String,

    /// Data-item hex of the fetched remote record, when one was fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_hash: Option<String>,
}

/// Result of verifying one envelope.
///
/// # Example
///
/// ```rust
/// use notary_client::{Verdict, VerifyFailure};
///
/// let verdict = Verdict::invalid(VerifyFailure::MissingHash, None);
/// assert!(!verdict.valid);
/// assert!(verdict.details.is_none());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// Whether every attempted check passed.
    pub valid: bool,

    /// Present iff not valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<VerifyFailure>,

    /// Present whenever at least the local hash comparison ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<VerdictDetails>,
}

impl Verdict {
    /// A passing verdict.
    pub fn valid(details: VerdictDetails) -> Self {
        Self {
            valid: true,
            error: None,
            details: Some(details),
        }
    }

    /// A failing verdict with whatever detail was computed before the
    /// failing stage.
    pub fn invalid(error: VerifyFailure, details: Option<VerdictDetails>) -> Self {
        Self {
            valid: false,
            error: Some(error),
            details,
        }
    }

    /// Whether a remote cross-check ran and passed. `false` for
    /// local-only verdicts, whose guarantee is weaker.
    pub fn remotely_verified(&self) -> bool {
        self.details
            .as_ref()
            .and_then(|d| d.remote_match)
            .unwrap_or(false)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            let scope = if self.remotely_verified() {
                "local and remote checks"
            } else {
                "local check only"
            };
            write!(f, "envelope VALID ({})", scope)
        } else {
            write!(
                f,
                "envelope INVALID ({})",
                self.error
                    .as_ref()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "unknown error".to_string())
            )
        }
    }
}
