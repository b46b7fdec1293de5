//! # Notary Core
//!
//! Core data layer of the notary SDK: hashing primitives and the
//! attestation envelope model.
//!
//! This crate computes the digests the ledger service records (legacy
//! Keccak-256 and SHA-256, lowercase hex) and defines the envelope a
//! caller builds after submitting a hash for notarization. Verification
//! of envelopes lives in `notary-client`, which consults the remote
//! ledger; this crate is deliberately free of network I/O and async.
//!
//! ## Quick Start
//!
//! ```rust
//! use notary_core::{keccak256_str, Envelope};
//! use serde_json::json;
//!
//! // Hash some text the way the ledger service does
//! let digest = keccak256_str("hello");
//! assert_eq!(digest.len(), 64);
//!
//! // Build a locally-sealed envelope (no remote timestamp)
//! let envelope = Envelope::local(json!("hello"));
//! assert_eq!(envelope.metadata.hash, digest);
//! ```

pub mod envelope;
pub mod error;
pub mod hash;

// Re-export main types for convenience
pub use envelope::{Envelope, EnvelopeMetadata, RemoteTimestamp};
pub use error::EnvelopeError;
pub use hash::{keccak256, keccak256_str, sha256, sha256_str};
