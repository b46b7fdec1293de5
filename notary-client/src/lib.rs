//! # Notary Client
//!
//! Remote access to the ledger service and local envelope verification.
//!
//! [`LedgerClient`] covers the service's HTTP surface: submitting a hash
//! for notarization, fetching a recorded entry back by hash, and the
//! wider database/hash/Merkle endpoint families. [`Verifier`] re-checks
//! an attestation envelope against both its embedded hash and the
//! ledger's remote record, returning a structured [`Verdict`] rather
//! than an error for every outcome.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notary_client::{LedgerClient, Verifier};
//! use notary_core::Envelope;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LedgerClient::new();
//!
//!     // Hash and submit in one step
//!     let response = client.prove_str("hello", None).await?;
//!     println!("recorded: {}", response.data.computed_hash_hex);
//!
//!     // Later: re-verify the envelope built from that submission
//!     let envelope = Envelope::notarized(json!("hello"), serde_json::to_value(&response)?);
//!     let verdict = Verifier::new(LedgerClient::new()).verify(&envelope).await;
//!     println!("valid: {}", verdict.valid);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod prove;
pub mod types;
pub mod verdict;
pub mod verify;

// Re-export main types for convenience
pub use api::LedgerClient;
pub use config::{validate_data_type, DEFAULT_DATA_TYPE, LEDGER_HOST};
pub use error::ClientError;
pub use types::{ApiResponse, RecordResponse, SubmitResponse};
pub use verdict::{Verdict, VerdictDetails, VerifyFailure};
pub use verify::Verifier;
