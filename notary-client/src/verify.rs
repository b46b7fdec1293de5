//! Envelope verification — the main public API.
//!
//! Re-checks an attestation envelope against its own embedded hash and,
//! when the envelope carries a remote timestamp reference, against the
//! ledger service's record of that submission.

use std::time::Duration;

use tracing::{debug, warn};

use notary_core::hash::keccak256_str;
use notary_core::Envelope;

use crate::api::LedgerClient;
use crate::error::Result;
use crate::types::RecordResponse;
use crate::verdict::{Verdict, VerdictDetails, VerifyFailure};

/// Fixed delay before the single retry of the remote record fetch.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Verifies envelopes against their embedded hash and the ledger's
/// remote record.
///
/// The pipeline is linear and short-circuits on the first failure:
/// structural precondition, local hash comparison, then (only for
/// timestamped envelopes) remote cross-check. Every outcome is returned
/// as a [`Verdict`]; this type never returns an error.
///
/// # Example
///
/// ```rust,no_run
/// use notary_client::{LedgerClient, Verifier};
/// use notary_core::Envelope;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() {
///     let verifier = Verifier::new(LedgerClient::new());
///     let verdict = verifier.verify(&Envelope::local(json!("hello"))).await;
///     assert!(verdict.valid);
/// }
/// ```
pub struct Verifier {
    client: LedgerClient,
    retry_delay: Duration,
}

impl Verifier {
    /// Create a verifier over the given ledger client.
    pub fn new(client: LedgerClient) -> Self {
        Self {
            client,
            retry_delay: RETRY_DELAY,
        }
    }

    /// Override the fixed inter-retry delay. The policy stays one retry
    /// with a fixed delay; this only shortens the wait (tests).
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Verify an envelope, producing a verdict for every outcome.
    ///
    /// A verdict without `remote_match` in its details means only the
    /// local hash comparison ran — a weaker guarantee than the
    /// timestamped case, which cross-checks the ledger's record.
    pub async fn verify(&self, envelope: &Envelope) -> Verdict {
        // An envelope with no recorded hash is structurally unverifiable
        if envelope.metadata.hash.is_empty() {
            return Verdict::invalid(VerifyFailure::MissingHash, None);
        }

        // Recompute the digest over the canonical text and compare locally
        let computed_hash = keccak256_str(&envelope.canonical_text());
        let envelope_hash = envelope.metadata.hash.clone();

        if computed_hash != envelope_hash {
            return Verdict::invalid(
                VerifyFailure::HashMismatch,
                Some(VerdictDetails {
                    hash_match: false,
                    remote_match: None,
                    computed_hash,
                    envelope_hash,
                    remote_hash: None,
                }),
            );
        }

        let local_details = VerdictDetails {
            hash_match: true,
            remote_match: None,
            computed_hash: computed_hash.clone(),
            envelope_hash: envelope_hash.clone(),
            remote_hash: None,
        };

        // No timestamp: local-only verification
        let Some(timestamp) = &envelope.metadata.timestamp else {
            debug!("no remote timestamp; local verification only");
            return Verdict::valid(local_details);
        };

        // Extract the hash the ledger recorded at submission time
        let remote_hash = match timestamp.recorded_hash() {
            Ok(hash) => hash.to_string(),
            Err(e) => {
                return Verdict::invalid(
                    VerifyFailure::MalformedTimestamp(e),
                    Some(local_details),
                )
            }
        };

        // Fetch the ledger's record, retrying once on failure
        let record = match self.fetch_with_retry(&remote_hash).await {
            Ok(record) => record,
            Err(e) => {
                return Verdict::invalid(
                    VerifyFailure::RemoteFetch(e.to_string()),
                    Some(local_details),
                )
            }
        };

        // Cross-check the record's data item against the recomputed digest
        let remote_data_item = record.data.data_item_hex;
        if computed_hash != remote_data_item {
            return Verdict::invalid(
                VerifyFailure::RemoteMismatch,
                Some(VerdictDetails {
                    hash_match: true,
                    remote_match: Some(false),
                    computed_hash,
                    envelope_hash,
                    remote_hash: Some(remote_data_item),
                }),
            );
        }

        Verdict::valid(VerdictDetails {
            hash_match: true,
            remote_match: Some(true),
            computed_hash,
            envelope_hash,
            remote_hash: Some(remote_data_item),
        })
    }

    /// Fetch a record by hash, retrying exactly once after the fixed
    /// delay.
    async fn fetch_with_retry(&self, hash_item: &str) -> Result<RecordResponse> {
        match self.client.record_by_hash(hash_item).await {
            Ok(record) => Ok(record),
            Err(first) => {
                warn!(
                    "remote record fetch failed ({}); retrying in {:?}",
                    first, self.retry_delay
                );
                tokio::time::sleep(self.retry_delay).await;
                self.client.record_by_hash(hash_item).await
            }
        }
    }
}
