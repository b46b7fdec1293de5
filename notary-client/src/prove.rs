//! Hash-then-submit convenience calls.

use notary_core::hash::{keccak256, keccak256_str};

use crate::api::LedgerClient;
use crate::error::Result;
use crate::types::SubmitResponse;

impl LedgerClient {
    /// Hash a byte payload with Keccak-256 and submit the digest for
    /// notarization. `data_type` defaults to the SDK tag.
    pub async fn prove_data(
        &self,
        data: &[u8],
        data_type: Option<&str>,
    ) -> Result<SubmitResponse> {
        self.submit_hash(&keccak256(data), data_type).await
    }

    /// Hash a UTF-8 string with Keccak-256 and submit the digest for
    /// notarization. `data_type` defaults to the SDK tag.
    pub async fn prove_str(&self, s: &str, data_type: Option<&str>) -> Result<SubmitResponse> {
        self.submit_hash(&keccak256_str(s), data_type).await
    }
}
