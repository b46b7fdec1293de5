//! Ledger service HTTP client.
//!
//! One method per service endpoint, all stateless request/response
//! pairs. Non-2xx statuses become [`ClientError::Status`] carrying the
//! code and raw body text; bodies that fail to parse become
//! [`ClientError::Decode`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::{
    validate_data_type, DEFAULT_DATA_TYPE, LEDGER_HOST, RECORD_BY_HASH_ROUTE, SUBMIT_HASH_ROUTE,
};
use crate::error::{ClientError, Result};
use crate::types::{
    ApiResponse, ComputeHashRequest, DatabaseQuery, GenerateMerkleProofRequest, HashVerifyRequest,
    RecordResponse, SingleHashRequest, SubmitResponse, TableBrowseRequest, VerifyMerkleProofRequest,
};

/// Client for the ledger service.
///
/// Stateless apart from the underlying connection pool; cheap to clone
/// and safe to share across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use notary_client::LedgerClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = LedgerClient::new();
///     let record = client.record_by_hash("c5d24601...").await?;
///     println!("recorded item: {}", record.data.data_item_hex);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LedgerClient {
    http: reqwest::Client,
    base_url: String,
}

impl LedgerClient {
    /// Create a client against the default ledger host.
    pub fn new() -> Self {
        Self::with_base_url(LEDGER_HOST)
    }

    /// Create a client against a custom base URL (staging deployments,
    /// mock servers in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Submit a hash for notarization.
    ///
    /// `data_type` defaults to [`DEFAULT_DATA_TYPE`] and is validated
    /// (64 hex chars) before any network I/O.
    pub async fn submit_hash(
        &self,
        data_item: &str,
        data_type: Option<&str>,
    ) -> Result<SubmitResponse> {
        let data_type = data_type.unwrap_or(DEFAULT_DATA_TYPE);
        validate_data_type(data_type)?;

        let body = SingleHashRequest {
            data_type: data_type.to_string(),
            data_item: data_item.to_string(),
        };
        self.post_json(SUBMIT_HASH_ROUTE, &body).await
    }

    /// Fetch a recorded entry by hash.
    pub async fn record_by_hash(&self, hash_item: &str) -> Result<RecordResponse> {
        self.get_with_query(RECORD_BY_HASH_ROUTE, &[("hash_item", hash_item)])
            .await
    }

    // Database operations

    /// Query recorded hashes with filters and pagination.
    pub async fn query_hashes(&self, query: &DatabaseQuery) -> Result<ApiResponse> {
        self.post_json("/api/database/query", query).await
    }

    /// Fetch aggregate database statistics.
    pub async fn database_stats(&self) -> Result<ApiResponse> {
        self.get_with_query("/api/database/stats", &[]).await
    }

    /// Fetch the most recent records.
    pub async fn latest_hashes(&self, limit: u32) -> Result<ApiResponse> {
        self.get_with_query("/api/database/latest", &[("limit", &limit.to_string())])
            .await
    }

    /// List the ledger's tables.
    pub async fn tables(&self) -> Result<ApiResponse> {
        self.get_with_query("/api/database/tables", &[]).await
    }

    /// Fetch column metadata for a table.
    pub async fn table_schema(&self, table_name: &str) -> Result<ApiResponse> {
        self.get_with_query("/api/database/schema", &[("table", table_name)])
            .await
    }

    /// Browse table rows with pagination and optional search.
    pub async fn browse_table(&self, request: &TableBrowseRequest) -> Result<ApiResponse> {
        self.post_json("/api/database/browse", request).await
    }

    /// Fetch a record by UUID.
    pub async fn record(&self, uuid: &str) -> Result<ApiResponse> {
        self.get_with_query("/api/database/record", &[("uuid", uuid)])
            .await
    }

    /// Fetch a record by UUID including its predecessor hash.
    pub async fn record_with_prev_hash(&self, uuid: &str) -> Result<ApiResponse> {
        self.get_with_query("/api/database/record-with-prev", &[("uuid", uuid)])
            .await
    }

    // Hash operations

    /// Ask the service to re-compute a record hash from its parts.
    pub async fn verify_hash(&self, request: &HashVerifyRequest) -> Result<ApiResponse> {
        self.post_json("/api/verify-hash", request).await
    }

    /// Ask the service to hash a pre-assembled hex input.
    pub async fn compute_hash_from_hex(&self, request: &ComputeHashRequest) -> Result<ApiResponse> {
        self.post_json("/api/compute-hash-from-hex", request).await
    }

    /// Raw pass-through to the submit route, returning the generic
    /// response envelope instead of the typed [`SubmitResponse`].
    pub async fn submit_single(&self, request: &SingleHashRequest) -> Result<ApiResponse> {
        self.post_json(SUBMIT_HASH_ROUTE, request).await
    }

    // Merkle proof operations

    /// Generate an inclusion proof for a recorded hash.
    pub async fn generate_merkle_proof(
        &self,
        request: &GenerateMerkleProofRequest,
    ) -> Result<ApiResponse> {
        self.post_json("/api/merkle/generate-proof", request).await
    }

    /// Verify an inclusion proof against the ledger's stored root.
    pub async fn verify_merkle_proof(
        &self,
        request: &VerifyMerkleProofRequest,
    ) -> Result<ApiResponse> {
        self.post_json("/api/merkle/verify-proof", request).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        route: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(route);
        debug!("GET {}", url);
        let response = self.http.get(&url).query(query).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        route: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(route);
        debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for LedgerClient {
    fn default() -> Self {
        Self::new()
    }
}
