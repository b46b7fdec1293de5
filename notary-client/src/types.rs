//! Wire types for the ledger service's JSON bodies.
//!
//! Response types keep a flattened `extra` map wherever the service is
//! known to return more fields than the SDK interprets, so stored
//! responses survive round-trips verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response from the submit-hash endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub data: SubmitResponseData,
}

/// Payload of a submit-hash response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponseData {
    /// The hash the ledger recorded for this submission.
    pub computed_hash_hex: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from the fetch-record-by-hash endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub data: RecordData,
}

/// Payload of a record fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordData {
    /// Hex of the data item the record was created from.
    pub data_item_hex: String,

    /// When the record was written, if the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Generic response envelope used by the database, hash, and Merkle
/// endpoint families.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// Database types

/// Filter and pagination parameters for the record query endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_timestamp: Option<String>,
    pub limit: u32,
    pub offset: u32,
    /// `ts_asc` or `ts_desc`
    pub order_by: String,
}

/// A recorded hash entry as returned by the query endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashRecord {
    pub timestamp: String,
    pub data_type: String,
    pub data_item: String,
    pub hash_type: String,
    pub hash_item: String,
}

/// Aggregate statistics over the ledger database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseStats {
    pub total_hashes: i64,
    pub count_by_type: std::collections::HashMap<String, i64>,
    pub min_timestamp: String,
    pub max_timestamp: String,
    pub timestamp_range: String,
}

/// Column metadata for a ledger table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

/// Pagination/search parameters for browsing a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableBrowseRequest {
    pub table_name: String,
    pub offset: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_column: Option<String>,
}

/// A full ledger record, keyed by UUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseRecord {
    pub data_type: String,
    pub data_item_hex: String,
    pub uuid_hex: String,
    pub hash_item_hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_hash_hex: Option<String>,
    pub hash_type: String,
    pub timestamp: String,
}

// Hash verification types

/// Inputs for the server-side hash re-computation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashVerifyRequest {
    pub prev_hash: String,
    pub data_type: String,
    pub data_item: String,
    pub uuid: String,
    /// `blake3` or `xxh3`
    pub hash_type: String,
}

/// Result of a server-side hash computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashVerifyResult {
    pub computed_hash: String,
    pub hash_input_hex: String,
}

/// Inputs for hashing a pre-assembled hex string server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeHashRequest {
    pub hash_input_hex: String,
    pub hash_type: String,
}

/// Raw submit-route request body (`data_type` and `data_item` are each
/// 64 hex chars).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleHashRequest {
    pub data_type: String,
    pub data_item: String,
}

// Merkle proof types

/// Inputs for generating a Merkle inclusion proof.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateMerkleProofRequest {
    pub hash_item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// A Merkle inclusion proof as produced by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerkleProof {
    pub target_hash_hex: String,
    pub data_type: String,
    pub timestamp: String,
    pub position: i64,
    pub root_hash_hex: String,
    pub proof_hashes_hex: Vec<String>,
    pub levels: u32,
    pub stored_root_hex: String,
    pub generated_at: String,
    pub proof_format: String,
}

/// Inputs for verifying a Merkle proof server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyMerkleProofRequest {
    pub target_hash_hex: String,
    pub proof_hashes_hex: Vec<String>,
    pub levels: u32,
    pub position: i64,
    pub root_hash_hex: String,
}

/// Outcome of a server-side Merkle proof verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerkleProofVerificationResult {
    pub valid: bool,
    pub message: String,
    pub computed_root_hex: String,
    pub stored_root_hex: String,
    pub target_hash_hex: String,
    pub position: i64,
}
