//! Ledger service configuration.

use crate::error::{ClientError, Result};

/// Default base URL of the ledger service.
pub const LEDGER_HOST: &str = "https://ledger.notary.dev";

/// Route for submitting a single hash for notarization.
pub const SUBMIT_HASH_ROUTE: &str = "/api/grpc/single-hash";

/// Route for fetching a recorded entry by hash.
pub const RECORD_BY_HASH_ROUTE: &str = "/api/database/record-by-hash";

/// Default `data_type` tag: "notary_sdk" zero-padded to 32 bytes.
///
/// Used when a caller omits `data_type` on submission.
pub const DEFAULT_DATA_TYPE: &str =
    "6e6f746172795f73646b00000000000000000000000000000000000000000000";

/// Build a full ledger API URL from a route.
pub fn ledger_url(route: &str) -> String {
    format!("{}{}", LEDGER_HOST, route)
}

/// Validate a `data_type` tag: exactly 64 hex characters (32 bytes),
/// case-insensitive.
///
/// # Errors
///
/// [`ClientError::DataTypeLength`] for a wrong length,
/// [`ClientError::DataTypeCharset`] for a non-hex character.
pub fn validate_data_type(data_type: &str) -> Result<()> {
    if data_type.len() != 64 {
        return Err(ClientError::DataTypeLength(data_type.len()));
    }
    if !data_type.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ClientError::DataTypeCharset);
    }
    Ok(())
}
