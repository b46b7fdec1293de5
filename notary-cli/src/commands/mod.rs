//! Command implementations.

pub mod hash;
pub mod latest;
pub mod record;
pub mod stats;
pub mod submit;
pub mod verify;

use notary_client::LedgerClient;

/// Client against the default host, or a caller-supplied override.
pub(crate) fn client_for(ledger_url: Option<&str>) -> LedgerClient {
    match ledger_url {
        Some(url) => LedgerClient::with_base_url(url),
        None => LedgerClient::new(),
    }
}

/// Print an error the way the command's output mode expects.
pub(crate) fn report_error(json: bool, message: &str) {
    if json {
        println!(
            "{}",
            serde_json::json!({"success": false, "error": message})
        );
    } else {
        crate::output::error(message);
    }
}
