//! Verify command implementation.

use std::path::PathBuf;

use clap::Args;

use notary_client::Verifier;
use notary_core::Envelope;

use crate::commands::{client_for, report_error};
use crate::output;

/// Arguments for the verify command.
#[derive(Args)]
pub struct VerifyArgs {
    /// Path to the envelope JSON file
    pub envelope: PathBuf,

    /// Ledger base URL (overrides the default host)
    #[arg(long)]
    pub ledger_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the verify command.
pub async fn run(args: VerifyArgs) -> i32 {
    let raw = match std::fs::read_to_string(&args.envelope) {
        Ok(raw) => raw,
        Err(e) => {
            report_error(
                args.json,
                &format!("Cannot read {}: {}", args.envelope.display(), e),
            );
            return 1;
        }
    };

    let envelope: Envelope = match serde_json::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(e) => {
            report_error(args.json, &format!("Not a valid envelope: {}", e));
            return 1;
        }
    };

    let verifier = Verifier::new(client_for(args.ledger_url.as_deref()));
    let verdict = verifier.verify(&envelope).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict).unwrap());
    } else if verdict.valid {
        if verdict.remotely_verified() {
            output::success("Envelope verified against the remote ledger");
        } else {
            output::success("Envelope verified (local check only; no remote timestamp)");
        }
        if let Some(details) = &verdict.details {
            output::kv("Computed hash", &details.computed_hash);
            if let Some(remote) = &details.remote_hash {
                output::kv("Remote record", remote);
            }
        }
    } else {
        let reason = verdict
            .error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        output::error(&format!("Envelope invalid: {}", reason));
        if let Some(details) = &verdict.details {
            output::kv("Computed hash", &details.computed_hash);
            output::kv("Envelope hash", &details.envelope_hash);
        }
        output::hint("The payload may have been altered since it was attested.");
    }

    if verdict.valid {
        0
    } else {
        1
    }
}
