//! Submit command implementation.

use clap::Args;

use crate::commands::{client_for, report_error};
use crate::output;

/// Arguments for the submit command.
#[derive(Args)]
pub struct SubmitArgs {
    /// Text to hash and submit for notarization
    pub text: String,

    /// Custom data_type tag (64 hex characters)
    #[arg(long)]
    pub data_type: Option<String>,

    /// Ledger base URL (overrides the default host)
    #[arg(long)]
    pub ledger_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the submit command.
pub async fn run(args: SubmitArgs) -> i32 {
    let client = client_for(args.ledger_url.as_deref());

    if !args.json {
        output::info(&format!("Submitting to {}...", client.base_url()));
    }

    match client
        .prove_str(&args.text, args.data_type.as_deref())
        .await
    {
        Ok(response) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response).unwrap());
            } else {
                output::success("Hash submitted for notarization");
                output::kv("Recorded hash", &response.data.computed_hash_hex);
            }
            0
        }
        Err(e) => {
            report_error(args.json, &format!("Submission failed: {}", e));
            1
        }
    }
}
