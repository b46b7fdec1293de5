//! Record command implementation.

use clap::Args;

use crate::commands::{client_for, report_error};
use crate::output;

/// Arguments for the record command.
#[derive(Args)]
pub struct RecordArgs {
    /// Hash of the recorded entry (64 hex characters)
    pub hash: String,

    /// Ledger base URL (overrides the default host)
    #[arg(long)]
    pub ledger_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the record command.
pub async fn run(args: RecordArgs) -> i32 {
    let client = client_for(args.ledger_url.as_deref());

    match client.record_by_hash(&args.hash).await {
        Ok(record) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&record).unwrap());
            } else {
                output::success("Record found");
                output::kv("Data item", &record.data.data_item_hex);
                if let Some(timestamp) = &record.data.timestamp {
                    output::kv("Recorded at", timestamp);
                }
            }
            0
        }
        Err(e) => {
            report_error(args.json, &format!("Record lookup failed: {}", e));
            1
        }
    }
}
