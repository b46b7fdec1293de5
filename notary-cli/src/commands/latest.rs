//! Latest command implementation.

use clap::Args;

use crate::commands::{client_for, report_error};
use crate::output;

/// Arguments for the latest command.
#[derive(Args)]
pub struct LatestArgs {
    /// Number of records to fetch
    #[arg(short, long, default_value = "50")]
    pub limit: u32,

    /// Ledger base URL (overrides the default host)
    #[arg(long)]
    pub ledger_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the latest command.
pub async fn run(args: LatestArgs) -> i32 {
    let client = client_for(args.ledger_url.as_deref());

    match client.latest_hashes(args.limit).await {
        Ok(response) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response).unwrap());
            } else if let Some(data) = &response.data {
                output::success(&format!("Latest {} records", args.limit));
                println!("{}", serde_json::to_string_pretty(data).unwrap());
            } else {
                output::error(response.error.as_deref().unwrap_or("No data returned"));
                return 1;
            }
            0
        }
        Err(e) => {
            report_error(args.json, &format!("Latest request failed: {}", e));
            1
        }
    }
}
