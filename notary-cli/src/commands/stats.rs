//! Stats command implementation.

use clap::Args;

use crate::commands::{client_for, report_error};
use crate::output;

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {
    /// Ledger base URL (overrides the default host)
    #[arg(long)]
    pub ledger_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the stats command.
pub async fn run(args: StatsArgs) -> i32 {
    let client = client_for(args.ledger_url.as_deref());

    match client.database_stats().await {
        Ok(response) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response).unwrap());
            } else if let Some(data) = &response.data {
                output::success("Ledger statistics");
                println!("{}", serde_json::to_string_pretty(data).unwrap());
            } else {
                output::error(response.error.as_deref().unwrap_or("No data returned"));
                return 1;
            }
            0
        }
        Err(e) => {
            report_error(args.json, &format!("Stats request failed: {}", e));
            1
        }
    }
}
