//! Notary CLI
//!
//! Terminal-first interface for hashing data, notarizing it with the
//! ledger service, and re-verifying attestation envelopes.

mod commands;
mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "notary")]
#[command(version = "0.1.0")]
#[command(about = "Notary - hash, notarize, and verify data", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash text locally (no network)
    Hash(commands::hash::HashArgs),

    /// Hash text and submit it to the ledger for notarization
    Submit(commands::submit::SubmitArgs),

    /// Fetch a recorded ledger entry by hash
    Record(commands::record::RecordArgs),

    /// Verify an attestation envelope (JSON file)
    Verify(commands::verify::VerifyArgs),

    /// Show ledger database statistics
    Stats(commands::stats::StatsArgs),

    /// Show the most recently recorded hashes
    Latest(commands::latest::LatestArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Hash(args) => commands::hash::run(args),
        Commands::Submit(args) => commands::submit::run(args).await,
        Commands::Record(args) => commands::record::run(args).await,
        Commands::Verify(args) => commands::verify::run(args).await,
        Commands::Stats(args) => commands::stats::run(args).await,
        Commands::Latest(args) => commands::latest::run(args).await,
    };

    std::process::exit(exit_code);
}
