//! Hash command implementation.

use clap::Args;

use notary_core::{keccak256_str, sha256_str};

/// Arguments for the hash command.
#[derive(Args)]
pub struct HashArgs {
    /// Text to hash
    pub text: String,

    /// Use SHA-256 instead of the default Keccak-256
    #[arg(long)]
    pub sha256: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the hash command.
pub fn run(args: HashArgs) -> i32 {
    let (algorithm, digest) = if args.sha256 {
        ("sha256", sha256_str(&args.text))
    } else {
        ("keccak256", keccak256_str(&args.text))
    };

    if args.json {
        println!(
            "{}",
            serde_json::json!({"algorithm": algorithm, "digest": digest})
        );
    } else {
        println!("{}", digest);
    }
    0
}
