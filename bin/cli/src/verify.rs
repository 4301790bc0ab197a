use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use airdrop_core::Digest;
use airdrop_distributor::Claim;

#[derive(Parser)]
#[command(name = "verify")]
#[command(about = "Check a claim file against a Merkle root", long_about = None)]
pub struct Cli {
    /// The committed root (0x-prefixed hex)
    #[arg(short, long)]
    root: Digest,

    /// Claim JSON file produced by `prove`
    #[arg(short, long)]
    claim: PathBuf,
}

pub fn run(args: Cli) -> Result<()> {
    let raw = fs::read_to_string(&args.claim)
        .with_context(|| format!("reading claim {}", args.claim.display()))?;
    let claim: Claim = serde_json::from_str(&raw).context("malformed claim JSON")?;

    if claim.proof.verify(&args.root, &claim.entitlement) {
        println!("valid");
    } else {
        println!("invalid");
        std::process::exit(1);
    }

    Ok(())
}
