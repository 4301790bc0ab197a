use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use airdrop_core::Snapshot;
use airdrop_merkle::{merkle_root, PairingMode};

#[derive(Parser)]
#[command(name = "root")]
#[command(about = "Compute the Merkle root of a snapshot", long_about = None)]
pub struct Cli {
    /// Snapshot JSON file (array of {address, amount})
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Pairing mode for the tree
    #[arg(short, long, default_value_t = PairingMode::Sorted)]
    pairing: PairingMode,
}

pub fn run(args: Cli) -> Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;

    let root = merkle_root(snapshot.entries(), args.pairing)?;
    info!(entries = snapshot.len(), pairing = %args.pairing, "snapshot committed");

    println!("{root}");
    Ok(())
}
