use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use airdrop_core::Snapshot;
use airdrop_distributor::Distribution;
use airdrop_merkle::PairingMode;

#[derive(Parser)]
#[command(name = "generate")]
#[command(about = "Generate a full distribution bundle for a snapshot", long_about = None)]
pub struct Cli {
    /// Snapshot JSON file (array of {address, amount})
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Where to write the bundle JSON
    #[arg(short, long)]
    output: PathBuf,

    /// Pairing mode for the tree
    #[arg(short, long, default_value_t = PairingMode::Sorted)]
    pairing: PairingMode,
}

pub fn run(args: Cli) -> Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;

    let bundle = Distribution::generate(&snapshot, args.pairing)?;
    bundle.audit()?;
    bundle
        .write_json(&args.output)
        .with_context(|| format!("writing bundle {}", args.output.display()))?;

    info!(claims = bundle.len(), "bundle written to {}", args.output.display());
    println!("{}", bundle.root);
    Ok(())
}
