use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use airdrop_distributor::Distribution;

#[derive(Parser)]
#[command(name = "audit")]
#[command(about = "Re-verify every claim in a distribution bundle", long_about = None)]
pub struct Cli {
    /// Bundle JSON file produced by `generate`
    #[arg(short, long)]
    bundle: PathBuf,
}

pub fn run(args: Cli) -> Result<()> {
    let bundle = Distribution::read_json(&args.bundle)
        .with_context(|| format!("loading bundle {}", args.bundle.display()))?;

    bundle.audit()?;
    println!("ok: {} claims verify against {}", bundle.len(), bundle.root);
    Ok(())
}
