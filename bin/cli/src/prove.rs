use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use airdrop_core::{Address, Entitlement, Snapshot, U256};
use airdrop_distributor::Claim;
use airdrop_merkle::{MerkleError, MerkleTree, PairingMode};

#[derive(Parser)]
#[command(name = "prove")]
#[command(about = "Generate an inclusion proof for one entitlement", long_about = None)]
pub struct Cli {
    /// Snapshot JSON file (array of {address, amount})
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Recipient address (0x-prefixed hex)
    #[arg(short, long)]
    address: Address,

    /// Amount owed (decimal or 0x-prefixed hex)
    #[arg(long)]
    amount: U256,

    /// Pairing mode for the tree
    #[arg(short, long, default_value_t = PairingMode::Sorted)]
    pairing: PairingMode,

    /// Write the claim JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: Cli) -> Result<()> {
    let snapshot = Snapshot::load(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;

    let entitlement = Entitlement::new(args.address, args.amount);
    let index = snapshot
        .position_of(&entitlement)
        .ok_or(MerkleError::EntitlementNotFound {
            address: entitlement.address,
            amount: entitlement.amount,
        })?;

    let tree = MerkleTree::build(snapshot.entries(), args.pairing)?;
    let claim = Claim {
        entitlement,
        index: index as u32,
        proof: tree.proof_at(index)?,
    };

    let json = serde_json::to_string_pretty(&claim)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("writing claim {}", path.display()))?;
            info!(root = %tree.root(), index, "claim written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
