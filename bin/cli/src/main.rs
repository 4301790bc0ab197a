//! Merkle airdrop command line tool
//!
//! Commits entitlement snapshots to a Merkle root, produces inclusion
//! proofs, and verifies them:
//! - `root`: print the commitment over a snapshot
//! - `prove`: produce one claim with its inclusion proof
//! - `verify`: check a claim file against a root
//! - `generate`: produce a full distribution bundle
//! - `audit`: re-verify a distribution bundle end to end

use clap::{Parser, Subcommand};

mod audit;
mod generate;
mod prove;
mod root;
mod verify;

#[derive(Parser)]
#[command(name = "airdrop")]
#[command(about = "Merkle commitment tools for token distributions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Root(root::Cli),
    Prove(prove::Cli),
    Verify(verify::Cli),
    Generate(generate::Cli),
    Audit(audit::Cli),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Root(args) => root::run(args)?,
        Commands::Prove(args) => prove::run(args)?,
        Commands::Verify(args) => verify::run(args)?,
        Commands::Generate(args) => generate::run(args)?,
        Commands::Audit(args) => audit::run(args)?,
    }

    Ok(())
}
