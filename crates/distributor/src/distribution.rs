//! Distribution bundles: a root plus one claim per entitlement

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use airdrop_core::{Address, Digest, Entitlement, Snapshot};
use airdrop_merkle::{MerkleError, MerkleProof, MerkleTree, PairingMode};

/// Errors raised while generating, auditing, or storing bundles
#[derive(Debug, Error)]
pub enum DistributionError {
    /// Tree construction or proof generation failed
    #[error(transparent)]
    Merkle(#[from] MerkleError),
    /// Bundle file could not be read or written
    #[error("failed to read or write bundle: {0}")]
    Io(#[from] std::io::Error),
    /// Bundle file is not valid bundle JSON
    #[error("malformed bundle JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A claim's proof does not check out against the bundle root
    #[error("claim {index} does not verify against the bundle root")]
    ClaimVerificationFailed { index: u32 },
    /// Bundle structure is internally inconsistent
    #[error("malformed bundle: {0}")]
    MalformedBundle(&'static str),
}

/// One entitlement with everything needed to claim it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The committed record
    #[serde(flatten)]
    pub entitlement: Entitlement,
    /// Leaf position in the committed list
    pub index: u32,
    /// Inclusion proof against the bundle root
    pub proof: MerkleProof,
}

/// A complete airdrop artifact: the commitment plus every claim under it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Commitment over the snapshot
    pub root: Digest,
    /// Pairing mode the tree was built with
    pub mode: PairingMode,
    /// One claim per snapshot entry, in snapshot order
    pub claims: Vec<Claim>,
}

impl Distribution {
    /// Build the tree once and derive a proof for every entry
    pub fn generate(snapshot: &Snapshot, mode: PairingMode) -> Result<Self, DistributionError> {
        let tree = MerkleTree::build(snapshot.entries(), mode)?;
        let root = tree.root();

        let mut claims = Vec::with_capacity(snapshot.len());
        for (index, entitlement) in snapshot.entries().iter().enumerate() {
            claims.push(Claim {
                entitlement: *entitlement,
                index: index as u32,
                proof: tree.proof_at(index)?,
            });
        }

        info!(%root, claims = claims.len(), %mode, "generated distribution bundle");

        Ok(Self { root, mode, claims })
    }

    /// First claim granted to `address`, if any
    pub fn claim_for(&self, address: Address) -> Option<&Claim> {
        self.claims
            .iter()
            .find(|claim| claim.entitlement.address == address)
    }

    /// Number of claims in the bundle
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Re-verify every claim against the bundle root
    ///
    /// Claim indices must form a permutation of `0..len`; every proof must
    /// check out. Run this before publishing a bundle and after loading an
    /// untrusted one.
    pub fn audit(&self) -> Result<(), DistributionError> {
        if self.claims.is_empty() {
            return Err(DistributionError::MalformedBundle("bundle has no claims"));
        }

        let mut seen = vec![false; self.claims.len()];
        for claim in &self.claims {
            let slot = seen
                .get_mut(claim.index as usize)
                .ok_or(DistributionError::MalformedBundle(
                    "claim index out of range",
                ))?;
            if *slot {
                return Err(DistributionError::MalformedBundle("duplicate claim index"));
            }
            *slot = true;

            if !claim.proof.verify(&self.root, &claim.entitlement) {
                return Err(DistributionError::ClaimVerificationFailed { index: claim.index });
            }
        }

        Ok(())
    }

    /// Write the bundle as pretty-printed JSON
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), DistributionError> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Load a bundle written by [`Distribution::write_json`]
    pub fn read_json(path: impl AsRef<Path>) -> Result<Self, DistributionError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
