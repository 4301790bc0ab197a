//! Inclusion proofs and stateless verification

use serde::{Deserialize, Serialize};

use airdrop_core::{Digest, Entitlement};

use crate::hasher::Keccak256Hasher;

/// Sibling-order addressing carried inside a proof
///
/// A proof states its own addressing, so a verifier can never pair
/// witnesses under the wrong convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofPath {
    /// Packed orientation bits, least significant bit first, one bit per
    /// witness; a set bit means the witness hashes on the left
    ///
    /// The `u64` caps proofs at 64 paired levels, enough for any tree
    /// that fits in memory.
    Bits(u64),
    /// No orientation data; every pair hashes the smaller digest first
    Sorted,
}

/// Inclusion proof for a single entitlement
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Sibling digests, leaf level first
    pub witnesses: Vec<Digest>,
    /// How each witness pairs with the running digest
    pub path: ProofPath,
}

impl MerkleProof {
    /// Recompute the root this proof commits `claim` to
    pub fn compute_root(&self, claim: &Entitlement) -> Digest {
        let mut node = Keccak256Hasher::hash_leaf(claim);

        match self.path {
            ProofPath::Bits(mut bits) => {
                for witness in &self.witnesses {
                    node = if bits & 1 == 1 {
                        Keccak256Hasher::hash_node(witness, &node)
                    } else {
                        Keccak256Hasher::hash_node(&node, witness)
                    };
                    bits >>= 1;
                }
            }
            ProofPath::Sorted => {
                for witness in &self.witnesses {
                    node = if node <= *witness {
                        Keccak256Hasher::hash_node(&node, witness)
                    } else {
                        Keccak256Hasher::hash_node(witness, &node)
                    };
                }
            }
        }

        node
    }

    /// Check this proof against `root`
    ///
    /// Total over arbitrary input: a wrong claim, tampered witnesses, or
    /// stray path bits all land in the `false` branch, never an error.
    pub fn verify(&self, root: &Digest, claim: &Entitlement) -> bool {
        self.compute_root(claim) == *root
    }

    /// Number of witnesses
    pub fn len(&self) -> usize {
        self.witnesses.len()
    }

    /// True only for the single-leaf tree's proof
    pub fn is_empty(&self) -> bool {
        self.witnesses.is_empty()
    }
}
