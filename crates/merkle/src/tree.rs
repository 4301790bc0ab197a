//! Merkle tree construction and proof generation

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use airdrop_core::{Digest, Entitlement};

use crate::error::MerkleError;
use crate::hasher::Keccak256Hasher;
use crate::proof::{MerkleProof, ProofPath};

/// How the two children of a node are ordered before hashing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingMode {
    /// Children hash in level order; proofs carry packed orientation bits
    Positional,
    /// The smaller digest hashes first; proofs carry no orientation bits
    #[default]
    Sorted,
}

impl PairingMode {
    /// Hash a sibling pair under this mode
    fn hash_pair(self, a: &Digest, b: &Digest) -> Digest {
        match self {
            Self::Positional => Keccak256Hasher::hash_node(a, b),
            Self::Sorted => {
                if a <= b {
                    Keccak256Hasher::hash_node(a, b)
                } else {
                    Keccak256Hasher::hash_node(b, a)
                }
            }
        }
    }
}

impl fmt::Display for PairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional => f.write_str("positional"),
            Self::Sorted => f.write_str("sorted"),
        }
    }
}

impl FromStr for PairingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positional" => Ok(Self::Positional),
            "sorted" => Ok(Self::Sorted),
            other => Err(format!(
                "unknown pairing mode `{other}` (expected `sorted` or `positional`)"
            )),
        }
    }
}

/// Binary Merkle tree over an ordered entitlement list
///
/// Level 0 holds the leaf digests in input order; each higher level hashes
/// adjacent pairs. An odd trailing node is carried up unchanged, never
/// duplicated. The top level always holds exactly one node, the root.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    mode: PairingMode,
    levels: Vec<Vec<Digest>>,
}

impl MerkleTree {
    /// Build a tree over `entries`, hashing each into its leaf
    pub fn build(entries: &[Entitlement], mode: PairingMode) -> Result<Self, MerkleError> {
        #[cfg(feature = "parallel")]
        let leaves: Vec<Digest> = entries.par_iter().map(Keccak256Hasher::hash_leaf).collect();
        #[cfg(not(feature = "parallel"))]
        let leaves: Vec<Digest> = entries.iter().map(Keccak256Hasher::hash_leaf).collect();

        Self::from_leaves(leaves, mode)
    }

    /// Build a tree over precomputed leaf digests
    pub fn from_leaves(leaves: Vec<Digest>, mode: PairingMode) -> Result<Self, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let mut levels = Vec::new();
        let mut current = leaves;
        while current.len() > 1 {
            let next = hash_level(&current, mode);
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Ok(Self { mode, levels })
    }

    /// Root digest of the tree
    pub fn root(&self) -> Digest {
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of committed leaves
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of hashing levels between the leaves and the root
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Pairing mode the tree was built with
    pub fn mode(&self) -> PairingMode {
        self.mode
    }

    /// Inclusion proof for the leaf at `index`
    ///
    /// Witnesses run from the leaf level upward. A level where the node is
    /// the odd trailing element contributes no witness and no path bit:
    /// the verifier carries the running digest up exactly like the builder
    /// did.
    pub fn proof_at(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut witnesses = Vec::with_capacity(self.depth());
        let mut path_bits: u64 = 0;
        let mut position = index;

        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = position ^ 1;
            if sibling < level.len() {
                if position & 1 == 1 {
                    // this node is the right child, the witness hashes on the left
                    path_bits |= 1 << witnesses.len();
                }
                witnesses.push(level[sibling]);
            }
            position /= 2;
        }

        let path = match self.mode {
            PairingMode::Positional => ProofPath::Bits(path_bits),
            PairingMode::Sorted => ProofPath::Sorted,
        };

        Ok(MerkleProof { witnesses, path })
    }
}

/// Hash one level into the next, carrying an odd trailing node up unchanged
fn hash_level(nodes: &[Digest], mode: PairingMode) -> Vec<Digest> {
    nodes
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => mode.hash_pair(left, right),
            _ => pair[0],
        })
        .collect()
}
