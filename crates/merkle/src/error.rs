//! Merkle tree errors

use airdrop_core::{Address, U256};
use thiserror::Error;

/// Errors raised while building trees or generating proofs
///
/// Verification never returns these; a proof that does not check out is
/// simply reported as invalid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// A commitment over zero entitlements is undefined
    #[error("cannot build a merkle tree over an empty entitlement list")]
    EmptyInput,
    /// Proof requested for a record absent from the committed list
    #[error("entitlement not found: address {address}, amount {amount}")]
    EntitlementNotFound {
        /// Address of the missing record
        address: Address,
        /// Amount of the missing record
        amount: U256,
    },
    /// Leaf index past the end of the tree
    #[error("leaf index {index} out of range for a tree with {leaf_count} leaves")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of leaves in the tree
        leaf_count: usize,
    },
}
