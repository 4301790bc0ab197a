//! Keccak256 hashing for leaves and internal nodes

use tiny_keccak::{Hasher, Keccak};

use airdrop_core::{Digest, Entitlement};

/// Domain prefix byte for leaf digests
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain prefix byte for internal node digests
pub const NODE_PREFIX: u8 = 0x01;

/// Keccak256 hasher with leaf/node domain separation
///
/// The prefix byte keeps the two digest domains disjoint, so an internal
/// node can never be replayed as a leaf (and vice versa).
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    /// Hash an entitlement into its leaf digest
    ///
    /// Input layout: `0x00 ‖ address (20 bytes) ‖ amount (32 bytes, big endian)`.
    pub fn hash_leaf(entitlement: &Entitlement) -> Digest {
        let mut hasher = Keccak::v256();
        hasher.update(&[LEAF_PREFIX]);
        hasher.update(entitlement.address.as_slice());
        hasher.update(&entitlement.amount.to_be_bytes::<32>());
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        Digest::new(output)
    }

    /// Hash two child digests into their parent
    ///
    /// Input layout: `0x01 ‖ left (32 bytes) ‖ right (32 bytes)`. Argument
    /// order is significant; callers pick it per pairing mode.
    pub fn hash_node(left: &Digest, right: &Digest) -> Digest {
        let mut hasher = Keccak::v256();
        hasher.update(&[NODE_PREFIX]);
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        Digest::new(output)
    }
}
