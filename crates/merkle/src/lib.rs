//! Merkle commitments over entitlement lists
//!
//! This crate builds Keccak256 Merkle trees over ordered
//! `(address, amount)` records, generates compact inclusion proofs, and
//! verifies them statelessly. Key properties:
//! - Domain separation: leaf and internal digests use distinct prefix
//!   bytes, so neither can be replayed as the other
//! - Odd trailing nodes carry up unchanged, never duplicated
//! - Two pairing modes: positional (packed orientation bits) and sorted
//!   (orientation-free), selected per tree

mod error;
mod hasher;
mod proof;
mod tree;

pub use error::MerkleError;
pub use hasher::{Keccak256Hasher, LEAF_PREFIX, NODE_PREFIX};
pub use proof::{MerkleProof, ProofPath};
pub use tree::{MerkleTree, PairingMode};

use airdrop_core::{Digest, Entitlement};

/// Root commitment over `entries`
pub fn merkle_root(entries: &[Entitlement], mode: PairingMode) -> Result<Digest, MerkleError> {
    Ok(MerkleTree::build(entries, mode)?.root())
}

/// Inclusion proof for `claim`
///
/// Binds to the first record equal to `claim`; duplicates further down the
/// list share its leaf digest and verify with the same proof.
pub fn merkle_proof(
    entries: &[Entitlement],
    claim: &Entitlement,
    mode: PairingMode,
) -> Result<MerkleProof, MerkleError> {
    let index = entries
        .iter()
        .position(|entry| entry == claim)
        .ok_or(MerkleError::EntitlementNotFound {
            address: claim.address,
            amount: claim.amount,
        })?;

    MerkleTree::build(entries, mode)?.proof_at(index)
}

/// Check `proof` against `root` for `claim`
pub fn verify_proof(root: &Digest, claim: &Entitlement, proof: &MerkleProof) -> bool {
    proof.verify(root, claim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdrop_core::{Address, U256};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const MODES: [PairingMode; 2] = [PairingMode::Positional, PairingMode::Sorted];

    fn entry(seed: u8, amount: u64) -> Entitlement {
        Entitlement::new(Address::from([seed; 20]), U256::from(amount))
    }

    fn entries(n: usize) -> Vec<Entitlement> {
        (0..n)
            .map(|i| entry(i as u8 + 1, (i as u64 + 1) * 100))
            .collect()
    }

    #[test]
    fn test_round_trip_every_leaf() {
        for mode in MODES {
            for n in [1, 2, 3, 7, 8] {
                let list = entries(n);
                let root = merkle_root(&list, mode).unwrap();
                for item in &list {
                    let proof = merkle_proof(&list, item, mode).unwrap();
                    assert!(
                        verify_proof(&root, item, &proof),
                        "{mode} proof failed for n={n}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_proof_rejects_other_entitlement() {
        for mode in MODES {
            let list = entries(4);
            let root = merkle_root(&list, mode).unwrap();
            let proof = merkle_proof(&list, &list[1], mode).unwrap();

            assert!(!verify_proof(&root, &list[2], &proof));

            // same address, wrong amount
            let inflated = Entitlement::new(list[1].address, U256::from(1_000_000u64));
            assert!(!verify_proof(&root, &inflated, &proof));
        }
    }

    #[test]
    fn test_empty_list_has_no_root() {
        for mode in MODES {
            assert_eq!(merkle_root(&[], mode).unwrap_err(), MerkleError::EmptyInput);
        }
    }

    #[test]
    fn test_missing_entitlement_has_no_proof() {
        let list = entries(3);
        let absent = entry(9, 900);
        assert_eq!(
            merkle_proof(&list, &absent, PairingMode::Sorted).unwrap_err(),
            MerkleError::EntitlementNotFound {
                address: absent.address,
                amount: absent.amount,
            }
        );
    }

    #[test]
    fn test_duplicate_binds_first_occurrence() {
        for mode in MODES {
            let duplicate = entry(1, 100);
            let list = vec![duplicate, entry(2, 200), duplicate];

            let tree = MerkleTree::build(&list, mode).unwrap();
            let proof = merkle_proof(&list, &duplicate, mode).unwrap();
            assert_eq!(proof, tree.proof_at(0).unwrap());
            assert!(verify_proof(&tree.root(), &duplicate, &proof));
        }
    }

    #[test]
    fn test_positional_root_depends_on_order() {
        let a = entry(1, 100);
        let b = entry(2, 200);
        let forward = merkle_root(&[a, b], PairingMode::Positional).unwrap();
        let reversed = merkle_root(&[b, a], PairingMode::Positional).unwrap();
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_sorted_pair_swap_commutes() {
        let a = entry(1, 100);
        let b = entry(2, 200);
        let forward = merkle_root(&[a, b], PairingMode::Sorted).unwrap();
        let swapped = merkle_root(&[b, a], PairingMode::Sorted).unwrap();
        assert_eq!(forward, swapped);
    }

    #[test]
    fn test_sorted_root_depends_on_cross_pair_order() {
        let list = entries(3);
        let rotated = vec![list[2], list[0], list[1]];
        let original = merkle_root(&list, PairingMode::Sorted).unwrap();
        let moved = merkle_root(&rotated, PairingMode::Sorted).unwrap();
        assert_ne!(original, moved);
    }

    #[test]
    fn test_modes_commit_to_different_roots() {
        // arrange the pair in reverse digest order so sorted pairing swaps it
        let a = entry(1, 100);
        let b = entry(2, 200);
        let (lo, hi) = if Keccak256Hasher::hash_leaf(&a) <= Keccak256Hasher::hash_leaf(&b) {
            (a, b)
        } else {
            (b, a)
        };
        let list = [hi, lo];

        let positional = merkle_root(&list, PairingMode::Positional).unwrap();
        let sorted = merkle_root(&list, PairingMode::Sorted).unwrap();
        assert_ne!(positional, sorted);

        // a proof generated under one mode fails against the other root
        let proof = merkle_proof(&list, &lo, PairingMode::Sorted).unwrap();
        assert!(!verify_proof(&positional, &lo, &proof));
    }

    #[test]
    fn test_tampered_witness_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        for mode in MODES {
            let list = entries(8);
            let root = merkle_root(&list, mode).unwrap();

            for item in &list {
                let mut proof = merkle_proof(&list, item, mode).unwrap();
                let target = rng.gen_range(0..proof.witnesses.len());
                let mut bytes = proof.witnesses[target].into_inner();
                bytes[rng.gen_range(0..32)] ^= 1 << rng.gen_range(0..8);
                proof.witnesses[target] = bytes.into();

                assert!(!verify_proof(&root, item, &proof));
            }
        }
    }

    #[test]
    fn test_tampered_path_bit_rejected() {
        let list = entries(4);
        let root = merkle_root(&list, PairingMode::Positional).unwrap();

        for item in &list {
            let proof = merkle_proof(&list, item, PairingMode::Positional).unwrap();
            // every proof in a 4-leaf tree consumes exactly two bits
            for flip in 0..proof.witnesses.len() {
                let tampered = match proof.path {
                    ProofPath::Bits(bits) => MerkleProof {
                        witnesses: proof.witnesses.clone(),
                        path: ProofPath::Bits(bits ^ (1 << flip)),
                    },
                    ProofPath::Sorted => unreachable!(),
                };
                assert!(!verify_proof(&root, item, &tampered));
            }
        }
    }

    #[test]
    fn test_truncated_proof_rejected() {
        for mode in MODES {
            let list = entries(8);
            let root = merkle_root(&list, mode).unwrap();
            let mut proof = merkle_proof(&list, &list[3], mode).unwrap();
            proof.witnesses.pop();
            assert!(!verify_proof(&root, &list[3], &proof));
        }
    }

    #[test]
    fn test_three_item_commitment_scenario() {
        // the middle record pairs at the leaf level and needs two
        // witnesses; the trailing record carries up and needs one
        let list = vec![entry(0xa, 100), entry(0xb, 200), entry(0xc, 150)];
        let root = merkle_root(&list, PairingMode::Positional).unwrap();

        let middle = merkle_proof(&list, &list[1], PairingMode::Positional).unwrap();
        assert_eq!(middle.len(), 2);
        let trailing = merkle_proof(&list, &list[2], PairingMode::Positional).unwrap();
        assert_eq!(trailing.len(), 1);

        for item in &list {
            let proof = merkle_proof(&list, item, PairingMode::Positional).unwrap();
            assert!(verify_proof(&root, item, &proof));
        }

        // the same records in a different order commit to a different root
        let permuted = vec![list[1], list[0], list[2]];
        let other_root = merkle_root(&permuted, PairingMode::Positional).unwrap();
        assert_ne!(root, other_root);
        assert!(!verify_proof(&other_root, &list[1], &middle));
    }
}
