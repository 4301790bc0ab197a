//! Shared types for the airdrop toolkit
//!
//! This crate contains the value types shared between:
//! - The Merkle commitment crate
//! - The distribution bundle generator
//! - The CLI

pub mod snapshot;
pub mod types;

pub use snapshot::{Snapshot, SnapshotError};
pub use types::{Address, Digest, Entitlement, ParseDigestError, U256};
