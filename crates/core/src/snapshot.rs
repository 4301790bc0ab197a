//! Entitlement snapshots

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Address, Entitlement, U256};

/// Errors raised while loading a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file could not be read
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot file is not a valid entitlement array
    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered entitlement list
///
/// The file form is a plain JSON array of `{address, amount}` objects.
/// Order is preserved verbatim: leaf positions, and therefore the
/// commitment, depend on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: Vec<Entitlement>,
}

impl Snapshot {
    pub fn new(entries: Vec<Entitlement>) -> Self {
        Self { entries }
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a snapshot from its JSON form
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The entitlements, in committed order
    pub fn entries(&self) -> &[Entitlement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the first entry equal to `target`
    pub fn position_of(&self, target: &Entitlement) -> Option<usize> {
        self.entries.iter().position(|entry| entry == target)
    }

    /// All entries granted to `address`, in snapshot order
    pub fn entitlements_for<'a>(
        &'a self,
        address: Address,
    ) -> impl Iterator<Item = &'a Entitlement> {
        self.entries
            .iter()
            .filter(move |entry| entry.address == address)
    }

    /// Sum of all amounts, or `None` if the total overflows
    pub fn total_amount(&self) -> Option<U256> {
        self.entries
            .iter()
            .try_fold(U256::ZERO, |total, entry| total.checked_add(entry.amount))
    }
}
