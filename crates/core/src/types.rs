//! Common types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use alloy_primitives::{Address, U256};

/// Errors raised while parsing a digest from its hex form
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseDigestError {
    /// Input was not valid hex
    #[error("invalid digest hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Input decoded to the wrong number of bytes
    #[error("digest must be 32 bytes, got {0}")]
    Length(usize),
}

/// A 32-byte Keccak256 digest
///
/// Ordered bytewise, which for big-endian hash output matches unsigned
/// numeric order. Serializes as a `0x`-prefixed hex string.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// The all-zero digest
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap raw digest bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Borrow the digest bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Unwrap into raw digest bytes
    pub const fn into_inner(self) -> [u8; 32] {
        self.0
    }

    /// Render as a `0x`-prefixed lowercase hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(raw)?;
        let bytes: [u8; 32] = decoded
            .try_into()
            .map_err(|rest: Vec<u8>| ParseDigestError::Length(rest.len()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One committed record: an address owed an amount
///
/// Equality is exact `(address, amount)` equality. Duplicate records are
/// legal and occupy distinct leaf positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    /// Recipient address
    pub address: Address,
    /// Amount owed, in base token units
    pub amount: U256,
}

impl Entitlement {
    pub fn new(address: Address, amount: U256) -> Self {
        Self { address, amount }
    }
}
