//! Distribution bundle generation and auditing
//!
//! Turns an entitlement snapshot into the artifact an airdrop hands to its
//! claim front end: the committed root plus one ready-to-submit proof per
//! record.

pub mod distribution;

pub use distribution::{Claim, Distribution, DistributionError};
