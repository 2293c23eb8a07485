use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use rtp_sieve::estimate_prime_count;

use crate::error::IndexError;

/// Default cap on the dense bitmap's footprint (2 GiB, enough for every
/// value below 1.7 · 10^10). Exceeding it is an allocation error.
pub const DEFAULT_DENSE_LIMIT_BYTES: u64 = 1 << 31;

/// Bytes per hashed bucket: the key plus one control byte.
pub const HASHED_ENTRY_BYTES: u64 = 9;

/// How prime membership is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStrategy {
    /// Whichever structure is smaller for the ceiling.
    #[default]
    Auto,
    /// One bit per integer up to the ceiling.
    Dense,
    /// Hash set over the primes only.
    Hashed,
}

impl IndexStrategy {
    /// Resolve `Auto` to a concrete strategy for the given ceiling.
    ///
    /// `Auto` picks the hash set only when its estimated footprint is
    /// smaller than the bitmap's. Concrete strategies are returned unchanged.
    pub fn resolve(self, ceiling: u64) -> IndexStrategy {
        match self {
            Self::Auto => {
                let dense = dense_bytes(ceiling);
                let hashed = hashed_bytes(ceiling);
                let chosen = if hashed < dense {
                    Self::Hashed
                } else {
                    Self::Dense
                };
                debug!(
                    ceiling,
                    dense,
                    hashed,
                    strategy = %chosen,
                    "resolved auto index strategy"
                );
                chosen
            }
            concrete => concrete,
        }
    }
}

impl fmt::Display for IndexStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Dense => write!(f, "dense"),
            Self::Hashed => write!(f, "hashed"),
        }
    }
}

impl FromStr for IndexStrategy {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dense" | "bitset" => Ok(Self::Dense),
            "hashed" | "hash" => Ok(Self::Hashed),
            other => Err(IndexError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Bytes needed for a bitmap covering `0..=ceiling`.
pub fn dense_bytes(ceiling: u64) -> u64 {
    ceiling / 8 + 1
}

/// Estimated bytes for a hash set holding every prime up to `ceiling`.
///
/// Buckets are a power of two kept at most 7/8 full.
pub fn hashed_bytes(ceiling: u64) -> u64 {
    let entries = estimate_prime_count(2, ceiling);
    let buckets = entries
        .saturating_mul(8)
        .div_ceil(7)
        .checked_next_power_of_two()
        .unwrap_or(u64::MAX);
    buckets.saturating_mul(HASHED_ENTRY_BYTES)
}
