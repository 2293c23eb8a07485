//! Per-length and whole-run results.

use rtp_index::IndexStrategy;
use serde::{Deserialize, Serialize};

/// Outcome of counting one digit length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthResult {
    pub digits: u32,
    /// Right-truncatable primes found.
    pub truncatable: u64,
    /// Primes of this length examined.
    pub scanned: u64,
    /// Largest right-truncatable prime of this length.
    pub largest: Option<u64>,
}

/// A [`LengthResult`] placed in the context of a full run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthReport {
    pub digits: u32,
    pub truncatable: u64,
    pub scanned: u64,
    /// Running total of right-truncatable primes through this length.
    pub cumulative: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primes: Option<Vec<u64>>,
}

/// Everything a survey run produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub max_digits: u32,
    /// Strategy actually used for the membership index.
    pub strategy: IndexStrategy,
    /// Primes generated up to `10^max_digits - 1`.
    pub prime_count: u64,
    pub index_bytes: u64,
    /// One entry per length, ascending.
    pub lengths: Vec<LengthReport>,
    pub total: u64,
    /// Largest right-truncatable prime found at any length.
    pub largest: Option<u64>,
}

impl SurveyReport {
    /// Assemble a report from per-length results in any order.
    ///
    /// `listings` pairs a length with its qualifying primes when listing was
    /// requested.
    pub fn assemble(
        max_digits: u32,
        strategy: IndexStrategy,
        prime_count: u64,
        index_bytes: u64,
        mut results: Vec<LengthResult>,
        mut listings: Vec<(u32, Vec<u64>)>,
    ) -> Self {
        results.sort_by_key(|r| r.digits);
        let mut cumulative = 0u64;
        let mut largest = None;
        let lengths = results
            .iter()
            .map(|r| {
                cumulative += r.truncatable;
                largest = r.largest.or(largest);
                let primes = listings
                    .iter()
                    .position(|(digits, _)| *digits == r.digits)
                    .map(|at| listings.swap_remove(at).1);
                LengthReport {
                    digits: r.digits,
                    truncatable: r.truncatable,
                    scanned: r.scanned,
                    cumulative,
                    primes,
                }
            })
            .collect();
        Self {
            max_digits,
            strategy,
            prime_count,
            index_bytes,
            lengths,
            total: cumulative,
            largest,
        }
    }

    /// Report for a single length, if it was counted.
    pub fn length(&self, digits: u32) -> Option<&LengthReport> {
        self.lengths.iter().find(|l| l.digits == digits)
    }

    /// Right-truncatable primes with at most `digits` digits.
    pub fn total_through(&self, digits: u32) -> u64 {
        self.lengths
            .iter()
            .filter(|l| l.digits <= digits)
            .map(|l| l.truncatable)
            .sum()
    }

    /// Lengths in descending order, as printed by the text report.
    pub fn descending(&self) -> impl Iterator<Item = &LengthReport> {
        self.lengths.iter().rev()
    }
}
