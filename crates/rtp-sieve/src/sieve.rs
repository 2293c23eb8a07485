//! Segmented Sieve of Eratosthenes.
//!
//! Base primes up to `isqrt(max)` are sieved once, then the requested range
//! is swept in fixed-size segments so the working set stays bounded no
//! matter how wide the range is. Only the output buffer grows with the range.

use tracing::{debug, info};

use crate::error::{SieveError, SieveResult};
use crate::sequence::PrimeSequence;
use crate::traits::PrimeSource;

/// Default number of candidates sieved per segment.
pub const DEFAULT_SEGMENT_LEN: usize = 1 << 20;

/// Segmented sieve generator.
#[derive(Clone, Debug)]
pub struct SegmentedSieve {
    segment_len: usize,
    max_primes: u64,
}

impl Default for SegmentedSieve {
    fn default() -> Self {
        Self {
            segment_len: DEFAULT_SEGMENT_LEN,
            max_primes: u64::MAX,
        }
    }
}

impl SegmentedSieve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of candidates sieved per segment (minimum 1).
    pub fn with_segment_len(mut self, segment_len: usize) -> Self {
        self.segment_len = segment_len.max(1);
        self
    }

    /// Refuse ranges whose estimated prime count exceeds `max_primes`.
    pub fn with_max_primes(mut self, max_primes: u64) -> Self {
        self.max_primes = max_primes;
        self
    }

    pub fn segment_len(&self) -> usize {
        self.segment_len
    }

    pub fn max_primes(&self) -> u64 {
        self.max_primes
    }
}

impl PrimeSource for SegmentedSieve {
    fn generate(&self, min_inclusive: u64, max_inclusive: u64) -> SieveResult<PrimeSequence> {
        let low = min_inclusive.max(2);
        if max_inclusive < low {
            return Ok(PrimeSequence::default());
        }

        let estimate = estimate_prime_count(low, max_inclusive);
        if estimate > self.max_primes {
            return Err(SieveError::LimitExceeded {
                estimate,
                limit: self.max_primes,
            });
        }
        let mut primes = Vec::new();
        try_reserve(&mut primes, estimate)?;

        let base = base_primes(isqrt(max_inclusive))?;
        debug!(
            base_primes = base.len(),
            estimate,
            "sieving base primes complete"
        );

        let mut segment: Vec<bool> = Vec::new();
        try_reserve(&mut segment, self.segment_len as u64)?;

        let mut segments = 0u64;
        let mut start = low;
        loop {
            let end = start
                .saturating_add(self.segment_len as u64 - 1)
                .min(max_inclusive);
            sieve_segment(&mut segment, start, end, &base);
            primes.extend(
                segment
                    .iter()
                    .enumerate()
                    .filter(|(_, &is_prime)| is_prime)
                    .map(|(offset, _)| start + offset as u64),
            );
            segments += 1;
            if end == max_inclusive {
                break;
            }
            start = end + 1;
        }

        info!(
            min = low,
            max = max_inclusive,
            count = primes.len(),
            segments,
            "prime generation complete"
        );
        Ok(PrimeSequence::from_ascending(primes))
    }
}

/// Mark composites in `[start, end]` using the supplied base primes.
///
/// `start` must be at least 2 and every prime factor up to `isqrt(end)` must
/// be present in `base`.
fn sieve_segment(segment: &mut Vec<bool>, start: u64, end: u64, base: &[u64]) {
    let len = (end - start + 1) as usize;
    segment.clear();
    segment.resize(len, true);

    for &p in base {
        let square = p * p;
        if square > end {
            break;
        }
        let first_multiple = start.div_ceil(p) * p;
        let mut multiple = square.max(first_multiple);
        while multiple <= end {
            segment[(multiple - start) as usize] = false;
            multiple = match multiple.checked_add(p) {
                Some(next) => next,
                None => break,
            };
        }
    }
}

/// All primes up to and including `limit`, by a plain sieve.
fn base_primes(limit: u64) -> SieveResult<Vec<u64>> {
    if limit < 2 {
        return Ok(Vec::new());
    }
    let mut composite: Vec<bool> = Vec::new();
    try_reserve(&mut composite, limit + 1)?;
    composite.resize((limit + 1) as usize, false);

    let mut primes = Vec::new();
    for n in 2..=limit {
        if composite[n as usize] {
            continue;
        }
        primes.push(n);
        let mut multiple = n * n;
        while multiple <= limit {
            composite[multiple as usize] = true;
            multiple += n;
        }
    }
    Ok(primes)
}

fn try_reserve<T>(buffer: &mut Vec<T>, elements: u64) -> SieveResult<()> {
    let additional =
        usize::try_from(elements).map_err(|_| SieveError::Allocation { elements })?;
    buffer
        .try_reserve_exact(additional)
        .map_err(|_| SieveError::Allocation { elements })
}

/// Integer square root, exact for every `u64`.
pub fn isqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

/// Upper bound on the number of primes in `[low, high]`.
///
/// Uses the Rosser–Schoenfeld bounds `x / ln x < π(x) < 1.25506 · x / ln x`,
/// the lower one valid from 17 onwards.
pub fn estimate_prime_count(low: u64, high: u64) -> u64 {
    fn upper(x: u64) -> f64 {
        if x < 2 {
            return 0.0;
        }
        let x = x as f64;
        (1.25506 * x / x.ln()).ceil()
    }
    fn lower(x: u64) -> f64 {
        if x < 17 {
            return 0.0;
        }
        let x = x as f64;
        (x / x.ln()).floor()
    }
    if high < low {
        return 0;
    }
    let bound = upper(high) - lower(low.saturating_sub(1));
    // Float rounding near 10^19 never pushes this past u64::MAX, but clamp anyway.
    if bound >= u64::MAX as f64 {
        u64::MAX
    } else {
        bound.max(1.0) as u64
    }
}
