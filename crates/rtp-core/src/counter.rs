//! Right-truncation counting for one digit length at a time.
//!
//! A prime is right-truncatable when every prefix obtained by dropping
//! trailing digits is itself prime. The counter walks those prefixes with
//! repeated division by ten, asking the membership index at each step.

use rtp_index::MembershipIndex;
use rtp_sieve::PrimeSequence;
use tracing::debug;

use crate::error::CoreResult;
use crate::report::LengthResult;
use crate::window::DigitWindow;

/// Whether `value` and every prefix of it are in `index`.
///
/// The value itself is checked too, so the answer holds even when the index
/// and the candidate source disagree.
#[inline]
pub fn is_right_truncatable<I: MembershipIndex + ?Sized>(value: u64, index: &I) -> bool {
    if value == 0 {
        return false;
    }
    let mut prefix = value;
    while prefix > 0 {
        if !index.contains(prefix) {
            return false;
        }
        prefix /= 10;
    }
    true
}

/// Counts right-truncatable primes per digit length over a shared sequence
/// and index.
///
/// Holds only shared borrows, so a single counter can be used from many
/// threads at once.
pub struct TruncationCounter<'a, I: MembershipIndex + ?Sized> {
    primes: &'a PrimeSequence,
    index: &'a I,
}

impl<'a, I: MembershipIndex + ?Sized> TruncationCounter<'a, I> {
    pub fn new(primes: &'a PrimeSequence, index: &'a I) -> Self {
        Self { primes, index }
    }

    /// Primes of exactly `digits` digits, sliced out by binary search.
    pub fn candidates(&self, digits: u32) -> CoreResult<&'a [u64]> {
        let window = DigitWindow::for_length(digits)?;
        Ok(self.primes.range(window.low, window.high))
    }

    /// Count the right-truncatable primes of length `digits`.
    pub fn count(&self, digits: u32) -> CoreResult<LengthResult> {
        let candidates = self.candidates(digits)?;
        let mut truncatable = 0u64;
        let mut largest = None;
        for &prime in candidates {
            if is_right_truncatable(prime, self.index) {
                truncatable += 1;
                largest = Some(prime);
            }
        }
        let result = LengthResult {
            digits,
            truncatable,
            scanned: candidates.len() as u64,
            largest,
        };
        debug!(
            digits,
            truncatable = result.truncatable,
            scanned = result.scanned,
            "length counted"
        );
        Ok(result)
    }

    /// The right-truncatable primes of length `digits`, ascending.
    pub fn truncatable(&self, digits: u32) -> CoreResult<Vec<u64>> {
        Ok(self
            .candidates(digits)?
            .iter()
            .copied()
            .filter(|&prime| is_right_truncatable(prime, self.index))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::*;
    use crate::error::CoreError;
    use proptest::prelude::*;
    use rtp_index::{HashedIndex, IndexStrategy, PrimeIndex, DEFAULT_DENSE_LIMIT_BYTES};
    use rtp_sieve::{PrimeSource, SegmentedSieve};

    struct Fixture {
        primes: PrimeSequence,
        index: PrimeIndex,
    }

    fn fixture() -> &'static Fixture {
        static FIXTURE: OnceLock<Fixture> = OnceLock::new();
        FIXTURE.get_or_init(|| {
            let primes = SegmentedSieve::new().generate(2, 999_999).unwrap();
            let index = PrimeIndex::build(
                primes.as_slice(),
                999_999,
                IndexStrategy::Dense,
                DEFAULT_DENSE_LIMIT_BYTES,
            )
            .unwrap();
            Fixture { primes, index }
        })
    }

    fn naive_is_prime(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    fn naive_right_truncatable(n: u64) -> bool {
        let digits = n.to_string();
        !digits.is_empty()
            && (1..=digits.len()).all(|len| naive_is_prime(digits[..len].parse().unwrap()))
    }

    #[test]
    fn single_digit_primes_are_all_truncatable() {
        let f = fixture();
        let counter = TruncationCounter::new(&f.primes, &f.index);
        assert_eq!(counter.truncatable(1).unwrap(), vec![2, 3, 5, 7]);
        let result = counter.count(1).unwrap();
        assert_eq!(result.truncatable, 4);
        assert_eq!(result.scanned, 4);
        assert_eq!(result.largest, Some(7));
    }

    #[test]
    fn two_digit_truncatable_primes() {
        let f = fixture();
        let counter = TruncationCounter::new(&f.primes, &f.index);
        assert_eq!(
            counter.truncatable(2).unwrap(),
            vec![23, 29, 31, 37, 53, 59, 71, 73, 79]
        );
        let result = counter.count(2).unwrap();
        assert_eq!(result.truncatable, 9);
        assert_eq!(result.scanned, 21);
    }

    #[test]
    fn known_counts_through_six_digits() {
        let f = fixture();
        let counter = TruncationCounter::new(&f.primes, &f.index);
        let counts: Vec<u64> = (1..=6).map(|d| counter.count(d).unwrap().truncatable).collect();
        assert_eq!(counts, vec![4, 9, 14, 16, 15, 12]);
    }

    #[test]
    fn lengths_beyond_the_sequence_scan_nothing() {
        let f = fixture();
        let counter = TruncationCounter::new(&f.primes, &f.index);
        let result = counter.count(7).unwrap();
        assert_eq!(result.scanned, 0);
        assert_eq!(result.truncatable, 0);
        assert_eq!(result.largest, None);
    }

    #[test]
    fn invalid_lengths_are_rejected() {
        let f = fixture();
        let counter = TruncationCounter::new(&f.primes, &f.index);
        assert!(matches!(counter.count(0), Err(CoreError::InvalidDigitCount(0))));
        assert!(matches!(counter.count(20), Err(CoreError::InvalidDigitCount(20))));
        assert!(matches!(counter.truncatable(20), Err(CoreError::InvalidDigitCount(20))));
    }

    #[test]
    fn first_check_guards_against_inconsistent_index() {
        // 29 is in the sequence but missing from the index.
        let primes = PrimeSequence::from_sorted(vec![2, 3, 23, 29]).unwrap();
        let index = HashedIndex::build(&[2, 3, 23], 99).unwrap();
        let counter = TruncationCounter::new(&primes, &index);
        assert_eq!(counter.truncatable(2).unwrap(), vec![23]);
    }

    #[test]
    fn zero_is_never_truncatable() {
        let f = fixture();
        assert!(!is_right_truncatable(0, &f.index));
    }

    #[test]
    fn works_through_a_trait_object() {
        let f = fixture();
        let index: &dyn MembershipIndex = &f.index;
        let counter = TruncationCounter::new(&f.primes, index);
        assert_eq!(counter.count(3).unwrap().truncatable, 14);
    }

    proptest! {
        #[test]
        fn agrees_with_prefix_parsing(n in 1u64..1_000_000) {
            let f = fixture();
            prop_assert_eq!(is_right_truncatable(n, &f.index), naive_right_truncatable(n));
        }

        #[test]
        fn count_never_exceeds_scanned(digits in 1u32..=19) {
            let f = fixture();
            let result = TruncationCounter::new(&f.primes, &f.index).count(digits).unwrap();
            prop_assert!(result.truncatable <= result.scanned);
        }
    }
}
