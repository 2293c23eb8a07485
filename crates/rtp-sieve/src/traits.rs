use crate::error::SieveResult;
use crate::sequence::PrimeSequence;

/// Bulk prime generator.
///
/// All implementations must satisfy these invariants:
/// - The returned sequence holds every prime in `[min_inclusive, max_inclusive]`
///   and nothing else, in strictly ascending order.
/// - An empty range yields an empty sequence, not an error.
/// - Failure to allocate or compute is reported as `Err`, never as an empty
///   sequence.
pub trait PrimeSource: Send + Sync {
    /// Generate all primes in the closed range `[min_inclusive, max_inclusive]`.
    fn generate(&self, min_inclusive: u64, max_inclusive: u64) -> SieveResult<PrimeSequence>;
}

