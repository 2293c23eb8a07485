use crate::strategy::IndexStrategy;

/// Read-only prime membership queries.
///
/// All implementations must satisfy these invariants:
/// - `contains` answers exactly for every value in `0..=ceiling`: no false
///   positives, no false negatives.
/// - Values above the ceiling are reported absent rather than erroring.
/// - No mutation after construction, so shared references are safe to use
///   from any number of threads.
pub trait MembershipIndex: Send + Sync {
    /// Whether `value` is one of the indexed primes.
    fn contains(&self, value: u64) -> bool;

    /// Number of distinct values held.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest value the index answers for.
    fn ceiling(&self) -> u64;

    /// The concrete strategy backing this index.
    fn strategy(&self) -> IndexStrategy;

    /// Approximate heap footprint of the backing storage.
    fn memory_bytes(&self) -> u64;
}
