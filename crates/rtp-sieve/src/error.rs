/// Errors from prime generation.
#[derive(Debug, thiserror::Error)]
pub enum SieveError {
    /// The output or working buffer could not be allocated.
    #[error("cannot allocate sieve buffer for {elements} elements")]
    Allocation { elements: u64 },

    /// The estimated prime count exceeds the configured ceiling.
    #[error("estimated {estimate} primes exceeds the configured limit of {limit}")]
    LimitExceeded { estimate: u64, limit: u64 },

    /// A supplied sequence violates the ascending, duplicate-free contract.
    #[error("sequence not strictly increasing at index {index}: {previous} followed by {value}")]
    Unordered {
        index: usize,
        previous: u64,
        value: u64,
    },
}

/// Result alias for sieve operations.
pub type SieveResult<T> = Result<T, SieveError>;
