//! Error types for the index crate.

use crate::strategy::IndexStrategy;

/// Errors that can occur while building a membership index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Backing storage for the index could not be allocated.
    #[error("cannot allocate {strategy} index of {bytes} bytes")]
    Allocation { strategy: IndexStrategy, bytes: u64 },

    /// A value handed to the builder lies above the declared ceiling.
    #[error("value {value} exceeds index ceiling {ceiling}")]
    ValueAboveCeiling { value: u64, ceiling: u64 },

    /// An index strategy name could not be parsed.
    #[error("unknown index strategy: {0} (expected auto, dense or hashed)")]
    UnknownStrategy(String),
}

/// Convenience alias for index results.
pub type IndexResult<T> = Result<T, IndexError>;
