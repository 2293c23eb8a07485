use rtp_index::IndexError;
use rtp_sieve::SieveError;

/// Errors that abort a survey run.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A digit length outside `1..=19` was requested.
    #[error("invalid digit count {0}: must be between 1 and 19")]
    InvalidDigitCount(u32),

    /// The prime generator could not produce the requested range.
    #[error("prime generation failed: {0}")]
    Generation(#[from] SieveError),

    /// The membership index could not be built.
    #[error("membership index construction failed: {0}")]
    Index(#[from] IndexError),

    /// The configuration could not be parsed or is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the core crate.
pub type CoreResult<T> = Result<T, CoreError>;
