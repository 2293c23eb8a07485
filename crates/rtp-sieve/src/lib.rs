//! Prime generation for the right-truncatable prime survey.
//!
//! Produces the ascending run of every prime in a closed `u64` range. The
//! survey treats generation as a black-box service behind [`PrimeSource`],
//! so any generator honouring the contract can be swapped in.
//!
//! # Key Types
//!
//! - [`PrimeSource`] -- Bulk generator contract
//! - [`SegmentedSieve`] -- Segmented Sieve of Eratosthenes
//! - [`PrimeSequence`] -- Owned, strictly increasing prime buffer
//!
//! # Design Rules
//!
//! 1. Failure to allocate is an error, never an empty result.
//! 2. No intermediate arithmetic overflows anywhere up to `10^19 - 1`.
//! 3. Buffers are owned by the returned sequence and freed on drop.

pub mod error;
pub mod sequence;
pub mod sieve;
pub mod traits;

pub use error::{SieveError, SieveResult};
pub use sequence::PrimeSequence;
pub use sieve::{estimate_prime_count, isqrt, SegmentedSieve, DEFAULT_SEGMENT_LEN};
pub use traits::PrimeSource;
