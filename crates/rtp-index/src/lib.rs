//! Prime membership index for the right-truncatable prime survey.
//!
//! Answers "is `v` prime?" in constant time for every `v` up to a fixed
//! ceiling. Built once from the generated primes and read-only afterwards,
//! so one index is shared by every counting thread.
//!
//! # Key Types
//!
//! - [`MembershipIndex`] -- Read-only lookup contract
//! - [`DenseIndex`] -- One bit per integer up to the ceiling
//! - [`HashedIndex`] -- Hash set over the primes only
//! - [`PrimeIndex`] -- Strategy-selected index
//! - [`IndexStrategy`] -- `auto`, `dense` or `hashed`

pub mod dense;
pub mod error;
pub mod hashed;
pub mod index;
pub mod strategy;
pub mod traits;

pub use dense::DenseIndex;
pub use error::{IndexError, IndexResult};
pub use hashed::{mix64, HashedIndex, MixHasher, PrimeHashSet};
pub use index::PrimeIndex;
pub use strategy::{
    dense_bytes, hashed_bytes, IndexStrategy, DEFAULT_DENSE_LIMIT_BYTES, HASHED_ENTRY_BYTES,
};
pub use traits::MembershipIndex;
