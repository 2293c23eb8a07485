//! Strategy-selected membership index.

use tracing::info;

use crate::dense::DenseIndex;
use crate::error::IndexResult;
use crate::hashed::HashedIndex;
use crate::strategy::IndexStrategy;
use crate::traits::MembershipIndex;

/// A membership index backed by whichever strategy was resolved at build time.
#[derive(Debug)]
pub enum PrimeIndex {
    Dense(DenseIndex),
    Hashed(HashedIndex),
}

impl PrimeIndex {
    /// Build an index over `primes` answering for every value in `0..=ceiling`.
    ///
    /// `Auto` resolves to the smaller structure for `ceiling`. A bitmap larger
    /// than `dense_limit_bytes` fails with an allocation error instead of
    /// falling back to hashing.
    pub fn build(
        primes: &[u64],
        ceiling: u64,
        strategy: IndexStrategy,
        dense_limit_bytes: u64,
    ) -> IndexResult<Self> {
        let index = match strategy.resolve(ceiling) {
            IndexStrategy::Hashed => Self::Hashed(HashedIndex::build(primes, ceiling)?),
            IndexStrategy::Dense | IndexStrategy::Auto => {
                Self::Dense(DenseIndex::build(primes, ceiling, dense_limit_bytes)?)
            }
        };
        info!(
            strategy = %index.strategy(),
            entries = index.len(),
            ceiling,
            bytes = index.memory_bytes(),
            "membership index built"
        );
        Ok(index)
    }

    fn inner(&self) -> &dyn MembershipIndex {
        match self {
            Self::Dense(index) => index,
            Self::Hashed(index) => index,
        }
    }
}

impl MembershipIndex for PrimeIndex {
    #[inline]
    fn contains(&self, value: u64) -> bool {
        match self {
            Self::Dense(index) => index.contains(value),
            Self::Hashed(index) => index.contains(value),
        }
    }

    fn len(&self) -> usize {
        self.inner().len()
    }

    fn ceiling(&self) -> u64 {
        self.inner().ceiling()
    }

    fn strategy(&self) -> IndexStrategy {
        self.inner().strategy()
    }

    fn memory_bytes(&self) -> u64 {
        self.inner().memory_bytes()
    }
}
