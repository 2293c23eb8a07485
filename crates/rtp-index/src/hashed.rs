//! Hashed index: a set over the primes themselves.
//!
//! Memory scales with the prime count instead of the ceiling, at the cost of
//! one hash and a bucket scan per lookup. Used when the dense bitmap would not fit.

use std::collections::HashSet;
use std::hash::{BuildHasherDefault, Hasher};

use crate::error::{IndexError, IndexResult};
use crate::strategy::{IndexStrategy, HASHED_ENTRY_BYTES};
use crate::traits::MembershipIndex;

/// Thomas Wang's 64-bit integer mix.
#[inline]
pub fn mix64(key: u64) -> u64 {
    let mut key = (!key).wrapping_add(key << 21);
    key ^= key >> 24;
    key = key.wrapping_add(key << 3).wrapping_add(key << 8);
    key ^= key >> 14;
    key = key.wrapping_add(key << 2).wrapping_add(key << 4);
    key ^= key >> 28;
    key.wrapping_add(key << 31)
}

/// [`Hasher`] for `u64` keys built on [`mix64`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MixHasher {
    state: u64,
}

impl Hasher for MixHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = mix64(self.state ^ u64::from(byte));
        }
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.state = mix64(self.state ^ value);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

pub type PrimeHashSet = HashSet<u64, BuildHasherDefault<MixHasher>>;

/// Hash set of primes with a fixed ceiling.
pub struct HashedIndex {
    set: PrimeHashSet,
    ceiling: u64,
}

impl HashedIndex {
    /// Build from `primes`. Storage is reserved up front; a failed
    /// reservation is reported rather than aborting.
    pub fn build(primes: &[u64], ceiling: u64) -> IndexResult<Self> {
        let mut set = PrimeHashSet::default();
        set.try_reserve(primes.len())
            .map_err(|_| IndexError::Allocation {
                strategy: IndexStrategy::Hashed,
                bytes: (primes.len() as u64).saturating_mul(HASHED_ENTRY_BYTES),
            })?;
        for &value in primes {
            if value > ceiling {
                return Err(IndexError::ValueAboveCeiling { value, ceiling });
            }
            set.insert(value);
        }
        Ok(Self { set, ceiling })
    }
}

impl MembershipIndex for HashedIndex {
    #[inline]
    fn contains(&self, value: u64) -> bool {
        value <= self.ceiling && self.set.contains(&value)
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn ceiling(&self) -> u64 {
        self.ceiling
    }

    fn strategy(&self) -> IndexStrategy {
        IndexStrategy::Hashed
    }

    fn memory_bytes(&self) -> u64 {
        (self.set.capacity() as u64).saturating_mul(HASHED_ENTRY_BYTES)
    }
}

impl std::fmt::Debug for HashedIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedIndex")
            .field("ceiling", &self.ceiling)
            .field("len", &self.set.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::BuildHasher;

    #[test]
    fn mix_is_deterministic_and_spreads_neighbours() {
        assert_eq!(mix64(97), mix64(97));
        assert_ne!(mix64(97), mix64(98));
        assert_ne!(mix64(0), 0);
    }

    #[test]
    fn hasher_matches_mix_for_single_u64() {
        let build = BuildHasherDefault::<MixHasher>::default();
        assert_eq!(build.hash_one(73_939_133u64), mix64(73_939_133));
    }

    #[test]
    fn byte_writes_are_order_sensitive() {
        let mut a = MixHasher::default();
        a.write(&[1, 2]);
        let mut b = MixHasher::default();
        b.write(&[2, 1]);
        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn holds_exactly_the_given_values() {
        let idx = HashedIndex::build(&[2, 3, 5, 7], 9).unwrap();
        let present: Vec<u64> = (0..=9).filter(|&v| idx.contains(v)).collect();
        assert_eq!(present, vec![2, 3, 5, 7]);
        assert_eq!(idx.strategy(), IndexStrategy::Hashed);
    }

    #[test]
    fn duplicates_collapse() {
        let idx = HashedIndex::build(&[3, 3, 3, 5], 9).unwrap();
        assert_eq!(idx.len(), 2);
    }

    #[test]
    fn fails_closed_above_ceiling() {
        let idx = HashedIndex::build(&[2, 3], 3).unwrap();
        assert!(!idx.contains(4));
        assert!(!idx.contains(u64::MAX));
    }

    #[test]
    fn rejects_value_above_ceiling() {
        let result = HashedIndex::build(&[2, 101], 100);
        assert!(matches!(
            result,
            Err(IndexError::ValueAboveCeiling { value: 101, ceiling: 100 })
        ));
    }

    #[test]
    fn nineteen_digit_ceiling_needs_no_dense_storage() {
        let big = 9_999_999_999_999_999_967;
        let idx = HashedIndex::build(&[2, big], 9_999_999_999_999_999_999).unwrap();
        assert!(idx.contains(big));
        assert!(!idx.contains(big - 2));
        assert!(idx.memory_bytes() < 1024);
    }
}
