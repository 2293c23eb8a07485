//! Dense bitmap index: one bit per integer up to the ceiling.
//!
//! Lookups are a single bounds check and bit test, which keeps the inner
//! truncation loop branch-predictable. Memory grows with the ceiling, not
//! with the prime count, so construction is gated on a byte limit.

use bit_vec::BitVec;

use crate::error::{IndexError, IndexResult};
use crate::strategy::{dense_bytes, IndexStrategy};
use crate::traits::MembershipIndex;

const BLOCK_BITS: usize = u32::BITS as usize;

/// Bitmap over `0..=ceiling`.
pub struct DenseIndex {
    bits: BitVec,
    ceiling: u64,
    len: usize,
}

impl DenseIndex {
    /// Build from `primes`, refusing any bitmap larger than `limit_bytes`.
    ///
    /// Storage is reserved fallibly, so an allocator refusal under the limit
    /// is reported as [`IndexError::Allocation`] rather than aborting.
    pub fn build(primes: &[u64], ceiling: u64, limit_bytes: u64) -> IndexResult<Self> {
        let bytes = dense_bytes(ceiling);
        let too_large = || IndexError::Allocation {
            strategy: IndexStrategy::Dense,
            bytes,
        };
        if bytes > limit_bytes {
            return Err(too_large());
        }
        let bit_count = usize::try_from(ceiling)
            .ok()
            .and_then(|c| c.checked_add(1))
            .ok_or_else(too_large)?;

        let mut bits = BitVec::new();
        // SAFETY: reserving capacity leaves the block count and every bit untouched.
        unsafe { bits.storage_mut() }
            .try_reserve_exact(bit_count.div_ceil(BLOCK_BITS))
            .map_err(|_| too_large())?;
        bits.grow(bit_count, false);
        let mut len = 0;
        for &value in primes {
            if value > ceiling {
                return Err(IndexError::ValueAboveCeiling { value, ceiling });
            }
            let slot = value as usize;
            if !bits[slot] {
                bits.set(slot, true);
                len += 1;
            }
        }
        Ok(Self { bits, ceiling, len })
    }
}

impl MembershipIndex for DenseIndex {
    #[inline]
    fn contains(&self, value: u64) -> bool {
        usize::try_from(value)
            .ok()
            .and_then(|slot| self.bits.get(slot))
            .unwrap_or(false)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn ceiling(&self) -> u64 {
        self.ceiling
    }

    fn strategy(&self) -> IndexStrategy {
        IndexStrategy::Dense
    }

    fn memory_bytes(&self) -> u64 {
        (self.bits.capacity() / 8) as u64
    }
}

impl std::fmt::Debug for DenseIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DenseIndex")
            .field("ceiling", &self.ceiling)
            .field("len", &self.len)
            .finish()
    }
}
