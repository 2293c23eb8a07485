use crate::error::{SieveError, SieveResult};

/// An owned, strictly increasing run of primes.
///
/// The sequence owns the generator's buffer outright; dropping it releases
/// the memory on every exit path. Consumers only ever see read-only slices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrimeSequence {
    values: Vec<u64>,
}

impl PrimeSequence {
    /// Wrap a buffer supplied by an external generator.
    ///
    /// Returns [`SieveError::Unordered`] if the values are not strictly
    /// ascending (which also rules out duplicates).
    pub fn from_sorted(values: Vec<u64>) -> SieveResult<Self> {
        if let Some(index) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(SieveError::Unordered {
                index: index + 1,
                previous: values[index],
                value: values[index + 1],
            });
        }
        Ok(Self { values })
    }

    /// Wrap a buffer the caller has already produced in ascending order.
    pub(crate) fn from_ascending(values: Vec<u64>) -> Self {
        debug_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        Self { values }
    }

    /// Number of primes in the sequence.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sequence holds no primes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The largest prime, if any.
    pub fn max(&self) -> Option<u64> {
        self.values.last().copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.values.iter()
    }

    /// Sub-slice of primes lying in the closed range `[low, high]`.
    ///
    /// Both ends are located by binary search, so the cost is logarithmic in
    /// the sequence length regardless of where the window falls.
    pub fn range(&self, low: u64, high: u64) -> &[u64] {
        if low > high {
            return &[];
        }
        let start = self.values.partition_point(|&v| v < low);
        let end = self.values.partition_point(|&v| v <= high);
        &self.values[start..end]
    }

    /// Release ownership of the underlying buffer.
    pub fn into_vec(self) -> Vec<u64> {
        self.values
    }
}

impl AsRef<[u64]> for PrimeSequence {
    fn as_ref(&self) -> &[u64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a PrimeSequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
