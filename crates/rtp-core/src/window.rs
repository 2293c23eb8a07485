//! Digit-length windows over the `u64` domain.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Largest supported digit length. `10^19 - 1` is the widest all-nines
/// value below `u64::MAX`.
pub const MAX_DIGITS: u32 = 19;

/// Check that `digits` lies in `1..=MAX_DIGITS`.
pub fn validate_digits(digits: u32) -> CoreResult<u32> {
    if (1..=MAX_DIGITS).contains(&digits) {
        Ok(digits)
    } else {
        Err(CoreError::InvalidDigitCount(digits))
    }
}

/// Largest value with `digits` decimal digits: `10^digits - 1`.
pub fn ceiling_for(digits: u32) -> CoreResult<u64> {
    validate_digits(digits)?;
    10u64
        .checked_pow(digits)
        .map(|p| p - 1)
        .ok_or(CoreError::InvalidDigitCount(digits))
}

/// Number of decimal digits in `value` (1 for zero).
pub fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

/// The closed range of values having exactly `digits` decimal digits.
///
/// The one-digit window starts at 1 rather than 0 so it covers 2, 3, 5, 7
/// without admitting zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitWindow {
    pub digits: u32,
    pub low: u64,
    pub high: u64,
}

impl DigitWindow {
    pub fn for_length(digits: u32) -> CoreResult<Self> {
        let high = ceiling_for(digits)?;
        let low = if digits == 1 { 1 } else { high / 10 + 1 };
        Ok(Self { digits, low, high })
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_digit_window_starts_at_one() {
        let w = DigitWindow::for_length(1).unwrap();
        assert_eq!((w.low, w.high), (1, 9));
        assert!(w.contains(2));
        assert!(!w.contains(0));
        assert!(!w.contains(10));
    }

    #[test]
    fn three_digit_window() {
        let w = DigitWindow::for_length(3).unwrap();
        assert_eq!((w.low, w.high), (100, 999));
    }

    #[test]
    fn nineteen_digit_window_does_not_overflow() {
        let w = DigitWindow::for_length(19).unwrap();
        assert_eq!(w.low, 1_000_000_000_000_000_000);
        assert_eq!(w.high, 9_999_999_999_999_999_999);
    }

    #[test]
    fn out_of_range_lengths_are_rejected() {
        assert!(matches!(
            DigitWindow::for_length(0),
            Err(CoreError::InvalidDigitCount(0))
        ));
        assert!(matches!(
            DigitWindow::for_length(20),
            Err(CoreError::InvalidDigitCount(20))
        ));
        assert!(matches!(ceiling_for(u32::MAX), Err(CoreError::InvalidDigitCount(_))));
    }

    #[test]
    fn windows_tile_the_domain() {
        for digits in 2..=MAX_DIGITS {
            let prev = DigitWindow::for_length(digits - 1).unwrap();
            let next = DigitWindow::for_length(digits).unwrap();
            assert_eq!(prev.high + 1, next.low);
        }
    }

    #[test]
    fn digit_count_matches_window() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(7), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(73_939_133), 8);
        assert_eq!(digit_count(u64::MAX), 20);
        for digits in 1..=MAX_DIGITS {
            let w = DigitWindow::for_length(digits).unwrap();
            assert_eq!(digit_count(w.low), digits);
            assert_eq!(digit_count(w.high), digits);
        }
    }
}
