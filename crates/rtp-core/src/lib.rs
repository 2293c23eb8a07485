//! Right-truncatable prime survey.
//!
//! A right-truncatable prime stays prime as its rightmost digit is removed,
//! repeatedly, until nothing is left (73939133 → 7393913 → … → 7). This
//! crate counts them per digit length:
//!
//! - [`DigitWindow`] -- The closed range of values with exactly `L` digits
//! - [`TruncationCounter`] -- Counts qualifying primes for one length
//! - [`Survey`] -- Generates primes once, indexes them once, counts every length
//! - [`SurveyConfig`] -- Run settings, loadable from TOML
//! - [`SurveyReport`] -- Per-length counts, running totals, and the grand total
//!
//! All values live in `u64`; lengths are limited to 19 digits.

pub mod config;
pub mod counter;
pub mod error;
pub mod report;
pub mod survey;
pub mod window;

pub use config::SurveyConfig;
pub use counter::{is_right_truncatable, TruncationCounter};
pub use error::{CoreError, CoreResult};
pub use report::{LengthReport, LengthResult, SurveyReport};
pub use survey::Survey;
pub use window::{ceiling_for, digit_count, validate_digits, DigitWindow, MAX_DIGITS};
