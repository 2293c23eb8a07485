//! Run orchestration: generate once, index once, count every length.

use rayon::prelude::*;
use rtp_index::{MembershipIndex, PrimeIndex};
use rtp_sieve::{PrimeSource, SegmentedSieve};
use tracing::info;

use crate::config::SurveyConfig;
use crate::counter::TruncationCounter;
use crate::error::CoreResult;
use crate::report::{LengthResult, SurveyReport};
use crate::window::ceiling_for;

type Measured = (LengthResult, Option<Vec<u64>>);

/// Counts right-truncatable primes for every length up to a configured bound.
///
/// The prime sequence and index are local to each run and dropped when it
/// returns, whether it succeeds or fails.
#[derive(Clone, Debug, Default)]
pub struct Survey {
    config: SurveyConfig,
}

impl Survey {
    pub fn new(config: SurveyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// The generator used by [`Survey::run`], honouring `max_primes`.
    pub fn sieve(&self) -> SegmentedSieve {
        SegmentedSieve::new().with_max_primes(self.config.max_primes.unwrap_or(u64::MAX))
    }

    /// Run against the built-in segmented sieve.
    pub fn run(&self) -> CoreResult<SurveyReport> {
        self.run_with(&self.sieve())
    }

    /// Run against any prime source.
    pub fn run_with<S: PrimeSource + ?Sized>(&self, source: &S) -> CoreResult<SurveyReport> {
        self.config.validate()?;
        let max_digits = self.config.max_digits;
        let ceiling = ceiling_for(max_digits)?;

        info!(max_digits, ceiling, "generating primes");
        let primes = source.generate(2, ceiling)?;

        info!(count = primes.len(), strategy = %self.config.strategy, "building membership index");
        let index = PrimeIndex::build(
            primes.as_slice(),
            ceiling,
            self.config.strategy,
            self.config.dense_limit_bytes,
        )?;

        let counter = TruncationCounter::new(&primes, &index);
        let list = self.config.list_primes;
        let measured: Vec<Measured> = if self.config.parallel {
            (1..=max_digits)
                .into_par_iter()
                .map(|digits| measure(&counter, digits, list))
                .collect::<CoreResult<_>>()?
        } else {
            (1..=max_digits)
                .map(|digits| measure(&counter, digits, list))
                .collect::<CoreResult<_>>()?
        };

        let mut results = Vec::with_capacity(measured.len());
        let mut listings = Vec::new();
        for (result, listing) in measured {
            if let Some(primes) = listing {
                listings.push((result.digits, primes));
            }
            results.push(result);
        }

        let report = SurveyReport::assemble(
            max_digits,
            index.strategy(),
            primes.len() as u64,
            index.memory_bytes(),
            results,
            listings,
        );
        info!(total = report.total, largest = ?report.largest, "survey complete");
        Ok(report)
    }
}

fn measure<I: MembershipIndex + ?Sized>(
    counter: &TruncationCounter<'_, I>,
    digits: u32,
    list: bool,
) -> CoreResult<Measured> {
    let result = counter.count(digits)?;
    let listing = if list {
        Some(counter.truncatable(digits)?)
    } else {
        None
    };
    Ok((result, listing))
}
