use std::path::Path;

use rtp_index::{IndexStrategy, DEFAULT_DENSE_LIMIT_BYTES};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::window::validate_digits;

/// Settings for one survey run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurveyConfig {
    /// Largest digit length to count (1..=19).
    pub max_digits: u32,
    /// Membership index strategy.
    pub strategy: IndexStrategy,
    /// Largest dense bitmap allowed, in bytes.
    pub dense_limit_bytes: u64,
    /// Count lengths concurrently.
    pub parallel: bool,
    /// Collect the qualifying primes for every length.
    pub list_primes: bool,
    /// Refuse to generate more than this many primes.
    pub max_primes: Option<u64>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            max_digits: 8,
            strategy: IndexStrategy::Auto,
            dense_limit_bytes: DEFAULT_DENSE_LIMIT_BYTES,
            parallel: true,
            list_primes: false,
            max_primes: None,
        }
    }
}

impl SurveyConfig {
    pub fn with_max_digits(mut self, max_digits: u32) -> Self {
        self.max_digits = max_digits;
        self
    }

    pub fn with_strategy(mut self, strategy: IndexStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check the configuration for values no run could satisfy.
    pub fn validate(&self) -> CoreResult<()> {
        validate_digits(self.max_digits)?;
        if self.max_primes == Some(0) {
            return Err(CoreError::Config("max_primes must be positive".into()));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
