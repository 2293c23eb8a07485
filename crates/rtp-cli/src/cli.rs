use std::path::PathBuf;

use clap::Parser;
use rtp_index::IndexStrategy;

#[derive(Parser, Debug)]
#[command(
    name = "rtp",
    about = "Count right-truncatable primes for every digit length up to a bound",
    version,
)]
pub struct Cli {
    /// Largest digit length to survey (1-19)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=19))]
    pub digits: u32,

    /// Membership index: auto, dense or hashed
    #[arg(long)]
    pub strategy: Option<IndexStrategy>,

    /// Largest dense bitmap to allocate; a bigger one is an error
    #[arg(long, value_name = "BYTES")]
    pub dense_limit: Option<u64>,

    /// Refuse to generate more than this many primes
    #[arg(long, value_name = "COUNT")]
    pub max_primes: Option<u64>,

    /// Count lengths one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Print every right-truncatable prime found
    #[arg(short, long)]
    pub list: bool,

    /// TOML file with survey settings; flags take precedence
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report wall-clock time for the run
    #[arg(long)]
    pub timing: bool,

    /// Log debug-level diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
