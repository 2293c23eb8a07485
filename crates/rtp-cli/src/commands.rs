use std::fmt::Write as _;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::Colorize;
use rtp_core::{Survey, SurveyConfig, SurveyReport};

use crate::cli::{Cli, OutputFormat};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let started = Instant::now();
    let report = Survey::new(config)
        .run()
        .with_context(|| format!("survey up to {} digits failed", cli.digits))?;
    let elapsed = started.elapsed();
    tracing::debug!(elapsed_ms = elapsed.as_secs_f64() * 1e3, "run finished");

    match cli.format {
        OutputFormat::Text => {
            print!("{}", render_text(&report));
            if cli.timing {
                println!("{}", render_timing(elapsed));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            if cli.timing {
                eprintln!("{}", render_timing(elapsed));
            }
        }
    }
    Ok(())
}

/// Merge the optional config file with command-line flags.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<SurveyConfig> {
    let mut config = match &cli.config {
        Some(path) => SurveyConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SurveyConfig::default(),
    };
    config.max_digits = cli.digits;
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(limit) = cli.dense_limit {
        config.dense_limit_bytes = limit;
    }
    if cli.max_primes.is_some() {
        config.max_primes = cli.max_primes;
    }
    if cli.sequential {
        config.parallel = false;
    }
    if cli.list {
        config.list_primes = true;
    }
    config.validate()?;
    Ok(config)
}

/// Per-length lines, longest first, followed by the grand total.
pub fn render_text(report: &SurveyReport) -> String {
    let mut out = String::new();
    for length in report.descending() {
        let _ = writeln!(
            out,
            "Number of {}-digit right-truncatable primes: {} (n = {})",
            length.digits,
            length.truncatable.to_string().bold(),
            length.scanned,
        );
        if let Some(primes) = &length.primes {
            for chunk in primes.chunks(8) {
                let line: Vec<String> = chunk.iter().map(u64::to_string).collect();
                let _ = writeln!(out, "  {}", line.join(" ").cyan());
            }
        }
    }
    let _ = writeln!(
        out,
        "\nTotal number of right-truncatable primes up to {} digits: {} (n = {})",
        report.max_digits,
        report.total.to_string().green().bold(),
        report.prime_count,
    );
    if let Some(largest) = report.largest {
        let _ = writeln!(out, "Largest: {}", largest.to_string().yellow());
    }
    let _ = writeln!(
        out,
        "Index: {} ({} bytes)",
        report.strategy.to_string().cyan(),
        report.index_bytes,
    );
    out
}

pub fn render_timing(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    format!(
        "Execution time: {:.3} ms ({:.3} µs)",
        secs * 1e3,
        secs * 1e6
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rtp_index::IndexStrategy;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rtp").chain(args.iter().copied())).unwrap()
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&["--strategy", "dense", "--sequential", "--list", "5"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.max_digits, 5);
        assert_eq!(config.strategy, IndexStrategy::Dense);
        assert!(!config.parallel);
        assert!(config.list_primes);
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_digits = 2").unwrap();
        writeln!(file, "strategy = \"hashed\"").unwrap();
        writeln!(file, "dense_limit_bytes = 512").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = parse(&["--config", path.as_str(), "--dense-limit", "2048", "4"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.max_digits, 4);
        assert_eq!(config.strategy, IndexStrategy::Hashed);
        assert_eq!(config.dense_limit_bytes, 2048);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = parse(&["--config", "/nonexistent/rtp.toml", "3"]);
        let err = resolve_config(&cli).unwrap_err();
        assert!(err.to_string().contains("loading config"));
    }

    #[test]
    fn zero_prime_limit_is_rejected() {
        let cli = parse(&["--max-primes", "0", "3"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn text_report_for_two_digits() {
        plain();
        let config = resolve_config(&parse(&["2"])).unwrap();
        let report = Survey::new(config).run().unwrap();
        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Number of 2-digit right-truncatable primes: 9 (n = 21)");
        assert_eq!(lines[1], "Number of 1-digit right-truncatable primes: 4 (n = 4)");
        assert!(text
            .contains("Total number of right-truncatable primes up to 2 digits: 13 (n = 25)"));
        assert!(text.contains("Largest: 79"));
        assert!(text.contains("Index: dense"));
    }

    #[test]
    fn text_report_lists_primes() {
        plain();
        let config = resolve_config(&parse(&["--list", "1"])).unwrap();
        let report = Survey::new(config).run().unwrap();
        let text = render_text(&report);
        assert!(text.contains("  2 3 5 7\n"));
    }

    #[test]
    fn timing_reports_milliseconds() {
        let line = render_timing(Duration::from_millis(1500));
        assert_eq!(line, "Execution time: 1500.000 ms (1500000.000 µs)");
    }
}
