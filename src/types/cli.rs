//! Command line arguments for the attendance simulator binary
//!
//! The library itself takes an explicit target date; the "which date do we
//! backfill" policy lives entirely in this CLI surface.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "park-attendance-simulator",
    version,
    about = "Park Attendance Simulator - Generates plausible daily park operation logs",
    long_about = "Synthesizes a plausible day of theme-park operation: hourly gate traffic,
per-ride boardings bounded by capacity, and probabilistic equipment
breakdown advisories. Results are written as JSONL batches suitable for
bulk insertion into the operations database.

EXAMPLES:
    # Simulate a random recent day with the built-in park configuration
    park-attendance-simulator

    # Simulate a specific date, reproducibly
    park-attendance-simulator --date 2025-07-19 --seed 42

    # Backfill a week of history ending at a date
    park-attendance-simulator --date 2025-07-19 --days 7

    # Use a custom park configuration
    park-attendance-simulator --config park.json --output-dir ./logs

    # Generate a configuration template
    park-attendance-simulator --print-config > park.json

    # Validate configuration without running
    park-attendance-simulator --config park.json --dry-run

CONFIGURATION:
    The park configuration (attendance baseline, operating window,
    multipliers, ride roster) is a JSON file passed via --config. When
    omitted, the built-in reference park is used."
)]
pub struct CliArgs {
    /// Park configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Park configuration file path (JSON format)",
        long_help = "Path to a JSON park configuration file. When omitted, the built-in reference park configuration is used."
    )]
    pub config: Option<String>,

    /// Date to simulate (YYYY-MM-DD)
    #[arg(
        long,
        help = "Date to simulate (YYYY-MM-DD)",
        long_help = "Calendar date to simulate. When omitted, a date 0-29 days in the past is picked at random (the backfill behavior expected by the nightly job)."
    )]
    pub date: Option<NaiveDate>,

    /// Number of consecutive days to simulate, ending at the target date
    #[arg(
        long,
        default_value = "1",
        help = "Number of consecutive days to simulate",
        long_help = "Number of consecutive days to simulate, ending at the target date. Each day is an independent run. Must be greater than 0. Default: 1"
    )]
    pub days: usize,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Directory for the generated JSONL batches
    #[arg(
        long,
        default_value = "park-logs",
        help = "Directory for the generated JSONL batches"
    )]
    pub output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running the simulation
    #[arg(long, help = "Validate configuration without running the simulation")]
    pub dry_run: bool,

    /// Print the default park configuration and exit
    #[arg(long, help = "Print the default park configuration in JSON format and exit")]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["test"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.date.is_none());
        assert_eq!(args.days, 1);
        assert!(args.seed.is_none());
        assert_eq!(args.output_dir, PathBuf::from("park-logs"));
        assert!(!args.verbose);
        assert!(!args.debug);
        assert!(!args.dry_run);
        assert!(!args.print_config);
    }

    #[test]
    fn test_date_parsing() {
        let args = CliArgs::try_parse_from(["test", "--date", "2025-07-19"]).unwrap();
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 7, 19));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result = CliArgs::try_parse_from(["test", "--date", "not-a-date"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_days_and_seed() {
        let args =
            CliArgs::try_parse_from(["test", "--days", "7", "--seed", "42"]).unwrap();
        assert_eq!(args.days, 7);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::try_parse_from(["test", "--dry-run", "-v"]).unwrap();
        assert!(args.dry_run);
        assert!(args.verbose);
    }

    #[test]
    fn test_output_dir_override() {
        let args = CliArgs::try_parse_from(["test", "--output-dir", "/tmp/x"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("/tmp/x"));
    }
}
