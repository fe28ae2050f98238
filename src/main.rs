// Park Attendance Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/park-attendance-simulator --date 2025-07-19 --seed 42
// ```
//
// The binary owns the scheduling conveniences the library deliberately
// lacks: picking a recent past date when none is given, and backfilling
// several consecutive days in one invocation.

use anyhow::Context;
use chrono::{Duration, NaiveDate};
use clap::Parser;
use park_attendance_simulator::types::CliArgs;
use park_attendance_simulator::{JsonlSink, LoggingConfig, ParkConfig, SimulationRunner};
use rand::Rng;
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match ParkConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::new().init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("Simulation failed: {:#}", e);
        eprintln!("Simulation failed: {:#}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.days > 0, "--days must be greater than 0");

    let config = match &args.config {
        Some(path) => ParkConfig::from_file(path)
            .with_context(|| format!("loading park configuration from {}", path))?,
        None => ParkConfig::default(),
    };
    config.validate().context("park configuration is invalid")?;

    info!(
        "Park configuration loaded: {} rides, {} operating hours",
        config.rides.len(),
        config.operating_hours
    );

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    let end_date = args.date.unwrap_or_else(random_recent_date);

    let mut runner = match args.seed {
        Some(seed) => SimulationRunner::with_seed(config, seed)?,
        None => SimulationRunner::new(config)?,
    };

    let mut sink = JsonlSink::create(&args.output_dir)
        .with_context(|| format!("creating output directory {}", args.output_dir.display()))?;

    for offset in (0..args.days).rev() {
        let date = end_date - Duration::days(offset as i64);
        let summary = runner.run_day(date, &mut sink)?;
        eprintln!("{}", summary.report());
        eprintln!();
    }

    eprintln!("Batches written under {}", args.output_dir.display());
    Ok(())
}

/// Backfill policy: a date 0-29 days in the past. The simulation engine
/// itself always takes an explicit date; this convenience belongs to the
/// CLI alone, and reproducible runs should pass --date.
fn random_recent_date() -> NaiveDate {
    let days_ago = rand::thread_rng().gen_range(0..30);
    let date = chrono::Local::now().date_naive() - Duration::days(days_ago);
    info!("No date supplied, picked {} ({} days ago)", date, days_ago);
    date
}

/// Print a configuration summary for dry runs
fn print_configuration_summary(config: &ParkConfig) {
    eprintln!("Configuration:");
    eprintln!("  Base Attendance: {}", config.base_attendance);
    eprintln!(
        "  Operating Window: {:02}:00 - {:02}:00 ({} hours)",
        config.opening_hour,
        config.closing_hour(),
        config.operating_hours
    );
    eprintln!("  Rides: {}", config.rides.len());
    for ride in &config.rides {
        eprintln!(
            "    [{}] {} ({}) - rate {:.3}, cap {}/hr, failure {:.1}%",
            ride.id,
            ride.name,
            ride.category,
            ride.attraction_rate,
            ride.capacity_cap,
            ride.failure_rate * 100.0
        );
    }
}
