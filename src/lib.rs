//! Park Attendance Simulator
//!
//! A batch simulation library that synthesizes a plausible day of theme-park
//! operation and persists the results as time-series log data. For each
//! simulated day it produces hourly gate traffic counts, per-ride boarding
//! counts bounded by each ride's throughput ceiling, and probabilistic
//! equipment breakdown advisories.
//!
//! # Overview
//!
//! The simulator is a one-shot, single-threaded batch job. It consumes a
//! static park configuration (attendance baseline, operating window,
//! seasonal/day-of-week/intraday multipliers, and the ride roster) and a
//! persistence sink accepting bulk batches of rows. Nothing is read back;
//! downstream reporting is somebody else's concern.
//!
//! ## Key Features
//!
//! - **Parametric traffic model**: seasonal, day-of-week, and intraday
//!   multipliers with bounded random noise
//! - **Capacity-bounded ride usage**: boardings never exceed a ride's
//!   hourly capacity cap
//! - **Fault injection**: one Bernoulli breakdown trial per ride per day
//! - **Reproducible runs**: an injectable seed makes traffic, usage, and
//!   breakdown output fully deterministic
//! - **Narrow persistence seam**: the runner only ever talks to a
//!   [`BatchSink`], so tests substitute an in-memory recorder
//!
//! ## Quick Start
//!
//! ```rust
//! use park_attendance_simulator::{MemorySink, ParkConfig, SimulationRunner};
//!
//! let config = ParkConfig::default();
//! let mut runner = SimulationRunner::with_seed(config, 42)?;
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
//! let mut sink = MemorySink::new();
//! let summary = runner.run_day(date, &mut sink)?;
//!
//! println!("simulated {} visitors", summary.total_visitors);
//! # Ok::<(), park_attendance_simulator::SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers and shared enumerations
//! - [`park`]: the immutable park configuration (rides, multipliers)
//! - [`model`]: the traffic, ride-usage, and breakdown models
//! - [`records`]: the time-series row types handed to persistence
//! - [`sink`]: the batch persistence contract and its implementations
//! - [`simulation`]: the day runner, run summary, errors, and logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod model;
pub mod park;
pub mod records;
pub mod simulation;
pub mod sink;
pub mod types;

// Core types and identifiers
pub use types::{DayKind, FaultSeverity, MaintenanceStatus, RideCategory, RideId, RunId, Season};

// Park configuration
pub use park::{
    ConfigError, ConfigValidationError, DayOfWeekMultipliers, Multipliers, ParkConfig, RideConfig,
    SeasonalMultipliers,
};

// Simulation models
pub use model::{BreakdownModel, RideUsageModel, TrafficModel};

// Time-series rows
pub use records::{HourlyTrafficRecord, MaintenanceEvent, RideUsageRecord};

// Persistence
pub use sink::{BatchKind, BatchSink, JsonlSink, MemorySink, PersistenceError};

// Runner and supporting machinery
pub use simulation::{
    LoggingConfig, RunState, RunSummary, SimulationError, SimulationResult, SimulationRunner,
};
