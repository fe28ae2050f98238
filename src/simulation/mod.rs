//! Simulation orchestration and control
//!
//! This module contains the day runner, its state machine, the run summary,
//! error handling, and logging configuration.
//!
//! # Usage Example
//!
//! ```rust
//! use park_attendance_simulator::simulation::SimulationRunner;
//! use park_attendance_simulator::sink::MemorySink;
//! use park_attendance_simulator::park::ParkConfig;
//!
//! let mut runner = SimulationRunner::with_seed(ParkConfig::default(), 7)?;
//! let mut sink = MemorySink::new();
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
//!
//! let summary = runner.run_day(date, &mut sink)?;
//! assert_eq!(summary.traffic_rows, 12);
//! # Ok::<(), park_attendance_simulator::SimulationError>(())
//! ```

pub mod error;
pub mod logging;
pub mod runner;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use runner::*;
pub use statistics::*;
