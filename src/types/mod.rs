//! Core types and identifiers for the attendance simulator
//!
//! This module contains the fundamental types shared across the simulation:
//! ride and run identifiers, calendar bucket enumerations, and the
//! maintenance vocabulary used by breakdown advisories.
//!
//! # Usage Example
//!
//! ```rust
//! use park_attendance_simulator::types::*;
//!
//! let ride_id = RideId(5);
//! let run_id = RunId::new();
//!
//! assert_eq!(Season::from_month(7), Season::PeakSummer);
//! assert_eq!(DayKind::from_weekday(chrono::Weekday::Sat), DayKind::Saturday);
//! ```

pub mod cli;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use cli::*;
pub use enums::*;
pub use identifiers::*;
