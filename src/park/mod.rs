//! Immutable park configuration
//!
//! Everything the simulator knows about the park lives here: the attendance
//! baseline, the operating window, the attendance multipliers, and the ride
//! roster with per-ride behavioral constants. The configuration is built (or
//! loaded) once at process start, validated, and never mutated.
//!
//! # Usage Example
//!
//! ```rust
//! use park_attendance_simulator::park::ParkConfig;
//!
//! let config = ParkConfig::default();
//! config.validate().unwrap();
//! assert_eq!(config.operating_hours, 12);
//! ```

pub mod config;
pub mod multipliers;
pub mod ride;

// Re-export all public types for convenience
pub use config::*;
pub use multipliers::*;
pub use ride::*;
