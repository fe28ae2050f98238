//! Batch persistence contract and implementations
//!
//! The runner hands each completed day to a [`BatchSink`] as three bulk
//! batches. Each insert call is all-or-nothing: a sink either accepts the
//! whole batch or fails it, and the runner never retries individual rows.
//! [`MemorySink`] records batches in memory for tests; [`JsonlSink`] writes
//! newline-delimited JSON files for downstream bulk loading.

pub mod jsonl;
pub mod memory;

pub use jsonl::*;
pub use memory::*;

use crate::records::{HourlyTrafficRecord, MaintenanceEvent, RideUsageRecord};
use std::fmt;
use std::time::Duration;

/// Which of the three batches an operation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchKind {
    /// Hourly gate traffic rows
    Traffic,
    /// Per-ride hourly usage rows
    Usage,
    /// Maintenance advisory rows
    Maintenance,
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BatchKind::Traffic => "traffic",
            BatchKind::Usage => "usage",
            BatchKind::Maintenance => "maintenance",
        };
        write!(f, "{}", label)
    }
}

/// Errors a sink can surface from a bulk insert
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// I/O failure while writing the batch
    #[error("I/O failure writing batch: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be serialized
    #[error("Failed to serialize row: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The sink refused the batch
    #[error("Sink rejected batch: {0}")]
    Rejected(String),

    /// The sink's write deadline elapsed. Treated exactly like any other
    /// persistence failure: the run aborts with no partial retry.
    #[error("Sink deadline of {0:?} elapsed")]
    Timeout(Duration),
}

/// Bulk-insert contract between the runner and persistence.
///
/// Implementations must treat each call as atomic from the runner's point
/// of view: accept every row or fail the call. The runner submits traffic,
/// then usage, then maintenance, and stops at the first failure without
/// rolling back batches already accepted.
pub trait BatchSink {
    /// Insert a batch of hourly gate traffic rows
    fn insert_traffic(&mut self, rows: &[HourlyTrafficRecord]) -> Result<(), PersistenceError>;

    /// Insert a batch of per-ride hourly usage rows
    fn insert_usage(&mut self, rows: &[RideUsageRecord]) -> Result<(), PersistenceError>;

    /// Insert a batch of maintenance advisory rows
    fn insert_maintenance(&mut self, rows: &[MaintenanceEvent]) -> Result<(), PersistenceError>;
}
