//! Time-series row types handed to persistence
//!
//! One run produces three batches: hourly gate traffic, per-ride hourly
//! usage, and maintenance advisories. All rows are built in memory, written
//! once, and never read back by the simulator.

use crate::park::RideConfig;
use crate::types::{FaultSeverity, MaintenanceStatus, RideId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Source tag stamped on simulated gate counts
pub const TRAFFIC_SOURCE_TAG: &str = "Simulated Hourly Gate";

/// Reason recorded on automated breakdown advisories
pub const MAINTENANCE_REASON: &str = "Mechanical Fault Check";

/// Gate traffic for one operating hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyTrafficRecord {
    /// Start of the hourly slot
    pub timestamp: NaiveDateTime,
    /// Simulated calendar date
    pub date: NaiveDate,
    /// Visitors counted in the slot
    pub visitor_count: u32,
    /// Originating system tag
    pub source_system: String,
}

/// Boardings for one ride in one operating hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideUsageRecord {
    /// Start of the hourly slot
    pub timestamp: NaiveDateTime,
    /// Simulated calendar date
    pub date: NaiveDate,
    /// Ride the boardings belong to
    pub ride_id: RideId,
    /// Boardings in the slot, capped at the ride's capacity
    pub boardings: u32,
}

/// Advisory maintenance log entry for a flagged ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    /// Simulated calendar date
    pub date: NaiveDate,
    /// Ride flagged by the breakdown check
    pub ride_id: RideId,
    /// Why the entry was logged
    pub reason: String,
    /// Workflow status
    pub status: MaintenanceStatus,
    /// Fault severity
    pub severity: FaultSeverity,
    /// Free-text detail for the maintenance crew
    pub notes: String,
}

impl MaintenanceEvent {
    /// Build the advisory entry logged when the daily breakdown check
    /// fires for a ride. The entry carries minimal detail and expects a
    /// manual follow-up; it does not suppress the ride's usage rows for
    /// the same day.
    pub fn advisory(date: NaiveDate, ride: &RideConfig) -> Self {
        Self {
            date,
            ride_id: ride.id,
            reason: MAINTENANCE_REASON.to_string(),
            status: MaintenanceStatus::Reported,
            severity: FaultSeverity::Major,
            notes: format!(
                "Automated check detected high-probability failure ({:.1}%). Requires inspection.",
                ride.failure_rate * 100.0
            ),
        }
    }
}
