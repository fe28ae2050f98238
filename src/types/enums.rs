//! Shared enumerations for the attendance simulator
//!
//! Calendar buckets used by the traffic model, ride categories from the
//! park catalog, and the vocabulary of maintenance advisories.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Season bucket driving the seasonal attendance multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// July and August
    PeakSummer,
    /// April through June, September and October
    Shoulder,
    /// November through March
    OffPeak,
}

impl Season {
    /// Classify a calendar month (1-12). Months outside the peak and
    /// shoulder ranges default to off-peak.
    pub fn from_month(month: u32) -> Self {
        match month {
            7 | 8 => Season::PeakSummer,
            4..=6 | 9 | 10 => Season::Shoulder,
            _ => Season::OffPeak,
        }
    }
}

/// Day-of-week bucket driving the daily attendance multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayKind {
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
    /// Monday through Friday
    Weekday,
}

impl DayKind {
    /// Classify a chrono weekday
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat => DayKind::Saturday,
            Weekday::Sun => DayKind::Sunday,
            _ => DayKind::Weekday,
        }
    }
}

/// Attraction category from the park catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideCategory {
    /// Outdoor steel coaster
    Coaster,
    /// Wooden coaster
    #[serde(rename = "Wooden Coaster")]
    WoodenCoaster,
    /// Enclosed coaster
    #[serde(rename = "Indoor Coaster")]
    IndoorCoaster,
    /// Enclosed slow-moving themed ride
    #[serde(rename = "Dark Ride")]
    DarkRide,
    /// Dark ride with rider interaction elements
    #[serde(rename = "Interactive Dark Ride")]
    InteractiveDarkRide,
    /// Flume, rapids, or splash ride
    #[serde(rename = "Water Ride")]
    WaterRide,
    /// Spinning or swinging ground-level ride
    #[serde(rename = "Flat Ride")]
    FlatRide,
    /// Target-shooting attraction
    #[serde(rename = "Shooting Gallery")]
    ShootingGallery,
    /// Free-fall tower
    #[serde(rename = "Drop Tower")]
    DropTower,
    /// Enclosed motion-base attraction
    #[serde(rename = "Motion Simulator")]
    MotionSimulator,
    /// Live or staged performance
    Show,
}

impl fmt::Display for RideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RideCategory::Coaster => "Coaster",
            RideCategory::WoodenCoaster => "Wooden Coaster",
            RideCategory::IndoorCoaster => "Indoor Coaster",
            RideCategory::DarkRide => "Dark Ride",
            RideCategory::InteractiveDarkRide => "Interactive Dark Ride",
            RideCategory::WaterRide => "Water Ride",
            RideCategory::FlatRide => "Flat Ride",
            RideCategory::ShootingGallery => "Shooting Gallery",
            RideCategory::DropTower => "Drop Tower",
            RideCategory::MotionSimulator => "Motion Simulator",
            RideCategory::Show => "Show",
        };
        write!(f, "{}", label)
    }
}

/// Workflow status of a maintenance log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    /// Logged and awaiting inspection
    Reported,
    /// A technician is working the fault
    #[serde(rename = "In Progress")]
    InProgress,
    /// Inspection and repair complete
    Resolved,
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MaintenanceStatus::Reported => "Reported",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Resolved => "Resolved",
        };
        write!(f, "{}", label)
    }
}

/// Severity of a reported fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultSeverity {
    /// Cosmetic or non-blocking issue
    Minor,
    /// Degraded operation
    Moderate,
    /// Ride requires inspection before reopening
    Major,
}

impl fmt::Display for FaultSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FaultSeverity::Minor => "Minor",
            FaultSeverity::Moderate => "Moderate",
            FaultSeverity::Major => "Major",
        };
        write!(f, "{}", label)
    }
}
