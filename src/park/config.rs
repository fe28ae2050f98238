//! Park configuration loading and validation
//!
//! The [`ParkConfig`] is the single source of truth the runner reads once
//! per run. The default value is the reference park; alternate parks load
//! from a JSON file. Validation runs before any simulation and rejects
//! configurations that would produce meaningless output (a distribution
//! that does not sum to 1.0, a ride with no capacity, and so on).

use super::{Multipliers, RideConfig};
use crate::types::{RideCategory, RideId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Tolerance for the hourly distribution sum check
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// Immutable description of the park's operating parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkConfig {
    /// Expected visitor count on a standard weekday
    pub base_attendance: u32,
    /// Hour of day the gates open (24-hour clock)
    pub opening_hour: u32,
    /// Number of hourly slots the park is open per day
    pub operating_hours: usize,
    /// Seasonal, day-of-week, and intraday multipliers
    pub multipliers: Multipliers,
    /// The full ride roster
    pub rides: Vec<RideConfig>,
}

/// Configuration file loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for a park configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Base attendance is zero
    #[error("Base attendance must be greater than 0")]
    InvalidBaseAttendance,

    /// Operating hour count is zero
    #[error("Operating hours must be greater than 0, got {0}")]
    InvalidOperatingHours(usize),

    /// Operating window runs past midnight
    #[error("Operating window of {operating_hours}h starting at {opening_hour}:00 runs past midnight")]
    OperatingWindowOverflow {
        /// Hour of day the gates open
        opening_hour: u32,
        /// Number of hourly slots
        operating_hours: usize,
    },

    /// Hourly distribution length does not match the operating hour count
    #[error("Hourly distribution has {actual} entries for {expected} operating hours")]
    DistributionLength {
        /// Expected entry count (the operating hour count)
        expected: usize,
        /// Actual entry count
        actual: usize,
    },

    /// An hourly distribution entry is negative or not finite
    #[error("Hourly distribution entry {index} is invalid: {value}")]
    DistributionEntry {
        /// 0-based index of the offending entry
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Hourly distribution does not sum to 1.0
    #[error("Hourly distribution sums to {sum}, expected 1.0")]
    DistributionSum {
        /// The actual sum
        sum: f64,
    },

    /// The ride roster is empty
    #[error("Ride roster is empty")]
    EmptyRoster,

    /// Two rides share an identifier
    #[error("Duplicate ride id {0} in roster")]
    DuplicateRideId(RideId),

    /// A ride has no hourly capacity
    #[error("Ride '{ride}' has non-positive capacity cap")]
    InvalidCapacity {
        /// Display name of the offending ride
        ride: String,
    },

    /// A ride rate is outside the unit interval
    #[error("Ride '{ride}' has {field} {value} outside 0.0..=1.0")]
    RateOutOfRange {
        /// Display name of the offending ride
        ride: String,
        /// Which rate field is invalid
        field: &'static str,
        /// The offending value
        value: f64,
    },
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self {
            base_attendance: 10_000,
            opening_hour: 10,
            operating_hours: 12,
            multipliers: Multipliers::default(),
            rides: reference_roster(),
        }
    }
}

impl ParkConfig {
    /// Load a park configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Render the configuration as pretty-printed JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Hour of day the park closes (exclusive)
    pub fn closing_hour(&self) -> u32 {
        self.opening_hour + self.operating_hours as u32
    }

    /// Validate the configuration. Must pass before any simulation runs.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.base_attendance == 0 {
            return Err(ConfigValidationError::InvalidBaseAttendance);
        }

        if self.operating_hours == 0 {
            return Err(ConfigValidationError::InvalidOperatingHours(self.operating_hours));
        }

        if self.opening_hour as usize + self.operating_hours > 24 {
            return Err(ConfigValidationError::OperatingWindowOverflow {
                opening_hour: self.opening_hour,
                operating_hours: self.operating_hours,
            });
        }

        let distribution = &self.multipliers.hourly_distribution;
        if distribution.len() != self.operating_hours {
            return Err(ConfigValidationError::DistributionLength {
                expected: self.operating_hours,
                actual: distribution.len(),
            });
        }

        for (index, &value) in distribution.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigValidationError::DistributionEntry { index, value });
            }
        }

        let sum = self.multipliers.distribution_sum();
        if (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            return Err(ConfigValidationError::DistributionSum { sum });
        }

        if self.rides.is_empty() {
            return Err(ConfigValidationError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for ride in &self.rides {
            if !seen.insert(ride.id) {
                return Err(ConfigValidationError::DuplicateRideId(ride.id));
            }

            if ride.capacity_cap == 0 {
                return Err(ConfigValidationError::InvalidCapacity { ride: ride.name.clone() });
            }

            validate_rate(&ride.name, "attraction_rate", ride.attraction_rate)?;
            validate_rate(&ride.name, "failure_rate", ride.failure_rate)?;
        }

        Ok(())
    }
}

fn validate_rate(ride: &str, field: &'static str, value: f64) -> Result<(), ConfigValidationError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigValidationError::RateOutOfRange {
            ride: ride.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

/// The reference ride roster: fifteen attractions across four themed zones
fn reference_roster() -> Vec<RideConfig> {
    fn ride(
        id: u32,
        zone: &str,
        name: &str,
        category: RideCategory,
        attraction_rate: f64,
        capacity_cap: u32,
        failure_rate: f64,
    ) -> RideConfig {
        RideConfig {
            id: RideId(id),
            name: name.to_string(),
            zone: zone.to_string(),
            category,
            attraction_rate,
            capacity_cap,
            failure_rate,
        }
    }

    const JURASSIC: &str = "Jurassic Zone";
    const MEDIEVAL: &str = "Medieval Fantasy Zone";
    const WILD_WEST: &str = "Wild West Zone";
    const NOVA_CREST: &str = "Nova-Crest (Futuristic Zone)";

    vec![
        ride(1, JURASSIC, "Pterodactyl Plunge", RideCategory::Coaster, 0.045, 1400, 0.05),
        ride(2, JURASSIC, "Cretaceous Crossing", RideCategory::DarkRide, 0.035, 1800, 0.03),
        ride(3, JURASSIC, "Raptor Rapids", RideCategory::WaterRide, 0.025, 1000, 0.03),
        ride(4, JURASSIC, "The Extinction Event", RideCategory::Show, 0.015, 800, 0.01),
        ride(5, MEDIEVAL, "Dragon Rider's Fury", RideCategory::Coaster, 0.048, 1200, 0.06),
        ride(
            6,
            MEDIEVAL,
            "Quest of the Crystal King",
            RideCategory::InteractiveDarkRide,
            0.038,
            1600,
            0.04,
        ),
        ride(7, MEDIEVAL, "The Royal Tournament", RideCategory::FlatRide, 0.020, 850, 0.02),
        ride(13, MEDIEVAL, "The Sword in the Stone", RideCategory::Show, 0.018, 1500, 0.02),
        ride(8, WILD_WEST, "Runaway Gold Mine", RideCategory::WoodenCoaster, 0.040, 1100, 0.05),
        ride(
            9,
            WILD_WEST,
            "The Rattlesnake Robbery",
            RideCategory::ShootingGallery,
            0.030,
            1500,
            0.02,
        ),
        ride(10, WILD_WEST, "Oil Derrick Drop", RideCategory::DropTower, 0.035, 750, 0.03),
        ride(14, WILD_WEST, "The High Noon Shootout", RideCategory::Show, 0.012, 600, 0.01),
        ride(
            11,
            NOVA_CREST,
            "Cosmic Collapse: Wormhole Jump",
            RideCategory::IndoorCoaster,
            0.043,
            1300,
            0.05,
        ),
        ride(12, NOVA_CREST, "The Zero-G Skyway", RideCategory::MotionSimulator, 0.033, 1900, 0.04),
        ride(15, NOVA_CREST, "Symphony of the Nexus", RideCategory::Show, 0.022, 2200, 0.03),
    ]
}
