//! Attendance multiplier tables
//!
//! Three tables shape daily attendance: a seasonal multiplier keyed on the
//! month, a day-of-week multiplier with distinct Saturday and Sunday values,
//! and an intraday distribution spreading the daily total across operating
//! hours. The distribution must sum to 1.0 and carry one entry per
//! operating hour; [`crate::park::ParkConfig::validate`] enforces both.

use crate::types::{DayKind, Season};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Seasonal attendance multipliers, keyed by [`Season`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalMultipliers {
    /// July and August
    pub peak_summer: f64,
    /// April-June and September-October
    pub shoulder: f64,
    /// November-March
    pub off_peak: f64,
}

impl Default for SeasonalMultipliers {
    fn default() -> Self {
        Self { peak_summer: 1.8, shoulder: 1.3, off_peak: 0.7 }
    }
}

/// Day-of-week attendance multipliers, keyed by [`DayKind`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOfWeekMultipliers {
    /// Saturdays
    pub saturday: f64,
    /// Sundays
    pub sunday: f64,
    /// Monday through Friday
    pub weekday: f64,
}

impl Default for DayOfWeekMultipliers {
    fn default() -> Self {
        Self { saturday: 1.4, sunday: 1.2, weekday: 1.0 }
    }
}

/// The full multiplier structure shared by all simulation runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    /// Seasonal attendance multipliers
    pub seasonal: SeasonalMultipliers,
    /// Day-of-week attendance multipliers
    pub day_of_week: DayOfWeekMultipliers,
    /// Fraction of the daily total arriving in each operating hour.
    /// One entry per operating hour; sums to 1.0.
    pub hourly_distribution: Vec<f64>,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            seasonal: SeasonalMultipliers::default(),
            day_of_week: DayOfWeekMultipliers::default(),
            // Morning ramp, 14:00 peak, dinner lull, closing taper.
            hourly_distribution: vec![
                0.06, 0.08, 0.10, 0.13, 0.17, 0.13, 0.10, 0.08, 0.06, 0.04, 0.03, 0.02,
            ],
        }
    }
}

impl Multipliers {
    /// Seasonal multiplier for a date, via its month bucket
    pub fn season_factor(&self, date: NaiveDate) -> f64 {
        match Season::from_month(date.month()) {
            Season::PeakSummer => self.seasonal.peak_summer,
            Season::Shoulder => self.seasonal.shoulder,
            Season::OffPeak => self.seasonal.off_peak,
        }
    }

    /// Day-of-week multiplier for a date
    pub fn day_factor(&self, date: NaiveDate) -> f64 {
        match DayKind::from_weekday(date.weekday()) {
            DayKind::Saturday => self.day_of_week.saturday,
            DayKind::Sunday => self.day_of_week.sunday,
            DayKind::Weekday => self.day_of_week.weekday,
        }
    }

    /// Intraday fraction for a 0-based hour index, or `None` when the index
    /// falls outside the operating window
    pub fn time_factor(&self, hour_index: usize) -> Option<f64> {
        self.hourly_distribution.get(hour_index).copied()
    }

    /// Sum of the intraday distribution (1.0 for a valid configuration)
    pub fn distribution_sum(&self) -> f64 {
        self.hourly_distribution.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_default_distribution_sums_to_one() {
        let multipliers = Multipliers::default();
        assert!((multipliers.distribution_sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_distribution_covers_twelve_hours() {
        let multipliers = Multipliers::default();
        assert_eq!(multipliers.hourly_distribution.len(), 12);
    }

    #[test]
    fn test_season_factor() {
        let multipliers = Multipliers::default();
        assert_eq!(multipliers.season_factor(date(2025, 7, 15)), 1.8);
        assert_eq!(multipliers.season_factor(date(2025, 5, 15)), 1.3);
        assert_eq!(multipliers.season_factor(date(2025, 10, 15)), 1.3);
        assert_eq!(multipliers.season_factor(date(2025, 1, 15)), 0.7);
    }

    #[test]
    fn test_day_factor() {
        let multipliers = Multipliers::default();
        // 2025-07-19 is a Saturday, 2025-07-20 a Sunday, 2025-07-21 a Monday
        assert_eq!(multipliers.day_factor(date(2025, 7, 19)), 1.4);
        assert_eq!(multipliers.day_factor(date(2025, 7, 20)), 1.2);
        assert_eq!(multipliers.day_factor(date(2025, 7, 21)), 1.0);
    }

    #[test]
    fn test_time_factor_bounds() {
        let multipliers = Multipliers::default();
        assert_eq!(multipliers.time_factor(0), Some(0.06));
        assert_eq!(multipliers.time_factor(4), Some(0.17));
        assert_eq!(multipliers.time_factor(11), Some(0.02));
        assert_eq!(multipliers.time_factor(12), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let multipliers = Multipliers::default();
        let json = serde_json::to_string(&multipliers).unwrap();
        let back: Multipliers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, multipliers);
    }
}
