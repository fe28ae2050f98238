//! Ride usage model
//!
//! Converts an hour's visitor count into boardings for one ride. The
//! potential demand is the visitor count scaled by the ride's attraction
//! rate; the result is clamped at the ride's hourly capacity cap. No
//! randomness is involved.

use crate::park::RideConfig;

/// Per-ride boarding count model
#[derive(Debug, Default, Clone, Copy)]
pub struct RideUsageModel;

impl RideUsageModel {
    /// Boardings for one ride in one operating hour.
    ///
    /// Always within `0..=ride.capacity_cap`.
    pub fn boardings(&self, ride: &RideConfig, hourly_visitors: u32) -> u32 {
        let potential = hourly_visitors as f64 * ride.attraction_rate;
        (potential.round() as u32).min(ride.capacity_cap)
    }
}
