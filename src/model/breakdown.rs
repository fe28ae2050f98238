//! Breakdown model
//!
//! One Bernoulli trial per ride per simulated day: a single uniform draw
//! against the ride's configured failure rate. Trials are independent
//! across rides and across days; there is no retry or follow-up modeling.

use crate::park::RideConfig;
use rand::Rng;

/// Daily breakdown check
#[derive(Debug, Default, Clone, Copy)]
pub struct BreakdownModel;

impl BreakdownModel {
    /// Report whether the ride breaks down on the simulated day
    pub fn check<R: Rng>(&self, ride: &RideConfig, rng: &mut R) -> bool {
        rng.gen::<f64>() < ride.failure_rate
    }
}
