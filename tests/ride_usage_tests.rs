//! Tests for the ride usage model
//!
//! The capacity-binding scenario: a shoulder-season weekday peak hour puts
//! roughly 2210 visitors in the park. A low-rate ride draws ~106 boardings,
//! a heavy draw ~884, and a synthetic everyone-rides attraction must clamp
//! exactly at its capacity cap.

use park_attendance_simulator::types::{RideCategory, RideId};
use park_attendance_simulator::{RideConfig, RideUsageModel};

fn ride(id: u32, attraction_rate: f64, capacity_cap: u32) -> RideConfig {
    RideConfig {
        id: RideId(id),
        name: format!("Synthetic Ride {}", id),
        zone: "Test Zone".to_string(),
        category: RideCategory::Coaster,
        attraction_rate,
        capacity_cap,
        failure_rate: 0.05,
    }
}

// 10000 base * 1.3 shoulder * 1.0 weekday * 0.17 peak-hour fraction
const PEAK_HOUR_VISITORS: u32 = 2210;

#[test]
fn low_rate_ride_stays_well_under_capacity() {
    let model = RideUsageModel;
    let boardings = model.boardings(&ride(1, 0.048, 1200), PEAK_HOUR_VISITORS);
    assert_eq!(boardings, 106);
}

#[test]
fn heavy_draw_ride_still_fits_under_cap() {
    let model = RideUsageModel;
    let boardings = model.boardings(&ride(2, 0.40, 1200), PEAK_HOUR_VISITORS);
    assert_eq!(boardings, 884);
    assert!(boardings < 1200);
}

#[test]
fn everyone_rides_attraction_clamps_exactly_at_cap() {
    let model = RideUsageModel;
    let boardings = model.boardings(&ride(3, 1.0, 1200), PEAK_HOUR_VISITORS);
    assert_eq!(boardings, 1200);
}

#[test]
fn clamp_holds_across_the_noise_band() {
    let model = RideUsageModel;
    let synthetic = ride(3, 1.0, 1200);

    // Any visitor count the traffic model can emit for this hour
    // (2210 ± 5%) exceeds the cap, so the clamp must always bind.
    for visitors in 2099..=2321 {
        assert_eq!(model.boardings(&synthetic, visitors), 1200);
    }
}

#[test]
fn boardings_never_exceed_capacity_for_any_input() {
    let model = RideUsageModel;
    for rate in [0.0, 0.01, 0.25, 0.5, 0.99, 1.0] {
        let ride = ride(9, rate, 800);
        for visitors in (0..30_000).step_by(997) {
            assert!(model.boardings(&ride, visitors) <= 800);
        }
    }
}

#[test]
fn usage_model_is_deterministic() {
    let model = RideUsageModel;
    let ride = ride(4, 0.3, 1000);
    let first = model.boardings(&ride, 1234);
    for _ in 0..10 {
        assert_eq!(model.boardings(&ride, 1234), first);
    }
}
