//! Per-ride configuration
//!
//! Each ride carries three behavioral constants: the fraction of hourly
//! park visitors who choose it, the throughput ceiling per hour, and the
//! daily breakdown probability.

use crate::types::{RideCategory, RideId};
use serde::{Deserialize, Serialize};

/// Immutable configuration of a single ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideConfig {
    /// Catalog identifier
    pub id: RideId,
    /// Display name
    pub name: String,
    /// Themed zone the ride belongs to
    pub zone: String,
    /// Attraction category
    pub category: RideCategory,
    /// Fraction of hourly park visitors who ride (0.0-1.0)
    pub attraction_rate: f64,
    /// Maximum boardings per operating hour
    pub capacity_cap: u32,
    /// Daily breakdown probability (0.0-1.0)
    pub failure_rate: f64,
}

impl RideConfig {
    /// URL-safe slug derived from the display name
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// Lowercase a name and collapse every non-alphanumeric run into a single
/// dash, trimming leading and trailing dashes
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ride() -> RideConfig {
        RideConfig {
            id: RideId(5),
            name: "Dragon Rider's Fury".to_string(),
            zone: "Medieval Fantasy Zone".to_string(),
            category: RideCategory::Coaster,
            attraction_rate: 0.048,
            capacity_cap: 1200,
            failure_rate: 0.06,
        }
    }

    #[test]
    fn test_slug_collapses_punctuation() {
        assert_eq!(sample_ride().slug(), "dragon-rider-s-fury");
    }

    #[test]
    fn test_slugify_edge_cases() {
        assert_eq!(slugify("Cosmic Collapse: Wormhole Jump"), "cosmic-collapse-wormhole-jump");
        assert_eq!(slugify("  Raptor Rapids  "), "raptor-rapids");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_serde_round_trip() {
        let ride = sample_ride();
        let json = serde_json::to_string(&ride).unwrap();
        assert!(json.contains("\"Coaster\""));

        let back: RideConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ride);
    }
}
