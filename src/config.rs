//! Configuration for drone teams and the sandbox field.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::Position;

/// Configuration for a harvesting team and the scene it is dropped into.
///
/// Controls team composition, cargo dynamics, statistics bucketing and the
/// layout of the sandbox field used by tests and demos.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HarvestConfig {
    // --- Team ---
    /// Number of drones in the team.
    pub team_size: usize,
    /// Cargo capacity of every drone.
    pub drone_capacity: u32,
    /// Payload below which a partially loaded drone counts as `< half-load`.
    pub half_load_threshold: u32,
    /// Base seed for the per-drone random asteroid picks.
    pub seed: u64,

    // --- Scene ---
    /// Width of the field.
    pub field_width: f64,
    /// Height of the field.
    pub field_height: f64,
    /// Number of asteroids scattered on the field.
    pub asteroid_count: usize,
    /// Smallest payload an asteroid may be spawned with.
    pub min_asteroid_payload: u32,
    /// Largest payload an asteroid may be spawned with.
    pub max_asteroid_payload: u32,
    /// Where the team's mothership sits.
    pub mothership_position: Position,
    /// Upper bound on dispatched events per sandbox run.
    pub max_events: usize,
}

impl HarvestConfig {
    /// Seed for the drone at `index`, derived from the base seed.
    pub fn seed_for(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            team_size: 5,
            drone_capacity: 100,
            half_load_threshold: 50,
            seed: 42,
            field_width: 1200.0,
            field_height: 900.0,
            asteroid_count: 20,
            min_asteroid_payload: 50,
            max_asteroid_payload: 300,
            mothership_position: Position::new(90.0, 90.0),
            max_events: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = HarvestConfig::default();
        assert!(cfg.team_size > 0);
        assert!(cfg.drone_capacity > cfg.half_load_threshold);
        assert!(cfg.min_asteroid_payload <= cfg.max_asteroid_payload);
        assert!(cfg.field_width > 0.0 && cfg.field_height > 0.0);
    }

    #[test]
    fn seeds_differ_per_drone() {
        let cfg = HarvestConfig::default();
        assert_ne!(cfg.seed_for(0), cfg.seed_for(1));
    }

    #[test]
    fn seed_for_wraps() {
        let cfg = HarvestConfig {
            seed: u64::MAX,
            ..HarvestConfig::default()
        };
        assert_eq!(cfg.seed_for(1), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_survives_json() {
        let cfg = HarvestConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let restored: HarvestConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cfg);
    }
}
