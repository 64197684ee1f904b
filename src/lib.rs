//! astrominer - reactive harvesting policy for asteroid-mining drone teams
//!
//! A drone reacts to lifecycle events from its host field (born, arrived at an
//! asteroid, loading complete, arrived at the mothership, unloading complete)
//! and decides where to fly next, when to load or unload, and when to stop.
//! Teammates avoid converging on the same asteroid, and the team keeps a
//! shared ledger of distance flown per cargo-fullness category.

pub mod config;
pub mod field;
pub mod policy;
pub mod sandbox;
pub mod stats;
pub mod team;

pub use config::HarvestConfig;
pub use field::{Asteroid, AsteroidId, Cargo, Field, FieldEvent, Position, Target, Teammate};
pub use policy::{Drone, DroneState, PolicyError, SelectionMode};
pub use sandbox::{RunSummary, Sandbox};
pub use stats::{FlightReport, Fullness, StatsLedger};
pub use team::Team;

/// Identifier type used for drones.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
