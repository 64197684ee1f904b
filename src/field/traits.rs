//! The host field interface a drone reads from and issues requests to.

use super::asteroid::{Asteroid, AsteroidId};
use super::cargo::Cargo;
use super::target::Target;
use crate::stats::FlightReport;
use crate::Id;

/// Read-only view of a sibling drone.
#[derive(Debug, Clone, PartialEq)]
pub struct Teammate {
    pub id: Id,
    /// The target this teammate last published, if any.
    pub target: Option<Target>,
    pub cargo: Cargo,
}

impl Teammate {
    pub fn is_empty(&self) -> bool {
        self.cargo.is_empty()
    }

    /// True if this teammate is heading for the given asteroid.
    pub fn targets(&self, id: AsteroidId) -> bool {
        self.target.is_some_and(|t| t.is_asteroid(id))
    }
}

/// Environment a drone lives in.
///
/// Queries are always answered from the field's current state. Actions are
/// requests: each eventually yields a [`super::FieldEvent`] for the drone
/// (except `turn_to`, `stop`, and the publish calls, which yield none).
pub trait Field {
    // --- Queries ---

    /// Every asteroid on the field, in the field's native order.
    fn asteroids(&self) -> &[Asteroid];

    /// The other drones of `drone`'s team (never `drone` itself).
    fn teammates(&self, drone: &Id) -> Vec<Teammate>;

    /// Straight-line distance from `drone` to `target`.
    fn distance(&self, drone: &Id, target: &Target) -> f64;

    /// Current cargo of `drone`.
    fn cargo(&self, drone: &Id) -> Cargo;

    /// Looks up a single asteroid.
    fn asteroid(&self, id: AsteroidId) -> Option<&Asteroid> {
        self.asteroids().iter().find(|a| a.id == id)
    }

    // --- Actions ---

    /// Starts flying `drone` toward `target`.
    fn move_at(&mut self, drone: &Id, target: Target);

    /// Turns `drone` to face `target` without moving.
    fn turn_to(&mut self, drone: &Id, target: Target);

    /// Starts loading resource from an asteroid.
    fn load_from(&mut self, drone: &Id, asteroid: AsteroidId);

    /// Starts unloading all cargo into the mothership.
    fn unload_to(&mut self, drone: &Id);

    /// Halts `drone` permanently.
    fn stop(&mut self, drone: &Id);

    /// Makes `drone`'s current target visible to its teammates.
    fn publish_target(&mut self, drone: &Id, target: Option<Target>);

    /// Hands a statistics report to the field's console output.
    fn publish_report(&mut self, drone: &Id, report: &FlightReport);
}
