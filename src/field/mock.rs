//! Scripted field for unit tests: fixed positions, recorded requests.

use super::{Asteroid, AsteroidId, Cargo, Field, Position, Target, Teammate};
use crate::policy::state::Action;
use crate::stats::FlightReport;
use crate::Id;

/// A field holding one drone under test plus static teammates.
///
/// Requests are recorded, never executed: cargo and asteroid payloads only
/// change when a test edits them.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedField {
    pub drone_position: Position,
    pub mothership: Position,
    pub asteroids: Vec<Asteroid>,
    pub cargo: Cargo,
    pub teammates: Vec<Teammate>,
    pub actions: Vec<Action>,
    pub published: Vec<Option<Target>>,
    pub reports: Vec<FlightReport>,
}

impl ScriptedField {
    /// Drone at the origin, asteroids on the x axis at the given distances.
    pub fn on_axis(distances: &[f64], payloads: &[u32]) -> Self {
        let asteroids = distances
            .iter()
            .zip(payloads)
            .enumerate()
            .map(|(i, (d, p))| Asteroid::new(AsteroidId(i), Position::new(*d, 0.0), *p))
            .collect();
        Self {
            drone_position: Position::new(0.0, 0.0),
            mothership: Position::new(0.0, 20.0),
            asteroids,
            cargo: Cargo::empty(100),
            teammates: Vec::new(),
            actions: Vec::new(),
            published: Vec::new(),
            reports: Vec::new(),
        }
    }

    pub fn with_cargo(mut self, payload: u32) -> Self {
        self.cargo = Cargo::new(payload, self.cargo.capacity);
        self
    }

    /// Adds an empty teammate heading for `target`.
    pub fn with_teammate(mut self, target: Option<Target>) -> Self {
        let id = format!("mate-{}", self.teammates.len());
        self.teammates.push(Teammate {
            id,
            target,
            cargo: Cargo::empty(100),
        });
        self
    }

    pub fn last_move(&self) -> Option<Target> {
        self.actions.iter().rev().find_map(|a| match a {
            Action::Move(t) => Some(*t),
            _ => None,
        })
    }

    pub fn moves(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::Move(_)))
            .count()
    }

    pub fn stopped(&self) -> bool {
        self.actions.contains(&Action::Stop)
    }

    fn position_of(&self, target: &Target) -> Position {
        match target {
            Target::Asteroid(id) => self
                .asteroid(*id)
                .map(|a| a.position)
                .unwrap_or(self.drone_position),
            Target::Mothership => self.mothership,
            Target::Point(p) => *p,
        }
    }
}

impl Field for ScriptedField {
    fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    fn teammates(&self, _drone: &Id) -> Vec<Teammate> {
        self.teammates.clone()
    }

    fn distance(&self, _drone: &Id, target: &Target) -> f64 {
        self.drone_position.distance_to(&self.position_of(target))
    }

    fn cargo(&self, _drone: &Id) -> Cargo {
        self.cargo
    }

    fn move_at(&mut self, _drone: &Id, target: Target) {
        self.actions.push(Action::Move(target));
    }

    fn turn_to(&mut self, _drone: &Id, target: Target) {
        self.actions.push(Action::Turn(target));
    }

    fn load_from(&mut self, _drone: &Id, asteroid: AsteroidId) {
        self.actions.push(Action::Load(asteroid));
    }

    fn unload_to(&mut self, _drone: &Id) {
        self.actions.push(Action::Unload);
    }

    fn stop(&mut self, _drone: &Id) {
        self.actions.push(Action::Stop);
    }

    fn publish_target(&mut self, _drone: &Id, target: Option<Target>) {
        self.published.push(target);
    }

    fn publish_report(&mut self, _drone: &Id, report: &FlightReport) {
        self.reports.push(report.clone());
    }
}
