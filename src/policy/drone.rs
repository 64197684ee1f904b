//! The drone: event handlers driving the harvesting cycle.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::error::PolicyError;
use super::selection::{self, SelectionMode};
use super::state::{Action, DroneState};
use crate::config::HarvestConfig;
use crate::field::{AsteroidId, Field, FieldEvent, Target};
use crate::stats::{Fullness, StatsLedger};
use crate::Id;

/// A harvesting drone.
///
/// The drone owns its decision state (target, lifecycle state, last valid
/// asteroid list); cargo and positions belong to the field. Every flight it
/// requests is recorded in the team's shared [`StatsLedger`] before the
/// request is issued.
#[derive(Debug, Clone)]
pub struct Drone {
    id: Id,
    state: DroneState,
    target: Option<Target>,
    valid_asteroids: Vec<AsteroidId>,
    ledger: StatsLedger,
    half_load_threshold: u32,
    rng: StdRng,
}

impl Drone {
    /// Creates an idle drone writing flight statistics into `ledger`.
    pub fn new(id: Id, ledger: StatsLedger, config: &HarvestConfig, seed: u64) -> Self {
        Self {
            id,
            state: DroneState::Idle,
            target: None,
            valid_asteroids: Vec::new(),
            ledger,
            half_load_threshold: config.half_load_threshold,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn state(&self) -> DroneState {
        self.state
    }

    /// The destination this drone last committed to.
    pub fn target(&self) -> Option<Target> {
        self.target
    }

    /// Valid asteroids as of the last refresh.
    pub fn valid_asteroids(&self) -> &[AsteroidId] {
        &self.valid_asteroids
    }

    pub fn ledger(&self) -> &StatsLedger {
        &self.ledger
    }

    /// Reacts to one field event.
    ///
    /// Events reaching a stopped drone are ignored.
    ///
    /// # Errors
    ///
    /// [`PolicyError::UnexpectedEvent`] if the event does not fit the
    /// current state, [`PolicyError::UnknownAsteroid`] if it names an
    /// asteroid the field does not know.
    pub fn handle<F: Field + ?Sized>(
        &mut self,
        event: FieldEvent,
        field: &mut F,
    ) -> Result<(), PolicyError> {
        if self.state.is_stopped() {
            debug!(drone = %self.id, %event, "ignoring event for stopped drone");
            return Ok(());
        }
        if !self.state.accepts(&event) {
            return Err(PolicyError::UnexpectedEvent {
                drone: self.id.clone(),
                state: self.state,
                event,
            });
        }
        debug!(drone = %self.id, state = %self.state, %event, "handling event");

        match event {
            FieldEvent::Born => self.on_born(field),
            FieldEvent::StoppedAtAsteroid(id) => self.on_stop_at_asteroid(id, field),
            FieldEvent::LoadComplete => self.on_load_complete(field),
            FieldEvent::StoppedAtMothership => self.on_stop_at_mothership(field),
            FieldEvent::UnloadComplete => self.on_unload_complete(field),
        }
    }

    fn on_born<F: Field + ?Sized>(&mut self, field: &mut F) -> Result<(), PolicyError> {
        self.refresh_valid(&*field);
        let target = if self.valid_asteroids.is_empty() {
            // Park at the mothership; the unload cycle there re-evaluates.
            warn!(drone = %self.id, "no free asteroid at birth, parking at mothership");
            Target::Mothership
        } else {
            Target::Asteroid(self.select(&*field, SelectionMode::Closest)?)
        };
        self.commit(field, target);
        Ok(())
    }

    fn on_stop_at_asteroid<F: Field + ?Sized>(
        &mut self,
        id: AsteroidId,
        field: &mut F,
    ) -> Result<(), PolicyError> {
        self.refresh_valid(&*field);
        let remaining = field
            .asteroid(id)
            .ok_or(PolicyError::UnknownAsteroid(id))?
            .payload;
        let cargo = field.cargo(&self.id);

        if cargo.free_space() <= remaining || self.valid_asteroids.is_empty() {
            self.turn_to(field, Target::Mothership);
        } else {
            let next = self.select(&*field, SelectionMode::Closest)?;
            self.turn_to(field, Target::Asteroid(next));
        }

        if remaining > 0 {
            self.load_from(field, id);
        } else if !cargo.is_empty() {
            let next = if self.valid_asteroids.is_empty() {
                Target::Mothership
            } else {
                Target::Asteroid(self.select(&*field, SelectionMode::Closest)?)
            };
            self.commit(field, next);
        } else if field.asteroids().iter().all(|a| a.is_empty()) {
            self.halt(field);
        } else {
            self.commit(field, Target::Mothership);
        }
        Ok(())
    }

    fn on_load_complete<F: Field + ?Sized>(&mut self, field: &mut F) -> Result<(), PolicyError> {
        self.refresh_valid(&*field);
        let target = if field.cargo(&self.id).is_full() || self.valid_asteroids.is_empty() {
            Target::Mothership
        } else {
            Target::Asteroid(self.select(&*field, SelectionMode::Closest)?)
        };
        self.commit(field, target);
        Ok(())
    }

    fn on_stop_at_mothership<F: Field + ?Sized>(
        &mut self,
        field: &mut F,
    ) -> Result<(), PolicyError> {
        self.unload_to(field);
        self.refresh_valid(&*field);
        // The next asteroid is chosen once unloading ends; face a random one.
        if !self.valid_asteroids.is_empty() {
            let heading = self.select(&*field, SelectionMode::Random)?;
            self.turn_to(field, Target::Asteroid(heading));
        }
        Ok(())
    }

    fn on_unload_complete<F: Field + ?Sized>(
        &mut self,
        field: &mut F,
    ) -> Result<(), PolicyError> {
        self.refresh_valid(&*field);
        let valid = self.valid_asteroids.clone();
        let next = match valid.as_slice() {
            [] => {
                self.halt(field);
                return Ok(());
            }
            [only] => *only,
            many => {
                let near = selection::median_split(&*field, &self.id, many);
                selection::max_payload(&*field, &near)?
            }
        };
        self.commit(field, Target::Asteroid(next));
        Ok(())
    }

    fn refresh_valid<F: Field + ?Sized>(&mut self, field: &F) {
        self.valid_asteroids = selection::valid_targets(field, &self.id);
    }

    /// Refreshes the valid list and picks from it.
    fn select<F: Field + ?Sized>(
        &mut self,
        field: &F,
        mode: SelectionMode,
    ) -> Result<AsteroidId, PolicyError> {
        self.refresh_valid(field);
        selection::select(field, &self.id, &self.valid_asteroids, mode, &mut self.rng)
    }

    /// Sets and publishes `target`, then flies there.
    fn commit<F: Field + ?Sized>(&mut self, field: &mut F, target: Target) {
        self.set_target(field, Some(target));
        self.move_at(field, target);
    }

    fn set_target<F: Field + ?Sized>(&mut self, field: &mut F, target: Option<Target>) {
        self.target = target;
        field.publish_target(&self.id, target);
    }

    fn move_at<F: Field + ?Sized>(&mut self, field: &mut F, target: Target) {
        let fullness = Fullness::of(&field.cargo(&self.id), self.half_load_threshold);
        let distance = field.distance(&self.id, &target);
        self.ledger.record(fullness, distance);
        field.move_at(&self.id, target);
        self.apply(Action::Move(target));
    }

    fn turn_to<F: Field + ?Sized>(&mut self, field: &mut F, target: Target) {
        field.turn_to(&self.id, target);
        self.apply(Action::Turn(target));
    }

    fn load_from<F: Field + ?Sized>(&mut self, field: &mut F, id: AsteroidId) {
        field.load_from(&self.id, id);
        self.apply(Action::Load(id));
    }

    fn unload_to<F: Field + ?Sized>(&mut self, field: &mut F) {
        field.unload_to(&self.id);
        self.apply(Action::Unload);
    }

    /// Stops for good, releases the target, and reports if the team is done.
    fn halt<F: Field + ?Sized>(&mut self, field: &mut F) {
        field.stop(&self.id);
        self.apply(Action::Stop);
        self.set_target(field, None);
        info!(drone = %self.id, "drone stopped");
        self.report_if_team_empty(field);
    }

    fn report_if_team_empty<F: Field + ?Sized>(&self, field: &mut F) {
        let team_empty = field.cargo(&self.id).is_empty()
            && field.teammates(&self.id).iter().all(|mate| mate.is_empty());
        if !team_empty {
            return;
        }
        match self.ledger.report() {
            Some(report) => {
                info!(
                    drone = %self.id,
                    total_distance = report.total_distance,
                    "team is empty, publishing flight report"
                );
                field.publish_report(&self.id, &report);
            }
            None => warn!(drone = %self.id, "no distance flown, skipping flight report"),
        }
    }

    /// Forces the lifecycle state, for driving handlers in isolation.
    #[cfg(test)]
    pub(crate) fn in_state(mut self, state: DroneState) -> Self {
        self.state = state;
        self
    }

    fn apply(&mut self, action: Action) {
        let next = self.state.after(&action);
        if next != self.state {
            debug!(drone = %self.id, from = %self.state, to = %next, ?action, "transition");
        }
        self.state = next;
    }
}
