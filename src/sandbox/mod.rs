//! Self-contained field simulation for running a team end to end.
//!
//! The sandbox plays the host environment: it scatters asteroids, parks the
//! team at the mothership, delivers `Born` to every drone and then dispatches
//! queued events in FIFO order until every drone has stopped.

pub mod world;

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::HarvestConfig;
use crate::field::{Asteroid, FieldEvent, Position};
use crate::policy::PolicyError;
use crate::stats::FlightReport;
use crate::team::Team;
use crate::Id;

pub use world::{DroneBody, World};

/// Outcome of a sandbox run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Events delivered to drones.
    pub events_dispatched: usize,
    /// Resource delivered to the mothership.
    pub collected: u64,
    /// Resource left in asteroids.
    pub remaining: u64,
    pub stopped_drones: usize,
    /// Whether the run ended because the event budget ran out.
    pub budget_exhausted: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Sandbox Run ===")?;
        writeln!(f, "  Events dispatched: {}", self.events_dispatched)?;
        writeln!(f, "  Collected:         {}", self.collected)?;
        writeln!(f, "  Remaining:         {}", self.remaining)?;
        writeln!(f, "  Stopped drones:    {}", self.stopped_drones)?;
        if self.budget_exhausted {
            writeln!(f, "  (event budget exhausted)")?;
        }
        Ok(())
    }
}

/// A team dropped into an in-memory field.
#[derive(Debug, Clone)]
pub struct Sandbox {
    config: HarvestConfig,
    world: World,
    team: Team,
}

impl Sandbox {
    /// Builds a randomly scattered scene from `config`.
    pub fn new(config: HarvestConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let asteroids = World::scatter_asteroids(&mut rng, &config);
        let mothership = config
            .mothership_position
            .clamped(config.field_width, config.field_height);
        let team = Team::new(&config);
        Self::assemble(config, asteroids, mothership, team)
    }

    /// Builds a scene with a fixed layout and drones named by `ids`.
    pub fn with_layout(
        config: HarvestConfig,
        asteroids: Vec<Asteroid>,
        mothership: Position,
        ids: Vec<Id>,
    ) -> Self {
        let team = Team::with_ids(ids, &config);
        Self::assemble(config, asteroids, mothership, team)
    }

    fn assemble(
        config: HarvestConfig,
        asteroids: Vec<Asteroid>,
        mothership: Position,
        team: Team,
    ) -> Self {
        let ids: Vec<Id> = team.drones().iter().map(|d| d.id().clone()).collect();
        let world = World::new(asteroids, mothership, &ids, config.drone_capacity);
        Self {
            config,
            world,
            team,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Reports published by drones so far.
    pub fn reports(&self) -> impl Iterator<Item = &FlightReport> {
        self.world.reports.iter().map(|(_, r)| r)
    }

    /// Runs the scene until no events remain or the budget is spent.
    ///
    /// # Errors
    ///
    /// Propagates the first [`PolicyError`] a drone raises.
    pub fn run(&mut self) -> Result<RunSummary, PolicyError> {
        for index in 0..self.team.len() {
            self.world.queue.push_back((index, FieldEvent::Born));
        }

        let mut events_dispatched = 0;
        while let Some((index, event)) = self.world.queue.pop_front() {
            if events_dispatched >= self.config.max_events {
                warn!(
                    budget = self.config.max_events,
                    "event budget exhausted, halting sandbox"
                );
                self.world.queue.push_front((index, event));
                break;
            }
            self.team.dispatch(index, event, &mut self.world)?;
            events_dispatched += 1;
        }

        let summary = RunSummary {
            events_dispatched,
            collected: self.world.collected,
            remaining: self.world.remaining_payload(),
            stopped_drones: self.team.stopped_count(),
            budget_exhausted: !self.world.queue.is_empty(),
        };
        info!(
            events = summary.events_dispatched,
            collected = summary.collected,
            remaining = summary.remaining,
            stopped = summary.stopped_drones,
            "sandbox run finished"
        );
        Ok(summary)
    }
}
