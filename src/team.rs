//! Team setup: drones sharing one statistics ledger.

use tracing::info;

use crate::config::HarvestConfig;
use crate::field::{Field, FieldEvent};
use crate::policy::{Drone, PolicyError};
use crate::stats::StatsLedger;
use crate::{generate_id, Id};

/// A team of drones running the same policy.
///
/// The team constructs a single [`StatsLedger`] and injects a handle into
/// every drone, so flight statistics are aggregated team-wide.
#[derive(Debug, Clone)]
pub struct Team {
    drones: Vec<Drone>,
    ledger: StatsLedger,
}

impl Team {
    /// Builds `config.team_size` drones with freshly generated ids.
    pub fn new(config: &HarvestConfig) -> Self {
        let ids = (0..config.team_size).map(|_| generate_id()).collect();
        Self::with_ids(ids, config)
    }

    /// Builds one drone per id, in order.
    pub fn with_ids(ids: Vec<Id>, config: &HarvestConfig) -> Self {
        let ledger = StatsLedger::new();
        let drones: Vec<Drone> = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| Drone::new(id, ledger.clone(), config, config.seed_for(i)))
            .collect();
        info!(drones = drones.len(), "team assembled");
        Self { drones, ledger }
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    pub fn drone(&self, index: usize) -> Option<&Drone> {
        self.drones.get(index)
    }

    /// The ledger shared by every drone of the team.
    pub fn ledger(&self) -> &StatsLedger {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.drones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drones.is_empty()
    }

    /// Position of the drone with the given id.
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.drones.iter().position(|d| d.id() == id)
    }

    /// Number of drones that have halted for good.
    pub fn stopped_count(&self) -> usize {
        self.drones.iter().filter(|d| d.state().is_stopped()).count()
    }

    /// Delivers `event` to the drone at `index`. Unknown indices are ignored.
    pub fn dispatch<F: Field + ?Sized>(
        &mut self,
        index: usize,
        event: FieldEvent,
        field: &mut F,
    ) -> Result<(), PolicyError> {
        match self.drones.get_mut(index) {
            Some(drone) => drone.handle(event, field),
            None => Ok(()),
        }
    }
}
