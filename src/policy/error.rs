use thiserror::Error;

use super::state::DroneState;
use crate::field::{AsteroidId, FieldEvent};
use crate::Id;

/// Errors raised while a drone makes a decision.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("No candidate asteroid available")]
    NoCandidate,

    #[error("Unknown asteroid: {0}")]
    UnknownAsteroid(AsteroidId),

    #[error("Drone {drone} cannot handle '{event}' while {state}")]
    UnexpectedEvent {
        drone: Id,
        state: DroneState,
        event: FieldEvent,
    },
}
