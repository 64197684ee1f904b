//! Drone decision policy: event handlers, target selection, and the explicit
//! lifecycle state machine.

pub mod drone;
pub mod error;
pub mod selection;
pub mod state;

pub use drone::Drone;
pub use error::PolicyError;
pub use selection::{max_payload, median_split, select, valid_targets, SelectionMode};
pub use state::{Action, DroneState};
