//! Explicit drone lifecycle states and their transition table.

use std::fmt;

use crate::field::{AsteroidId, FieldEvent, Target};

/// A request a drone issues to its field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Move(Target),
    Turn(Target),
    Load(AsteroidId),
    Unload,
    Stop,
}

/// Where a drone is in its harvesting cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DroneState {
    /// Created, waiting for `Born`.
    Idle,
    /// Flying toward an asteroid.
    Seeking,
    Loading,
    /// Flying toward the mothership.
    Returning,
    Unloading,
    /// Permanently halted; every further event is ignored.
    Stopped,
}

impl DroneState {
    /// Whether `event` is expected in this state.
    pub fn accepts(&self, event: &FieldEvent) -> bool {
        matches!(
            (self, event),
            (DroneState::Idle, FieldEvent::Born)
                | (DroneState::Seeking, FieldEvent::StoppedAtAsteroid(_))
                | (DroneState::Loading, FieldEvent::LoadComplete)
                | (DroneState::Returning, FieldEvent::StoppedAtMothership)
                | (DroneState::Unloading, FieldEvent::UnloadComplete)
        )
    }

    /// State reached after issuing `action`.
    ///
    /// Turning only changes heading, so it keeps the current state.
    pub fn after(self, action: &Action) -> DroneState {
        if self == DroneState::Stopped {
            return self;
        }
        match action {
            Action::Move(Target::Mothership) => DroneState::Returning,
            Action::Move(Target::Asteroid(_)) | Action::Move(Target::Point(_)) => {
                DroneState::Seeking
            }
            Action::Turn(_) => self,
            Action::Load(_) => DroneState::Loading,
            Action::Unload => DroneState::Unloading,
            Action::Stop => DroneState::Stopped,
        }
    }

    pub fn is_stopped(&self) -> bool {
        *self == DroneState::Stopped
    }
}

impl fmt::Display for DroneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DroneState::Idle => write!(f, "idle"),
            DroneState::Seeking => write!(f, "seeking"),
            DroneState::Loading => write!(f, "loading"),
            DroneState::Returning => write!(f, "returning"),
            DroneState::Unloading => write!(f, "unloading"),
            DroneState::Stopped => write!(f, "stopped"),
        }
    }
}
