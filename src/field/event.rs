//! Lifecycle events delivered by the host field.

use std::fmt;

use super::asteroid::AsteroidId;

/// A lifecycle notification for one drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The drone was created; delivered exactly once.
    Born,
    /// The drone arrived at an asteroid.
    StoppedAtAsteroid(AsteroidId),
    /// The drone finished loading.
    LoadComplete,
    /// The drone arrived at its mothership.
    StoppedAtMothership,
    /// The drone finished unloading.
    UnloadComplete,
}

impl fmt::Display for FieldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldEvent::Born => write!(f, "born"),
            FieldEvent::StoppedAtAsteroid(id) => write!(f, "stopped at {}", id),
            FieldEvent::LoadComplete => write!(f, "load complete"),
            FieldEvent::StoppedAtMothership => write!(f, "stopped at mothership"),
            FieldEvent::UnloadComplete => write!(f, "unload complete"),
        }
    }
}
