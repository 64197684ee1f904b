//! Flight destinations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::asteroid::AsteroidId;
use super::position::Position;

/// Where a drone is heading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Target {
    Asteroid(AsteroidId),
    Mothership,
    /// An arbitrary point on the field.
    Point(Position),
}

impl Target {
    /// Returns the asteroid id if this target is an asteroid.
    pub fn asteroid(&self) -> Option<AsteroidId> {
        match self {
            Target::Asteroid(id) => Some(*id),
            Target::Mothership | Target::Point(_) => None,
        }
    }

    /// True if this target is the given asteroid.
    pub fn is_asteroid(&self, id: AsteroidId) -> bool {
        self.asteroid() == Some(id)
    }
}

impl From<AsteroidId> for Target {
    fn from(id: AsteroidId) -> Self {
        Target::Asteroid(id)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Asteroid(id) => write!(f, "{}", id),
            Target::Mothership => write!(f, "mothership"),
            Target::Point(p) => write!(f, "point {}", p),
        }
    }
}
