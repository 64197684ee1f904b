//! Asteroids: depletable resource deposits.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Index-like identifier of an asteroid within its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AsteroidId(pub usize);

impl fmt::Display for AsteroidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asteroid#{}", self.0)
    }
}

/// A resource deposit at a fixed position.
///
/// Drones only read asteroids; the host field mutates `payload` as resource
/// is extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub id: AsteroidId,
    pub position: Position,
    /// Remaining resource.
    pub payload: u32,
}

impl Asteroid {
    /// Creates a new asteroid.
    pub fn new(id: AsteroidId, position: Position, payload: u32) -> Self {
        Self {
            id,
            position,
            payload,
        }
    }

    /// True once every unit of resource has been extracted.
    pub fn is_empty(&self) -> bool {
        self.payload == 0
    }
}
