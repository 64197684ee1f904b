//! Planar positions on the field.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D position on the field `[0, W] × [0, H]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamps this position to lie within `[0, width] × [0, height]`.
    pub fn clamp_to_bounds(&mut self, width: f64, height: f64) {
        self.x = self.x.clamp(0.0, width);
        self.y = self.y.clamp(0.0, height);
    }

    /// Returns a new position clamped to the field bounds.
    pub fn clamped(mut self, width: f64, height: f64) -> Self {
        self.clamp_to_bounds(width, height);
        self
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
