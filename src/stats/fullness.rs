//! Cargo-fullness categories used to bucket flown distance.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::Cargo;

/// How loaded a drone is when it starts a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Fullness {
    Full,
    Empty,
    BelowHalf,
    AboveHalf,
}

impl Fullness {
    /// Classifies a cargo hold.
    ///
    /// `Full` wins over `Empty` (only relevant for zero-capacity holds); a
    /// partial load is `BelowHalf` while `payload < half_load_threshold`.
    pub fn of(cargo: &Cargo, half_load_threshold: u32) -> Self {
        if cargo.is_full() {
            Fullness::Full
        } else if cargo.is_empty() {
            Fullness::Empty
        } else if cargo.payload < half_load_threshold {
            Fullness::BelowHalf
        } else {
            Fullness::AboveHalf
        }
    }

    /// Returns all categories in report order.
    pub fn all() -> [Fullness; 4] {
        [
            Fullness::Full,
            Fullness::Empty,
            Fullness::BelowHalf,
            Fullness::AboveHalf,
        ]
    }

    /// Returns the index of this category in [`Fullness::all`].
    pub fn index(&self) -> usize {
        match self {
            Fullness::Full => 0,
            Fullness::Empty => 1,
            Fullness::BelowHalf => 2,
            Fullness::AboveHalf => 3,
        }
    }
}

impl fmt::Display for Fullness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fullness::Full => write!(f, "full"),
            Fullness::Empty => write!(f, "empty"),
            Fullness::BelowHalf => write!(f, "< half-load"),
            Fullness::AboveHalf => write!(f, "> half-load"),
        }
    }
}
