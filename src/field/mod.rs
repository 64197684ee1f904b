//! Field model: asteroids, cargo, destinations, events, and the host
//! environment interface.

pub mod asteroid;
pub mod cargo;
pub mod event;
pub mod position;
pub mod target;
pub mod traits;

pub use asteroid::{Asteroid, AsteroidId};
pub use cargo::Cargo;
pub use event::FieldEvent;
pub use position::Position;
pub use target::Target;
pub use traits::{Field, Teammate};

#[cfg(test)]
pub(crate) mod mock;
