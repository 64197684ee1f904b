//! In-memory field state: asteroids, drone bodies, and the event queue.

use std::collections::VecDeque;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::HarvestConfig;
use crate::field::{Asteroid, AsteroidId, Cargo, Field, FieldEvent, Position, Target, Teammate};
use crate::stats::FlightReport;
use crate::Id;

/// Physical state of one drone.
#[derive(Debug, Clone)]
pub struct DroneBody {
    pub id: Id,
    pub position: Position,
    /// Where the drone last turned to face.
    pub heading: Option<Target>,
    pub cargo: Cargo,
    /// Target published for teammates.
    pub target: Option<Target>,
    pub stopped: bool,
    /// Total distance flown.
    pub odometer: f64,
}

impl DroneBody {
    fn new(id: Id, position: Position, capacity: u32) -> Self {
        Self {
            id,
            position,
            heading: None,
            cargo: Cargo::empty(capacity),
            target: None,
            stopped: false,
            odometer: 0.0,
        }
    }
}

/// The sandbox's implementation of [`Field`].
///
/// Flights complete instantly: a move relocates the drone and queues its
/// arrival event. Loading and unloading likewise settle immediately and queue
/// their completion event, so teammates' events interleave in FIFO order.
#[derive(Debug, Clone)]
pub struct World {
    pub asteroids: Vec<Asteroid>,
    pub mothership: Position,
    pub bodies: Vec<DroneBody>,
    /// Resource delivered to the mothership.
    pub collected: u64,
    pub reports: Vec<(Id, FlightReport)>,
    pub(super) queue: VecDeque<(usize, FieldEvent)>,
}

impl World {
    /// Creates a field with the given asteroids and one body per drone id,
    /// all parked at the mothership.
    pub fn new(asteroids: Vec<Asteroid>, mothership: Position, ids: &[Id], capacity: u32) -> Self {
        let bodies = ids
            .iter()
            .map(|id| DroneBody::new(id.clone(), mothership, capacity))
            .collect();
        Self {
            asteroids,
            mothership,
            bodies,
            collected: 0,
            reports: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Scatters `config.asteroid_count` asteroids uniformly over the field.
    pub fn scatter_asteroids<R: Rng>(rng: &mut R, config: &HarvestConfig) -> Vec<Asteroid> {
        let low = config.min_asteroid_payload.min(config.max_asteroid_payload);
        let high = config.max_asteroid_payload.max(low);
        (0..config.asteroid_count)
            .map(|i| {
                let position = Position::new(
                    rng.gen_range(0.0..=config.field_width),
                    rng.gen_range(0.0..=config.field_height),
                );
                Asteroid::new(AsteroidId(i), position, rng.gen_range(low..=high))
            })
            .collect()
    }

    /// Resource still sitting in asteroids.
    pub fn remaining_payload(&self) -> u64 {
        self.asteroids.iter().map(|a| a.payload as u64).sum()
    }

    fn index_of(&self, drone: &Id) -> Option<usize> {
        self.bodies.iter().position(|b| &b.id == drone)
    }

    fn body(&self, drone: &Id) -> Option<&DroneBody> {
        self.bodies.iter().find(|b| &b.id == drone)
    }

    /// Body that may still act; stopped or unknown drones yield `None`.
    fn active_body(&mut self, drone: &Id) -> Option<(usize, &mut DroneBody)> {
        let Some(index) = self.index_of(drone) else {
            warn!(%drone, "request from unknown drone");
            return None;
        };
        let body = &mut self.bodies[index];
        if body.stopped {
            warn!(%drone, "request from stopped drone");
            return None;
        }
        Some((index, body))
    }

    fn position_of(&self, target: &Target) -> Option<Position> {
        match target {
            Target::Asteroid(id) => self.asteroid(*id).map(|a| a.position),
            Target::Mothership => Some(self.mothership),
            Target::Point(p) => Some(*p),
        }
    }
}

impl Field for World {
    fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    fn teammates(&self, drone: &Id) -> Vec<Teammate> {
        self.bodies
            .iter()
            .filter(|b| &b.id != drone)
            .map(|b| Teammate {
                id: b.id.clone(),
                target: b.target,
                cargo: b.cargo,
            })
            .collect()
    }

    fn distance(&self, drone: &Id, target: &Target) -> f64 {
        match (self.body(drone), self.position_of(target)) {
            (Some(body), Some(to)) => body.position.distance_to(&to),
            _ => 0.0,
        }
    }

    fn cargo(&self, drone: &Id) -> Cargo {
        self.body(drone).map(|b| b.cargo).unwrap_or(Cargo::empty(0))
    }

    fn move_at(&mut self, drone: &Id, target: Target) {
        let Some(to) = self.position_of(&target) else {
            warn!(%drone, %target, "move toward unknown destination");
            return;
        };
        let Some((index, body)) = self.active_body(drone) else {
            return;
        };
        body.odometer += body.position.distance_to(&to);
        body.position = to;
        let arrival = match target {
            Target::Asteroid(id) => Some(FieldEvent::StoppedAtAsteroid(id)),
            Target::Mothership => Some(FieldEvent::StoppedAtMothership),
            Target::Point(_) => None,
        };
        if let Some(event) = arrival {
            self.queue.push_back((index, event));
        }
    }

    fn turn_to(&mut self, drone: &Id, target: Target) {
        if let Some((_, body)) = self.active_body(drone) {
            body.heading = Some(target);
        }
    }

    fn load_from(&mut self, drone: &Id, asteroid: AsteroidId) {
        let Some((index, _)) = self.active_body(drone) else {
            return;
        };
        let Some(rock) = self.asteroids.iter_mut().find(|a| a.id == asteroid) else {
            warn!(%drone, %asteroid, "load from unknown asteroid");
            return;
        };
        let body = &mut self.bodies[index];
        let taken = body.cargo.load(rock.payload);
        rock.payload -= taken;
        debug!(%drone, %asteroid, taken, left = rock.payload, "loaded");
        self.queue.push_back((index, FieldEvent::LoadComplete));
    }

    fn unload_to(&mut self, drone: &Id) {
        let Some((index, body)) = self.active_body(drone) else {
            return;
        };
        let delivered = body.cargo.unload();
        self.collected += delivered as u64;
        debug!(%drone, delivered, "unloaded");
        self.queue.push_back((index, FieldEvent::UnloadComplete));
    }

    fn stop(&mut self, drone: &Id) {
        if let Some((_, body)) = self.active_body(drone) {
            body.stopped = true;
        }
    }

    fn publish_target(&mut self, drone: &Id, target: Option<Target>) {
        if let Some(index) = self.index_of(drone) {
            self.bodies[index].target = target;
        }
    }

    fn publish_report(&mut self, drone: &Id, report: &FlightReport) {
        for line in report.to_string().lines() {
            info!(%drone, "{}", line);
        }
        self.reports.push((drone.clone(), report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn world() -> World {
        let asteroids = vec![
            Asteroid::new(AsteroidId(0), Position::new(3.0, 4.0), 120),
            Asteroid::new(AsteroidId(1), Position::new(10.0, 0.0), 30),
        ];
        World::new(
            asteroids,
            Position::new(0.0, 0.0),
            &["a".to_string(), "b".to_string()],
            100,
        )
    }

    #[test]
    fn move_relocates_and_queues_arrival() {
        let mut w = world();
        let a = "a".to_string();
        assert_eq!(w.distance(&a, &Target::Asteroid(AsteroidId(0))), 5.0);
        w.move_at(&a, Target::Asteroid(AsteroidId(0)));
        assert_eq!(w.bodies[0].position, Position::new(3.0, 4.0));
        assert_eq!(w.bodies[0].odometer, 5.0);
        assert_eq!(
            w.queue.pop_front(),
            Some((0, FieldEvent::StoppedAtAsteroid(AsteroidId(0))))
        );
    }

    #[test]
    fn load_takes_what_fits() {
        let mut w = world();
        let a = "a".to_string();
        w.load_from(&a, AsteroidId(0));
        assert_eq!(w.cargo(&a).payload, 100);
        assert_eq!(w.asteroids[0].payload, 20);
        assert_eq!(w.queue.pop_front(), Some((0, FieldEvent::LoadComplete)));
    }

    #[test]
    fn unload_delivers_to_mothership() {
        let mut w = world();
        let b = "b".to_string();
        w.load_from(&b, AsteroidId(1));
        w.unload_to(&b);
        assert_eq!(w.collected, 30);
        assert!(w.cargo(&b).is_empty());
        assert_eq!(w.remaining_payload(), 120);
    }

    #[test]
    fn teammates_exclude_self_and_expose_targets() {
        let mut w = world();
        let a = "a".to_string();
        let b = "b".to_string();
        w.publish_target(&b, Some(Target::Asteroid(AsteroidId(1))));
        let mates = w.teammates(&a);
        assert_eq!(mates.len(), 1);
        assert_eq!(mates[0].id, b);
        assert!(mates[0].targets(AsteroidId(1)));
    }

    #[test]
    fn stopped_drone_requests_are_dropped() {
        let mut w = world();
        let a = "a".to_string();
        w.stop(&a);
        w.move_at(&a, Target::Mothership);
        w.load_from(&a, AsteroidId(0));
        assert!(w.queue.is_empty());
        assert_eq!(w.asteroids[0].payload, 120);
    }

    #[test]
    fn scattered_asteroids_respect_config() {
        let config = HarvestConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let rocks = World::scatter_asteroids(&mut rng, &config);
        assert_eq!(rocks.len(), config.asteroid_count);
        for rock in rocks {
            assert!(rock.payload >= config.min_asteroid_payload);
            assert!(rock.payload <= config.max_asteroid_payload);
            assert!(rock.position.x <= config.field_width);
            assert!(rock.position.y <= config.field_height);
        }
    }
}
