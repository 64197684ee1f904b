//! Asteroid selection heuristics.
//!
//! All functions read the field fresh; nothing here caches state between
//! events. Ties always resolve to the first candidate in field order.

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::PolicyError;
use crate::field::{AsteroidId, Field, Target};
use crate::Id;

/// How [`select`] picks among valid asteroids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Closest,
    Far,
    /// Uniformly random.
    Random,
}

/// Asteroids that still hold resource and that no teammate is heading for,
/// in the field's native order.
pub fn valid_targets<F: Field + ?Sized>(field: &F, drone: &Id) -> Vec<AsteroidId> {
    let teammates = field.teammates(drone);
    field
        .asteroids()
        .iter()
        .filter(|a| !a.is_empty())
        .filter(|a| !teammates.iter().any(|mate| mate.targets(a.id)))
        .map(|a| a.id)
        .collect()
}

/// Distances from `drone` to each candidate, in candidate order.
pub fn distances<F: Field + ?Sized>(field: &F, drone: &Id, candidates: &[AsteroidId]) -> Vec<f64> {
    candidates
        .iter()
        .map(|id| field.distance(drone, &Target::Asteroid(*id)))
        .collect()
}

/// Picks one candidate according to `mode`.
///
/// # Errors
///
/// [`PolicyError::NoCandidate`] if `candidates` is empty.
pub fn select<F, R>(
    field: &F,
    drone: &Id,
    candidates: &[AsteroidId],
    mode: SelectionMode,
    rng: &mut R,
) -> Result<AsteroidId, PolicyError>
where
    F: Field + ?Sized,
    R: Rng + ?Sized,
{
    let index = match mode {
        SelectionMode::Closest => index_of_min(&distances(field, drone, candidates)),
        SelectionMode::Far => index_of_max(&distances(field, drone, candidates)),
        SelectionMode::Random => return candidates.choose(rng).copied().ok_or(PolicyError::NoCandidate),
    };
    index
        .map(|i| candidates[i])
        .ok_or(PolicyError::NoCandidate)
}

/// The nearer part of `candidates`: every candidate whose distance is at
/// most the median distance.
///
/// The comparison is inclusive, so an even-sized set may keep more than half
/// of its members when distances tie around the median. A single candidate
/// is returned unchanged.
pub fn median_split<F: Field + ?Sized>(
    field: &F,
    drone: &Id,
    candidates: &[AsteroidId],
) -> Vec<AsteroidId> {
    if candidates.len() <= 1 {
        return candidates.to_vec();
    }
    let dists = distances(field, drone, candidates);
    let Some(cut) = median(&dists) else {
        return candidates.to_vec();
    };
    candidates
        .iter()
        .zip(&dists)
        .filter(|(_, d)| **d <= cut)
        .map(|(id, _)| *id)
        .collect()
}

/// The candidate with the most remaining resource.
///
/// # Errors
///
/// [`PolicyError::NoCandidate`] if `candidates` is empty,
/// [`PolicyError::UnknownAsteroid`] if a candidate is not on the field.
pub fn max_payload<F: Field + ?Sized>(
    field: &F,
    candidates: &[AsteroidId],
) -> Result<AsteroidId, PolicyError> {
    let mut best: Option<(AsteroidId, u32)> = None;
    for id in candidates {
        let payload = field
            .asteroid(*id)
            .ok_or(PolicyError::UnknownAsteroid(*id))?
            .payload;
        if best.map_or(true, |(_, top)| payload > top) {
            best = Some((*id, payload));
        }
    }
    best.map(|(id, _)| id).ok_or(PolicyError::NoCandidate)
}

/// Statistical median; the mean of the two middle values for even sizes.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Index of the first minimum.
fn index_of_min(values: &[f64]) -> Option<usize> {
    first_extreme(values, |candidate, best| candidate < best)
}

/// Index of the first maximum.
fn index_of_max(values: &[f64]) -> Option<usize> {
    first_extreme(values, |candidate, best| candidate > best)
}

fn first_extreme(values: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, v) in values.iter().enumerate() {
        if best.map_or(true, |b| better(*v, values[b])) {
            best = Some(i);
        }
    }
    best
}
