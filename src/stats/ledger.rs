//! Team-wide ledger of distance flown per fullness category.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::fullness::Fullness;
use super::report::FlightReport;

/// Shared distance ledger.
///
/// Cloning yields another handle onto the same buckets; a team builds one
/// ledger and hands a clone to every drone. Increments are serialized behind
/// a mutex.
#[derive(Debug, Clone, Default)]
pub struct StatsLedger {
    buckets: Arc<Mutex<[f64; 4]>>,
}

impl StatsLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, [f64; 4]> {
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `distance` to the bucket for `fullness`.
    pub fn record(&self, fullness: Fullness, distance: f64) {
        let mut buckets = self.lock();
        buckets[fullness.index()] += distance;
        debug!(%fullness, distance, bucket = buckets[fullness.index()], "recorded flight");
    }

    /// Distance accumulated for one category.
    pub fn distance(&self, fullness: Fullness) -> f64 {
        self.lock()[fullness.index()]
    }

    /// Total distance across all categories.
    pub fn total(&self) -> f64 {
        self.lock().iter().sum()
    }

    /// Copy of every bucket, indexed by [`Fullness::index`].
    pub fn snapshot(&self) -> [f64; 4] {
        *self.lock()
    }

    /// Percentage breakdown of the current buckets.
    ///
    /// Reading does not clear the ledger, so repeated calls agree as long as
    /// nothing was recorded in between. Returns `None` if nothing was flown.
    pub fn report(&self) -> Option<FlightReport> {
        FlightReport::from_buckets(&self.snapshot())
    }
}
