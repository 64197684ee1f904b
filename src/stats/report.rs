//! Percentage breakdown of flown distance.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::fullness::Fullness;

/// Share of the total distance flown in each fullness category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightReport {
    /// Sum of every bucket.
    pub total_distance: f64,
    /// Percentage per category, rounded to two decimals, in report order.
    pub shares: Vec<(Fullness, f64)>,
}

impl FlightReport {
    /// Builds a report from per-category distances indexed by
    /// [`Fullness::index`].
    ///
    /// Returns `None` when nothing has been flown yet.
    pub fn from_buckets(buckets: &[f64; 4]) -> Option<Self> {
        let total_distance: f64 = buckets.iter().sum();
        if total_distance <= 0.0 {
            return None;
        }

        let shares = Fullness::all()
            .into_iter()
            .map(|fullness| {
                let pct = 100.0 * buckets[fullness.index()] / total_distance;
                (fullness, round_to_cents(pct))
            })
            .collect();

        Some(Self {
            total_distance,
            shares,
        })
    }

    /// Percentage for one category.
    pub fn share(&self, fullness: Fullness) -> f64 {
        self.shares
            .iter()
            .find(|(f, _)| *f == fullness)
            .map(|(_, pct)| *pct)
            .unwrap_or(0.0)
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats with at most two decimals and at least one: `30.0`, `12.5`, `33.33`.
pub fn format_percent(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

impl fmt::Display for FlightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (fullness, pct) in &self.shares {
            writeln!(f, "distance flown {}: {}%", fullness, format_percent(*pct))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_of_ledger() {
        let report = FlightReport::from_buckets(&[30.0, 10.0, 0.0, 60.0]).unwrap();
        assert_eq!(report.total_distance, 100.0);
        assert_eq!(report.share(Fullness::Full), 30.0);
        assert_eq!(report.share(Fullness::Empty), 10.0);
        assert_eq!(report.share(Fullness::BelowHalf), 0.0);
        assert_eq!(report.share(Fullness::AboveHalf), 60.0);
    }

    #[test]
    fn printed_lines() {
        let text = FlightReport::from_buckets(&[30.0, 10.0, 0.0, 60.0])
            .unwrap()
            .to_string();
        assert!(text.contains("full: 30.0%"));
        assert!(text.contains("empty: 10.0%"));
        assert!(text.contains("> half-load: 60.0%"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn zero_total_yields_no_report() {
        assert!(FlightReport::from_buckets(&[0.0; 4]).is_none());
    }

    #[test]
    fn shares_round_to_two_decimals() {
        let report = FlightReport::from_buckets(&[1.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(report.share(Fullness::Full), 33.33);
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(30.0), "30.0");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(format_percent(33.33), "33.33");
        assert_eq!(format_percent(0.0), "0.0");
    }
}
