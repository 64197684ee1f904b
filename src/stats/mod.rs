//! Flight statistics: fullness buckets, the shared ledger, and reports.

pub mod fullness;
pub mod ledger;
pub mod report;

pub use fullness::Fullness;
pub use ledger::StatsLedger;
pub use report::{format_percent, FlightReport};
