//! Data models for the shift compensation engine.
//!
//! This module contains the domain types used throughout the engine:
//! time entries, classification results, period totals, and the final
//! compensation breakdown.

mod breakdown;
mod classification;
mod entry;
mod totals;

pub use breakdown::CompensationBreakdown;
pub use classification::{ClassificationResult, ShiftCategory};
pub use entry::{EntryFlags, PerDiemType, ResolvedInterval, TimeEntry, WorkInterval};
pub use totals::PeriodTotals;
