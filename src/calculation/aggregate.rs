//! Period aggregation.
//!
//! Folds a batch of time entries into period totals, collecting per-entry
//! failures instead of aborting the batch.

use crate::config::ShiftWindowConfig;
use crate::error::EngineError;
use crate::models::{PeriodTotals, TimeEntry};

use super::classify::start_category;
use crate::models::ClassificationResult;

/// A per-entry failure recorded during aggregation.
#[derive(Debug)]
pub struct EntryError {
    /// Identifier of the entry that failed.
    pub entry_id: String,
    /// What went wrong.
    pub error: EngineError,
}

/// Result of aggregating a batch of entries.
///
/// Totals cover only the entries that resolved cleanly; every failed entry
/// appears in `errors` and contributes nothing to the totals, including its
/// flags.
#[derive(Debug)]
pub struct AggregationOutcome {
    /// Combined totals for the successful entries.
    pub totals: PeriodTotals,
    /// Failures, in input order.
    pub errors: Vec<EntryError>,
}

/// Aggregates a batch of time entries into period totals.
///
/// Each entry is resolved and classified independently; an invalid entry is
/// recorded in the outcome's error list and skipped entirely. Because the
/// totals are built by commutative accumulation, the result is independent
/// of the order the entries arrive in.
pub fn aggregate(entries: &[TimeEntry], windows: &ShiftWindowConfig) -> AggregationOutcome {
    let mut totals = PeriodTotals::default();
    let mut errors = Vec::new();

    for entry in entries {
        let resolved = match entry.interval.resolve(&entry.id) {
            Ok(resolved) => resolved,
            Err(error) => {
                errors.push(EntryError {
                    entry_id: entry.id.clone(),
                    error,
                });
                continue;
            }
        };

        let category = start_category(resolved.start, windows);
        totals.add_classification(&ClassificationResult::single(
            category,
            resolved.net_hours(),
        ));
        totals.add_flags(resolved.date, &entry.flags);
    }

    AggregationOutcome { totals, errors }
}
