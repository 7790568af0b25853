//! Aggregated period totals.
//!
//! This module contains [`PeriodTotals`], the running sums produced by the
//! period aggregator and consumed by the compensation calculator.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::classification::ClassificationResult;
use super::entry::{EntryFlags, PerDiemType};

/// Sums of classified hours and entry-flag quantities across a period.
///
/// Merging is associative and commutative, so totals may be computed in any
/// entry order or by folding partial totals from partitioned batches.
///
/// # Example
///
/// ```
/// use ob_engine::models::PeriodTotals;
///
/// let totals = PeriodTotals::default();
/// assert_eq!(totals.per_diem_day_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Classified hours per shift category.
    pub hours: ClassificationResult,
    /// Sum of declared weekday overtime hours.
    pub overtime_weekday_hours: Decimal,
    /// Sum of declared weekend overtime hours.
    pub overtime_weekend_hours: Decimal,
    /// Travel hours to be paid out now.
    pub travel_hours_paid: Decimal,
    /// Travel hours banked as saved compensation.
    pub travel_hours_saved: Decimal,
    /// Overtime hours banked as comp time.
    pub comp_time_saved_hours: Decimal,
    /// Banked comp time drawn down.
    pub comp_time_taken_hours: Decimal,
    /// Effective per-diem type per credited calendar day.
    ///
    /// One key per distinct date with a non-none effective type; when
    /// multiple entries share a date the dominant type wins.
    pub per_diem_days: BTreeMap<NaiveDate, PerDiemType>,
}

impl PeriodTotals {
    /// Adds one entry's classified hours into the totals.
    pub fn add_classification(&mut self, classification: &ClassificationResult) {
        self.hours.day += classification.day;
        self.hours.evening += classification.evening;
        self.hours.night += classification.night;
        self.hours.weekend += classification.weekend;
    }

    /// Adds one entry's flag quantities into the totals.
    ///
    /// Travel hours land in the paid or saved bucket depending on
    /// `travel_saved`; the per-diem claim for `date` is reduced by
    /// dominance (`full` > `half` > `none`), crediting each date at most
    /// once.
    pub fn add_flags(&mut self, date: NaiveDate, flags: &EntryFlags) {
        self.overtime_weekday_hours += flags.overtime_weekday_hours;
        self.overtime_weekend_hours += flags.overtime_weekend_hours;

        if flags.travel_saved {
            self.travel_hours_saved += flags.travel_hours;
        } else {
            self.travel_hours_paid += flags.travel_hours;
        }

        self.comp_time_saved_hours += flags.comp_time_saved_hours;
        self.comp_time_taken_hours += flags.comp_time_taken_hours;

        if flags.per_diem_type != PerDiemType::None {
            let slot = self.per_diem_days.entry(date).or_insert(PerDiemType::None);
            *slot = (*slot).max(flags.per_diem_type);
        }
    }

    /// Merges another set of totals into this one.
    ///
    /// Used for partitioned aggregation; per-diem days are combined by
    /// per-date dominance so the merge stays order independent.
    pub fn merge(&mut self, other: &PeriodTotals) {
        self.add_classification(&other.hours);
        self.overtime_weekday_hours += other.overtime_weekday_hours;
        self.overtime_weekend_hours += other.overtime_weekend_hours;
        self.travel_hours_paid += other.travel_hours_paid;
        self.travel_hours_saved += other.travel_hours_saved;
        self.comp_time_saved_hours += other.comp_time_saved_hours;
        self.comp_time_taken_hours += other.comp_time_taken_hours;

        for (date, per_diem) in &other.per_diem_days {
            let slot = self.per_diem_days.entry(*date).or_insert(PerDiemType::None);
            *slot = (*slot).max(*per_diem);
        }
    }

    /// Total classified hours across all categories.
    pub fn total_hours(&self) -> Decimal {
        self.hours.total()
    }

    /// Number of calendar days with a per-diem credit.
    pub fn per_diem_day_count(&self) -> usize {
        self.per_diem_days.len()
    }
}
