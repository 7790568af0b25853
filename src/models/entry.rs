//! Time entry model and related types.
//!
//! This module defines the [`TimeEntry`], [`WorkInterval`], and
//! [`EntryFlags`] structs for representing one reported work interval
//! together with its explicitly-entered compensation flags.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The per-diem allowance claimed for a calendar day.
///
/// The variants are ordered so that dominance resolution is a plain `max`:
/// `Full` dominates `Half` dominates `None` when several entries share a
/// date.
///
/// # Example
///
/// ```
/// use ob_engine::models::PerDiemType;
///
/// assert!(PerDiemType::Full > PerDiemType::Half);
/// assert!(PerDiemType::Half > PerDiemType::None);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PerDiemType {
    /// No per-diem claimed.
    #[default]
    None,
    /// Half-day allowance.
    Half,
    /// Full-day allowance.
    Full,
}

/// One reported worked interval, as supplied by the caller.
///
/// Times are kept as raw strings (`"YYYY-MM-DD"` dates, `"HH:MM"` clock
/// times with `"HH:MM:SS"` tolerated) because parsing is part of the
/// engine's contract: an unparseable value is a per-entry
/// [`EngineError::InvalidInterval`] rather than a request-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The calendar day the shift is anchored to.
    pub date: String,
    /// Clock time the shift started.
    pub start_time: String,
    /// Clock time the shift ended. `end <= start` means the shift crossed
    /// midnight into the following day.
    pub end_time: String,
    /// Unpaid break minutes, subtracted from the gross duration.
    #[serde(default)]
    pub break_minutes: i64,
}

/// A [`WorkInterval`] after parsing and duration arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInterval {
    /// The anchor date of the entry.
    pub date: NaiveDate,
    /// Start of the worked interval.
    pub start: NaiveDateTime,
    /// End of the worked interval, rolled into the next day when the raw
    /// end time was at or before the start time.
    pub end: NaiveDateTime,
    /// Net worked minutes: gross minus the break, clamped to >= 0.
    pub net_minutes: i64,
}

impl ResolvedInterval {
    /// Returns the net worked duration in fractional hours.
    pub fn net_hours(&self) -> Decimal {
        Decimal::new(self.net_minutes, 0) / Decimal::new(60, 0)
    }
}

impl WorkInterval {
    /// Parses the raw fields and computes the net worked duration.
    ///
    /// # Behavior
    ///
    /// - `end_time <= start_time` rolls the end into the following day
    ///   (e.g. 21:00–06:00 is a nine-hour overnight shift).
    /// - The break is clamped to the gross duration, so a break longer than
    ///   the interval yields zero net minutes rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] when the date or either
    /// clock time cannot be parsed, or when `break_minutes` is negative.
    /// `entry_id` is only used to label the error.
    ///
    /// # Example
    ///
    /// ```
    /// use ob_engine::models::WorkInterval;
    ///
    /// let interval = WorkInterval {
    ///     date: "2026-01-14".to_string(),
    ///     start_time: "22:00".to_string(),
    ///     end_time: "02:00".to_string(),
    ///     break_minutes: 30,
    /// };
    /// let resolved = interval.resolve("entry_001").unwrap();
    /// assert_eq!(resolved.net_minutes, 210); // 4h gross - 30min break
    /// ```
    pub fn resolve(&self, entry_id: &str) -> EngineResult<ResolvedInterval> {
        if self.break_minutes < 0 {
            return Err(EngineError::invalid_interval(
                entry_id,
                format!("negative break_minutes {}", self.break_minutes),
            ));
        }

        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| {
            EngineError::invalid_interval(entry_id, format!("unparseable date '{}'", self.date))
        })?;
        let start_time = parse_clock_time(&self.start_time).ok_or_else(|| {
            EngineError::invalid_interval(
                entry_id,
                format!("unparseable start time '{}'", self.start_time),
            )
        })?;
        let end_time = parse_clock_time(&self.end_time).ok_or_else(|| {
            EngineError::invalid_interval(
                entry_id,
                format!("unparseable end time '{}'", self.end_time),
            )
        })?;

        let start = date.and_time(start_time);
        let mut end = date.and_time(end_time);
        if end <= start {
            end += Duration::days(1);
        }

        let gross_minutes = (end - start).num_minutes();
        let effective_break = self.break_minutes.min(gross_minutes);
        let net_minutes = (gross_minutes - effective_break).max(0);

        Ok(ResolvedInterval {
            date,
            start,
            end,
            net_minutes,
        })
    }
}

/// Parses a clock time in `HH:MM` or `HH:MM:SS` form.
fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Explicitly-entered compensation flags for one time entry.
///
/// None of these quantities are derived from the worked interval; they are
/// what the employee declared when submitting the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFlags {
    /// Declared weekday overtime hours.
    #[serde(default)]
    pub overtime_weekday_hours: Decimal,
    /// Declared weekend overtime hours.
    #[serde(default)]
    pub overtime_weekend_hours: Decimal,
    /// Hours spent traveling.
    #[serde(default)]
    pub travel_hours: Decimal,
    /// Whether the travel compensation is banked instead of paid out.
    #[serde(default)]
    pub travel_saved: bool,
    /// The per-diem allowance claimed for the entry's date.
    #[serde(default)]
    pub per_diem_type: PerDiemType,
    /// Overtime hours banked as comp time.
    #[serde(default)]
    pub comp_time_saved_hours: Decimal,
    /// Banked comp time drawn down as time off.
    #[serde(default)]
    pub comp_time_taken_hours: Decimal,
}

/// One time entry: a worked interval plus its compensation flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry, used to label per-entry errors.
    pub id: String,
    /// The reported worked interval.
    pub interval: WorkInterval,
    /// The explicitly-entered flags.
    #[serde(default)]
    pub flags: EntryFlags,
}
