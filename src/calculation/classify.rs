//! Interval classification.
//!
//! Classifies one worked interval into a single shift category based on
//! its start point. Classifying an entire entry by where it starts, rather
//! than splitting it at category boundaries mid-shift, matches the
//! product's established payroll behavior and is preserved deliberately.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::config::ShiftWindowConfig;
use crate::error::EngineResult;
use crate::models::{ClassificationResult, ShiftCategory, WorkInterval};

use super::weekend::is_weekend;

/// Determines the shift category for a point in time.
///
/// Precedence: the weekend window overrides everything; otherwise the
/// start hour is tested against the night window (which may wrap
/// midnight), then the evening window, and day is the fallback covering
/// the remaining weekday hours, including Friday daytime before the
/// weekend window opens.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use ob_engine::calculation::start_category;
/// use ob_engine::config::ShiftWindowConfig;
/// use ob_engine::models::ShiftCategory;
///
/// let windows = ShiftWindowConfig::default();
/// // 2026-01-17 is a Saturday.
/// let start = NaiveDateTime::parse_from_str("2026-01-17 10:00", "%Y-%m-%d %H:%M").unwrap();
/// assert_eq!(start_category(start, &windows), ShiftCategory::Weekend);
/// ```
pub fn start_category(start: NaiveDateTime, windows: &ShiftWindowConfig) -> ShiftCategory {
    let hour = start.hour();

    if is_weekend(start.weekday(), hour, &windows.weekend) {
        ShiftCategory::Weekend
    } else if windows.night.contains(hour) {
        ShiftCategory::Night
    } else if windows.evening.contains(hour) {
        ShiftCategory::Evening
    } else {
        ShiftCategory::Day
    }
}

/// Classifies one worked interval.
///
/// The entire net duration (gross minus break, clamped to zero) is
/// attributed to the category of the interval's start point; the other
/// three categories are zero, so the result always sums exactly to the net
/// duration.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInterval`] when the
/// interval's date or times cannot be parsed or the break is negative.
/// A zero-length interval (break at or above the gross duration) is not an
/// error; it classifies as zero hours in the start category.
///
/// # Example
///
/// ```
/// use ob_engine::calculation::classify;
/// use ob_engine::config::ShiftWindowConfig;
/// use ob_engine::models::WorkInterval;
/// use rust_decimal::Decimal;
///
/// // 2026-01-12 is a Monday.
/// let interval = WorkInterval {
///     date: "2026-01-12".to_string(),
///     start_time: "08:00".to_string(),
///     end_time: "16:00".to_string(),
///     break_minutes: 30,
/// };
/// let result = classify("entry_001", &interval, &ShiftWindowConfig::default()).unwrap();
/// assert_eq!(result.day, Decimal::new(75, 1)); // 7.5 hours
/// ```
pub fn classify(
    entry_id: &str,
    interval: &WorkInterval,
    windows: &ShiftWindowConfig,
) -> EngineResult<ClassificationResult> {
    let resolved = interval.resolve(entry_id)?;
    let category = start_category(resolved.start, windows);
    Ok(ClassificationResult::single(category, resolved.net_hours()))
}
