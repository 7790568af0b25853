//! Weekend precedence resolution.
//!
//! The weekend window spans from one weekday/hour to another (default
//! Friday 18:00 through Monday 06:00) and overrides the day/evening/night
//! classification wherever it applies.

use chrono::Weekday;

use crate::config::WeekendWindow;

/// Returns whether a point in time falls inside the weekend window.
///
/// The check works on week-hours (hours since Monday 00:00) so that a
/// window wrapping the week boundary, like the default Friday → Monday
/// shape, is a plain wraparound range test.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use ob_engine::calculation::is_weekend;
/// use ob_engine::config::ShiftWindowConfig;
///
/// let weekend = ShiftWindowConfig::default().weekend;
/// assert!(is_weekend(Weekday::Sat, 10, &weekend));
/// assert!(is_weekend(Weekday::Mon, 5, &weekend));
/// assert!(!is_weekend(Weekday::Mon, 6, &weekend));
/// ```
pub fn is_weekend(weekday: Weekday, hour: u32, window: &WeekendWindow) -> bool {
    let start = week_hour(window.start_weekday, window.start_hour);
    let end = week_hour(window.end_weekday, window.end_hour);
    let at = week_hour(weekday, hour);

    if start == end {
        return false;
    }
    if start < end {
        at >= start && at < end
    } else {
        at >= start || at < end
    }
}

/// Hours since Monday 00:00.
fn week_hour(weekday: Weekday, hour: u32) -> u32 {
    weekday.num_days_from_monday() * 24 + hour
}
