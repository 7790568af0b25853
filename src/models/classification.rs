//! Shift categories and per-entry classification results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The shift category a worked interval is attributed to.
///
/// Day, evening, and night partition the weekday clock; the weekend window
/// overrides all three where it applies.
///
/// # Example
///
/// ```
/// use ob_engine::models::ShiftCategory;
///
/// let category = ShiftCategory::Weekend;
/// assert_eq!(category.to_string(), "weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    /// Daytime hours (default window 07:00–18:00).
    Day,
    /// Evening hours (default window 18:00–21:00).
    Evening,
    /// Night hours (default window 21:00–07:00, wrapping midnight).
    Night,
    /// The weekend window (default Friday 18:00 through Monday 06:00).
    Weekend,
}

impl ShiftCategory {
    /// All four categories, in display order.
    pub const ALL: [ShiftCategory; 4] = [
        ShiftCategory::Day,
        ShiftCategory::Evening,
        ShiftCategory::Night,
        ShiftCategory::Weekend,
    ];
}

impl std::fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftCategory::Day => write!(f, "day"),
            ShiftCategory::Evening => write!(f, "evening"),
            ShiftCategory::Night => write!(f, "night"),
            ShiftCategory::Weekend => write!(f, "weekend"),
        }
    }
}

/// Hours attributed to each shift category for one entry.
///
/// The four fields sum exactly to the entry's net worked duration; the
/// classifier assigns the whole duration to a single category, so three of
/// the fields are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Hours classified as day.
    pub day: Decimal,
    /// Hours classified as evening.
    pub evening: Decimal,
    /// Hours classified as night.
    pub night: Decimal,
    /// Hours classified as weekend.
    pub weekend: Decimal,
}

impl ClassificationResult {
    /// Builds a result with the full duration in a single category.
    pub fn single(category: ShiftCategory, hours: Decimal) -> Self {
        let mut result = Self::default();
        *result.get_mut(category) = hours;
        result
    }

    /// Returns the hours attributed to the given category.
    pub fn get(&self, category: ShiftCategory) -> Decimal {
        match category {
            ShiftCategory::Day => self.day,
            ShiftCategory::Evening => self.evening,
            ShiftCategory::Night => self.night,
            ShiftCategory::Weekend => self.weekend,
        }
    }

    fn get_mut(&mut self, category: ShiftCategory) -> &mut Decimal {
        match category {
            ShiftCategory::Day => &mut self.day,
            ShiftCategory::Evening => &mut self.evening,
            ShiftCategory::Night => &mut self.night,
            ShiftCategory::Weekend => &mut self.weekend,
        }
    }

    /// Total classified hours across all four categories.
    pub fn total(&self) -> Decimal {
        self.day + self.evening + self.night + self.weekend
    }
}
