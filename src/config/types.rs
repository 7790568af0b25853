//! Configuration types for shift windows and compensation rates.
//!
//! Raw types mirror what a tenant admin has actually saved (every field
//! optional); resolved types are complete and internally consistent, with
//! documented defaults filled in by the resolver.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A same-day clock-hour window, end exclusive.
///
/// `end_hour < start_hour` means the window wraps past midnight (the
/// default night window, 21–07). `start_hour == end_hour` is an empty
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    /// First hour inside the window (0–24).
    pub start_hour: u32,
    /// First hour outside the window (0–24).
    pub end_hour: u32,
}

impl HourWindow {
    /// Returns whether the given clock hour falls inside the window,
    /// handling the midnight wraparound shape.
    ///
    /// # Example
    ///
    /// ```
    /// use ob_engine::config::HourWindow;
    ///
    /// let night = HourWindow { start_hour: 21, end_hour: 7 };
    /// assert!(night.contains(23));
    /// assert!(night.contains(3));
    /// assert!(!night.contains(12));
    /// ```
    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour == self.end_hour {
            return false;
        }
        if self.start_hour < self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

/// The weekend override window, spanning from one weekday/hour to another.
///
/// The default window runs Friday 18:00 through Monday 06:00 and takes
/// precedence over the day/evening/night windows wherever it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendWindow {
    /// Weekday the window opens.
    pub start_weekday: Weekday,
    /// Hour the window opens on `start_weekday`.
    pub start_hour: u32,
    /// Weekday the window closes.
    pub end_weekday: Weekday,
    /// First hour outside the window on `end_weekday`.
    pub end_hour: u32,
}

/// The resolved shift windows for one tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindowConfig {
    /// Daytime window.
    pub day: HourWindow,
    /// Evening window.
    pub evening: HourWindow,
    /// Night window, wrapping midnight under the defaults.
    pub night: HourWindow,
    /// Weekend override window.
    pub weekend: WeekendWindow,
}

impl Default for ShiftWindowConfig {
    fn default() -> Self {
        Self {
            day: HourWindow {
                start_hour: 7,
                end_hour: 18,
            },
            evening: HourWindow {
                start_hour: 18,
                end_hour: 21,
            },
            night: HourWindow {
                start_hour: 21,
                end_hour: 7,
            },
            weekend: WeekendWindow {
                start_weekday: Weekday::Fri,
                start_hour: 18,
                end_weekday: Weekday::Mon,
                end_hour: 6,
            },
        }
    }
}

/// Pay multipliers per shift category, as absolute pay factors.
///
/// The OB premium for a category is `hours × base_rate × (multiplier − 1)`,
/// so the default day multiplier of 1.0 yields no premium. Overtime is paid
/// in full at `hours × base_rate × multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multipliers {
    /// Day factor (default 1.0).
    pub day: Decimal,
    /// Evening factor (default 1.25).
    pub evening: Decimal,
    /// Night factor (default 1.5).
    pub night: Decimal,
    /// Weekend factor (default 1.75).
    pub weekend: Decimal,
    /// Weekday overtime factor (default 1.5).
    pub overtime_weekday: Decimal,
    /// Weekend overtime factor (default 2.0).
    pub overtime_weekend: Decimal,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            day: Decimal::ONE,
            evening: Decimal::new(125, 2),
            night: Decimal::new(15, 1),
            weekend: Decimal::new(175, 2),
            overtime_weekday: Decimal::new(15, 1),
            overtime_weekend: Decimal::TWO,
        }
    }
}

/// The resolved monetary rates for one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRates {
    /// The base hourly rate, either the stored hourly wage or the
    /// monthly-salary-derived equivalent.
    pub base_hourly_rate: Decimal,
    /// Category and overtime pay factors.
    pub multipliers: Multipliers,
    /// Amount paid per travel hour.
    pub travel_rate: Decimal,
    /// Fixed amount for a half-day per-diem credit.
    pub per_diem_half_amount: Decimal,
    /// Fixed amount for a full-day per-diem credit.
    pub per_diem_full_amount: Decimal,
}

/// A complete, resolved tenant configuration.
///
/// Immutable for the duration of a calculation; the engine never mutates
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantConfig {
    /// The shift window configuration.
    pub windows: ShiftWindowConfig,
    /// The compensation rates.
    pub rates: CompensationRates,
}

/// A raw same-day window override, as saved by a tenant admin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHourWindow {
    /// Overridden start hour, if any.
    #[serde(default)]
    pub start_hour: Option<i64>,
    /// Overridden end hour, if any.
    #[serde(default)]
    pub end_hour: Option<i64>,
}

/// A raw weekend window override. Weekdays are indices with Monday = 0
/// through Sunday = 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWeekendWindow {
    /// Overridden opening weekday index, if any.
    #[serde(default)]
    pub start_weekday: Option<i64>,
    /// Overridden opening hour, if any.
    #[serde(default)]
    pub start_hour: Option<i64>,
    /// Overridden closing weekday index, if any.
    #[serde(default)]
    pub end_weekday: Option<i64>,
    /// Overridden closing hour, if any.
    #[serde(default)]
    pub end_hour: Option<i64>,
}

/// Raw per-category window overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWindows {
    /// Day window override.
    #[serde(default)]
    pub day: RawHourWindow,
    /// Evening window override.
    #[serde(default)]
    pub evening: RawHourWindow,
    /// Night window override.
    #[serde(default)]
    pub night: RawHourWindow,
    /// Weekend window override.
    #[serde(default)]
    pub weekend: RawWeekendWindow,
}

/// Raw multiplier overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMultipliers {
    /// Day factor override.
    #[serde(default)]
    pub day: Option<Decimal>,
    /// Evening factor override.
    #[serde(default)]
    pub evening: Option<Decimal>,
    /// Night factor override.
    #[serde(default)]
    pub night: Option<Decimal>,
    /// Weekend factor override.
    #[serde(default)]
    pub weekend: Option<Decimal>,
    /// Weekday overtime factor override.
    #[serde(default)]
    pub overtime_weekday: Option<Decimal>,
    /// Weekend overtime factor override.
    #[serde(default)]
    pub overtime_weekend: Option<Decimal>,
}

/// Everything a tenant admin may have configured, all optional.
///
/// This is what a [`super::ConfigProvider`] returns and the on-disk YAML
/// format of [`super::FileConfigProvider`]. Missing or invalid fields fall
/// back to the documented defaults during resolution; an empty raw config
/// resolves to the defaults exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTenantConfig {
    /// Window overrides.
    #[serde(default)]
    pub windows: RawWindows,
    /// Multiplier overrides.
    #[serde(default)]
    pub multipliers: RawMultipliers,
    /// Travel rate override.
    #[serde(default)]
    pub travel_rate: Option<Decimal>,
    /// Half-day per-diem amount override.
    #[serde(default)]
    pub per_diem_half_amount: Option<Decimal>,
    /// Full-day per-diem amount override.
    #[serde(default)]
    pub per_diem_full_amount: Option<Decimal>,
    /// The stored hourly wage.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
    /// The monthly salary; when set and positive it takes precedence over
    /// the hourly wage for deriving the base rate.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Divisor for deriving an hourly rate from the monthly salary.
    #[serde(default)]
    pub monthly_divisor: Option<Decimal>,
}
