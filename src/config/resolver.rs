//! Normalization of raw tenant configuration against documented defaults.
//!
//! The resolver never fails: missing or invalid overrides stay on the
//! defaults, since an incomplete tenant configuration must not block a
//! payroll calculation.

use chrono::Weekday;
use rust_decimal::Decimal;

use super::types::{
    CompensationRates, HourWindow, Multipliers, RawTenantConfig, RawWeekendWindow,
    ShiftWindowConfig, TenantConfig, WeekendWindow,
};

/// Default divisor for deriving an hourly rate from a monthly salary.
pub const DEFAULT_MONTHLY_DIVISOR: u32 = 174;

/// Default amount paid per travel hour.
pub const DEFAULT_TRAVEL_RATE: u32 = 170;

/// Default half-day per-diem amount.
pub const DEFAULT_PER_DIEM_HALF: u32 = 145;

/// Default full-day per-diem amount.
pub const DEFAULT_PER_DIEM_FULL: u32 = 290;

/// Resolves a raw tenant configuration into a complete one.
///
/// Every override that is present and valid is applied; everything else
/// falls back to the documented defaults (day 07–18, evening 18–21, night
/// 21–07, weekend Friday 18:00 → Monday 06:00, multipliers 1.0 / 1.25 /
/// 1.5 / 1.75 and overtime 1.5 / 2.0, travel rate 170, per-diem 145 / 290).
/// An hour outside 0–24, a weekday index outside 0–6, or a negative
/// multiplier/rate counts as invalid and stays on the default.
///
/// # Example
///
/// ```
/// use ob_engine::config::{RawTenantConfig, resolve};
/// use rust_decimal::Decimal;
///
/// let config = resolve(&RawTenantConfig::default());
/// assert_eq!(config.windows.day.start_hour, 7);
/// assert_eq!(config.rates.travel_rate, Decimal::from(170));
/// ```
pub fn resolve(raw: &RawTenantConfig) -> TenantConfig {
    let defaults = ShiftWindowConfig::default();

    let windows = ShiftWindowConfig {
        day: HourWindow {
            start_hour: normalize_hour(raw.windows.day.start_hour, defaults.day.start_hour),
            end_hour: normalize_hour(raw.windows.day.end_hour, defaults.day.end_hour),
        },
        evening: HourWindow {
            start_hour: normalize_hour(
                raw.windows.evening.start_hour,
                defaults.evening.start_hour,
            ),
            end_hour: normalize_hour(raw.windows.evening.end_hour, defaults.evening.end_hour),
        },
        night: HourWindow {
            start_hour: normalize_hour(raw.windows.night.start_hour, defaults.night.start_hour),
            end_hour: normalize_hour(raw.windows.night.end_hour, defaults.night.end_hour),
        },
        weekend: resolve_weekend(&raw.windows.weekend, defaults.weekend),
    };

    let default_multipliers = Multipliers::default();
    let multipliers = Multipliers {
        day: normalize_factor(raw.multipliers.day, default_multipliers.day),
        evening: normalize_factor(raw.multipliers.evening, default_multipliers.evening),
        night: normalize_factor(raw.multipliers.night, default_multipliers.night),
        weekend: normalize_factor(raw.multipliers.weekend, default_multipliers.weekend),
        overtime_weekday: normalize_factor(
            raw.multipliers.overtime_weekday,
            default_multipliers.overtime_weekday,
        ),
        overtime_weekend: normalize_factor(
            raw.multipliers.overtime_weekend,
            default_multipliers.overtime_weekend,
        ),
    };

    let rates = CompensationRates {
        base_hourly_rate: base_hourly_rate(raw),
        multipliers,
        travel_rate: normalize_factor(raw.travel_rate, Decimal::from(DEFAULT_TRAVEL_RATE)),
        per_diem_half_amount: normalize_factor(
            raw.per_diem_half_amount,
            Decimal::from(DEFAULT_PER_DIEM_HALF),
        ),
        per_diem_full_amount: normalize_factor(
            raw.per_diem_full_amount,
            Decimal::from(DEFAULT_PER_DIEM_FULL),
        ),
    };

    TenantConfig { windows, rates }
}

/// Derives the base hourly rate for a tenant.
///
/// A positive monthly salary takes precedence and is divided by the
/// configured divisor (default 174); otherwise the stored hourly wage is
/// used, and zero when neither is set.
fn base_hourly_rate(raw: &RawTenantConfig) -> Decimal {
    let monthly = raw.monthly_salary.unwrap_or(Decimal::ZERO);
    if monthly > Decimal::ZERO {
        let divisor = match raw.monthly_divisor {
            Some(d) if d > Decimal::ZERO => d,
            _ => Decimal::from(DEFAULT_MONTHLY_DIVISOR),
        };
        return monthly / divisor;
    }

    match raw.hourly_wage {
        Some(wage) if wage >= Decimal::ZERO => wage,
        _ => Decimal::ZERO,
    }
}

fn resolve_weekend(raw: &RawWeekendWindow, default: WeekendWindow) -> WeekendWindow {
    WeekendWindow {
        start_weekday: normalize_weekday(raw.start_weekday, default.start_weekday),
        start_hour: normalize_hour(raw.start_hour, default.start_hour),
        end_weekday: normalize_weekday(raw.end_weekday, default.end_weekday),
        end_hour: normalize_hour(raw.end_hour, default.end_hour),
    }
}

fn normalize_hour(value: Option<i64>, default: u32) -> u32 {
    match value {
        Some(h) if (0..=24).contains(&h) => h as u32,
        _ => default,
    }
}

/// Weekday indices run Monday = 0 through Sunday = 6.
fn normalize_weekday(value: Option<i64>, default: Weekday) -> Weekday {
    match value {
        Some(0) => Weekday::Mon,
        Some(1) => Weekday::Tue,
        Some(2) => Weekday::Wed,
        Some(3) => Weekday::Thu,
        Some(4) => Weekday::Fri,
        Some(5) => Weekday::Sat,
        Some(6) => Weekday::Sun,
        _ => default,
    }
}

fn normalize_factor(value: Option<Decimal>, default: Decimal) -> Decimal {
    match value {
        Some(v) if v >= Decimal::ZERO => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{RawHourWindow, RawMultipliers, RawWindows};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // CR-001: empty override resolves to the documented defaults
    // ==========================================================================
    #[test]
    fn test_cr_001_empty_config_resolves_to_defaults() {
        let config = resolve(&RawTenantConfig::default());

        assert_eq!(config.windows, ShiftWindowConfig::default());
        assert_eq!(config.rates.multipliers, Multipliers::default());
        assert_eq!(config.rates.base_hourly_rate, Decimal::ZERO);
        assert_eq!(config.rates.travel_rate, dec("170"));
        assert_eq!(config.rates.per_diem_half_amount, dec("145"));
        assert_eq!(config.rates.per_diem_full_amount, dec("290"));
    }

    // ==========================================================================
    // CR-002: valid overrides are applied per field
    // ==========================================================================
    #[test]
    fn test_cr_002_valid_overrides_applied() {
        let raw = RawTenantConfig {
            windows: RawWindows {
                evening: RawHourWindow {
                    start_hour: Some(17),
                    end_hour: Some(22),
                },
                weekend: RawWeekendWindow {
                    start_hour: Some(16),
                    ..RawWeekendWindow::default()
                },
                ..RawWindows::default()
            },
            multipliers: RawMultipliers {
                weekend: Some(dec("2.0")),
                ..RawMultipliers::default()
            },
            travel_rate: Some(dec("200")),
            ..RawTenantConfig::default()
        };

        let config = resolve(&raw);
        assert_eq!(config.windows.evening.start_hour, 17);
        assert_eq!(config.windows.evening.end_hour, 22);
        assert_eq!(config.windows.weekend.start_hour, 16);
        // Untouched fields stay on defaults.
        assert_eq!(config.windows.weekend.end_hour, 6);
        assert_eq!(config.windows.day.start_hour, 7);
        assert_eq!(config.rates.multipliers.weekend, dec("2.0"));
        assert_eq!(config.rates.multipliers.night, dec("1.5"));
        assert_eq!(config.rates.travel_rate, dec("200"));
    }

    // ==========================================================================
    // CR-003: invalid values fall back to defaults instead of failing
    // ==========================================================================
    #[test]
    fn test_cr_003_invalid_values_fall_back() {
        let raw = RawTenantConfig {
            windows: RawWindows {
                night: RawHourWindow {
                    start_hour: Some(-3),
                    end_hour: Some(99),
                },
                weekend: RawWeekendWindow {
                    start_weekday: Some(9),
                    ..RawWeekendWindow::default()
                },
                ..RawWindows::default()
            },
            multipliers: RawMultipliers {
                evening: Some(dec("-0.5")),
                ..RawMultipliers::default()
            },
            travel_rate: Some(dec("-1")),
            ..RawTenantConfig::default()
        };

        let config = resolve(&raw);
        assert_eq!(config.windows.night.start_hour, 21);
        assert_eq!(config.windows.night.end_hour, 7);
        assert_eq!(config.windows.weekend.start_weekday, Weekday::Fri);
        assert_eq!(config.rates.multipliers.evening, dec("1.25"));
        assert_eq!(config.rates.travel_rate, dec("170"));
    }

    // ==========================================================================
    // CR-004: base rate derivation
    // ==========================================================================
    #[test]
    fn test_cr_004_monthly_salary_derives_base_rate() {
        let raw = RawTenantConfig {
            monthly_salary: Some(dec("34800")),
            hourly_wage: Some(dec("999")),
            ..RawTenantConfig::default()
        };

        // 34800 / 174 = 200; the monthly salary wins over the hourly wage.
        assert_eq!(resolve(&raw).rates.base_hourly_rate, dec("200"));
    }

    #[test]
    fn test_cr_005_hourly_wage_used_without_monthly_salary() {
        let raw = RawTenantConfig {
            hourly_wage: Some(dec("185.50")),
            ..RawTenantConfig::default()
        };
        assert_eq!(resolve(&raw).rates.base_hourly_rate, dec("185.50"));
    }

    #[test]
    fn test_cr_006_custom_monthly_divisor() {
        let raw = RawTenantConfig {
            monthly_salary: Some(dec("32000")),
            monthly_divisor: Some(dec("160")),
            ..RawTenantConfig::default()
        };
        assert_eq!(resolve(&raw).rates.base_hourly_rate, dec("200"));
    }

    #[test]
    fn test_cr_007_zero_monthly_salary_falls_back_to_hourly() {
        let raw = RawTenantConfig {
            monthly_salary: Some(Decimal::ZERO),
            hourly_wage: Some(dec("180")),
            ..RawTenantConfig::default()
        };
        assert_eq!(resolve(&raw).rates.base_hourly_rate, dec("180"));
    }

    #[test]
    fn test_cr_008_invalid_divisor_uses_default() {
        let raw = RawTenantConfig {
            monthly_salary: Some(dec("17400")),
            monthly_divisor: Some(Decimal::ZERO),
            ..RawTenantConfig::default()
        };
        assert_eq!(resolve(&raw).rates.base_hourly_rate, dec("100"));
    }

    #[test]
    fn test_weekday_index_mapping() {
        let raw = RawTenantConfig {
            windows: RawWindows {
                weekend: RawWeekendWindow {
                    start_weekday: Some(5),
                    end_weekday: Some(6),
                    ..RawWeekendWindow::default()
                },
                ..RawWindows::default()
            },
            ..RawTenantConfig::default()
        };

        let config = resolve(&raw);
        assert_eq!(config.windows.weekend.start_weekday, Weekday::Sat);
        assert_eq!(config.windows.weekend.end_weekday, Weekday::Sun);
    }
}
