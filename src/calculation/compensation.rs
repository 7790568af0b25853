//! Monetary compensation from period totals.
//!
//! Turns classified hours, overtime, travel and per-diem credits into
//! amounts using a tenant's resolved rates. All arithmetic is exact
//! decimal arithmetic; no floating point is involved anywhere on the money
//! path.

use rust_decimal::Decimal;

use crate::config::CompensationRates;
use crate::models::{CompensationBreakdown, PerDiemType, PeriodTotals, ShiftCategory};

/// Calculates the compensation breakdown for a period.
///
/// Category amounts are OB premiums on top of ordinary salary:
/// `hours × base_rate × (multiplier − 1)`, clamped at zero so a multiplier
/// below 1.0 can never produce a negative line. Overtime is paid in full at
/// `hours × base_rate × multiplier`. Travel is paid per hour at the travel
/// rate, with banked travel valued the same way but excluded from the
/// total. Per-diem pays the half or full amount once per credited date.
///
/// # Example
///
/// ```
/// use ob_engine::calculation::calculate_compensation;
/// use ob_engine::config::{CompensationRates, Multipliers};
/// use ob_engine::models::PeriodTotals;
/// use rust_decimal::Decimal;
///
/// let rates = CompensationRates {
///     base_hourly_rate: Decimal::new(200, 0),
///     multipliers: Multipliers::default(),
///     travel_rate: Decimal::new(170, 0),
///     per_diem_half_amount: Decimal::new(145, 0),
///     per_diem_full_amount: Decimal::new(290, 0),
/// };
/// let mut totals = PeriodTotals::default();
/// totals.hours.weekend = Decimal::new(4, 0);
///
/// let breakdown = calculate_compensation(&totals, &rates);
/// // 4h × 200 × (1.75 − 1) = 600
/// assert_eq!(breakdown.weekend_amount, Decimal::new(600, 0));
/// assert_eq!(breakdown.total_amount, Decimal::new(600, 0));
/// ```
pub fn calculate_compensation(
    totals: &PeriodTotals,
    rates: &CompensationRates,
) -> CompensationBreakdown {
    let base = rates.base_hourly_rate;
    let m = &rates.multipliers;

    let premium = |category: ShiftCategory| -> Decimal {
        let factor = match category {
            ShiftCategory::Day => m.day,
            ShiftCategory::Evening => m.evening,
            ShiftCategory::Night => m.night,
            ShiftCategory::Weekend => m.weekend,
        };
        let uplift = (factor - Decimal::ONE).max(Decimal::ZERO);
        (totals.hours.get(category) * base * uplift).max(Decimal::ZERO)
    };

    let overtime_weekday_amount =
        (totals.overtime_weekday_hours * base * m.overtime_weekday).max(Decimal::ZERO);
    let overtime_weekend_amount =
        (totals.overtime_weekend_hours * base * m.overtime_weekend).max(Decimal::ZERO);

    let travel_paid_amount = (totals.travel_hours_paid * rates.travel_rate).max(Decimal::ZERO);
    let travel_saved_amount = (totals.travel_hours_saved * rates.travel_rate).max(Decimal::ZERO);

    let per_diem_amount = totals
        .per_diem_days
        .values()
        .map(|per_diem| match per_diem {
            PerDiemType::None => Decimal::ZERO,
            PerDiemType::Half => rates.per_diem_half_amount,
            PerDiemType::Full => rates.per_diem_full_amount,
        })
        .sum::<Decimal>()
        .max(Decimal::ZERO);

    let day_amount = premium(ShiftCategory::Day);
    let evening_amount = premium(ShiftCategory::Evening);
    let night_amount = premium(ShiftCategory::Night);
    let weekend_amount = premium(ShiftCategory::Weekend);

    // Banked travel is valued but not paid out, so it stays out of the total.
    let total_amount = day_amount
        + evening_amount
        + night_amount
        + weekend_amount
        + overtime_weekday_amount
        + overtime_weekend_amount
        + travel_paid_amount
        + per_diem_amount;

    CompensationBreakdown {
        day_amount,
        evening_amount,
        night_amount,
        weekend_amount,
        overtime_weekday_amount,
        overtime_weekend_amount,
        travel_paid_amount,
        travel_saved_amount,
        per_diem_amount,
        total_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Multipliers;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn default_rates() -> CompensationRates {
        CompensationRates {
            base_hourly_rate: dec("200"),
            multipliers: Multipliers::default(),
            travel_rate: dec("170"),
            per_diem_half_amount: dec("145"),
            per_diem_full_amount: dec("290"),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    // ==========================================================================
    // CO-001: day hours carry no premium under the default multiplier
    // ==========================================================================
    #[test]
    fn test_co_001_day_hours_no_premium() {
        let mut totals = PeriodTotals::default();
        totals.hours.day = dec("7.5");

        let breakdown = calculate_compensation(&totals, &default_rates());
        assert_eq!(breakdown.day_amount, Decimal::ZERO);
        assert_eq!(breakdown.total_amount, Decimal::ZERO);
    }

    // ==========================================================================
    // CO-002: weekend premium is hours × rate × 0.75
    // ==========================================================================
    #[test]
    fn test_co_002_weekend_premium() {
        let mut totals = PeriodTotals::default();
        totals.hours.weekend = dec("4");

        let breakdown = calculate_compensation(&totals, &default_rates());
        assert_eq!(breakdown.weekend_amount, dec("600"));
    }

    // ==========================================================================
    // CO-003: evening and night premiums
    // ==========================================================================
    #[test]
    fn test_co_003_evening_and_night_premiums() {
        let mut totals = PeriodTotals::default();
        totals.hours.evening = dec("4"); // 4 × 200 × 0.25 = 200
        totals.hours.night = dec("4"); // 4 × 200 × 0.50 = 400

        let breakdown = calculate_compensation(&totals, &default_rates());
        assert_eq!(breakdown.evening_amount, dec("200"));
        assert_eq!(breakdown.night_amount, dec("400"));
        assert_eq!(breakdown.total_amount, dec("600"));
    }

    // ==========================================================================
    // CO-004: overtime is paid in full, not as a premium
    // ==========================================================================
    #[test]
    fn test_co_004_overtime_full_rate() {
        let mut totals = PeriodTotals::default();
        totals.overtime_weekday_hours = dec("2"); // 2 × 200 × 1.5 = 600
        totals.overtime_weekend_hours = dec("1"); // 1 × 200 × 2.0 = 400

        let breakdown = calculate_compensation(&totals, &default_rates());
        assert_eq!(breakdown.overtime_weekday_amount, dec("600"));
        assert_eq!(breakdown.overtime_weekend_amount, dec("400"));
        assert_eq!(breakdown.total_amount, dec("1000"));
    }

    // ==========================================================================
    // CO-005: banked travel is valued but excluded from the total
    // ==========================================================================
    #[test]
    fn test_co_005_saved_travel_excluded_from_total() {
        let mut totals = PeriodTotals::default();
        totals.travel_hours_paid = dec("1.5");
        totals.travel_hours_saved = dec("2");

        let breakdown = calculate_compensation(&totals, &default_rates());
        assert_eq!(breakdown.travel_paid_amount, dec("255"));
        assert_eq!(breakdown.travel_saved_amount, dec("340"));
        assert_eq!(breakdown.total_amount, dec("255"));
    }

    // ==========================================================================
    // CO-006: per-diem pays once per credited date
    // ==========================================================================
    #[test]
    fn test_co_006_per_diem_per_date() {
        let mut totals = PeriodTotals::default();
        totals.per_diem_days.insert(date(12), PerDiemType::Half);
        totals.per_diem_days.insert(date(13), PerDiemType::Full);
        totals.per_diem_days.insert(date(14), PerDiemType::Full);

        let breakdown = calculate_compensation(&totals, &default_rates());
        assert_eq!(breakdown.per_diem_amount, dec("725"));
    }

    // ==========================================================================
    // CO-007: a sub-unity multiplier clamps to zero instead of deducting
    // ==========================================================================
    #[test]
    fn test_co_007_sub_unity_multiplier_clamps() {
        let mut rates = default_rates();
        rates.multipliers.evening = dec("0.8");

        let mut totals = PeriodTotals::default();
        totals.hours.evening = dec("10");

        let breakdown = calculate_compensation(&totals, &rates);
        assert_eq!(breakdown.evening_amount, Decimal::ZERO);
    }

    // ==========================================================================
    // CO-008: zero base rate zeroes every hour-derived line
    // ==========================================================================
    #[test]
    fn test_co_008_zero_base_rate() {
        let mut rates = default_rates();
        rates.base_hourly_rate = Decimal::ZERO;

        let mut totals = PeriodTotals::default();
        totals.hours.weekend = dec("8");
        totals.overtime_weekday_hours = dec("2");
        totals.travel_hours_paid = dec("1");
        totals.per_diem_days.insert(date(12), PerDiemType::Full);

        let breakdown = calculate_compensation(&totals, &rates);
        assert_eq!(breakdown.weekend_amount, Decimal::ZERO);
        assert_eq!(breakdown.overtime_weekday_amount, Decimal::ZERO);
        // Travel and per-diem do not depend on the base rate.
        assert_eq!(breakdown.travel_paid_amount, dec("170"));
        assert_eq!(breakdown.per_diem_amount, dec("290"));
        assert_eq!(breakdown.total_amount, dec("460"));
    }

    #[test]
    fn test_empty_totals_yield_zero_breakdown() {
        let breakdown = calculate_compensation(&PeriodTotals::default(), &default_rates());
        assert_eq!(breakdown, CompensationBreakdown::default());
    }

    proptest! {
        // Every line and the total are non-negative, for any inputs.
        #[test]
        fn prop_amounts_never_negative(
            day in 0u32..240,
            evening in 0u32..240,
            night in 0u32..240,
            weekend in 0u32..240,
            rate in 0u32..2000,
            evening_factor in 0u32..400,
        ) {
            let mut rates = default_rates();
            rates.base_hourly_rate = Decimal::from(rate);
            rates.multipliers.evening = Decimal::new(evening_factor as i64, 2);

            let mut totals = PeriodTotals::default();
            totals.hours.day = Decimal::from(day);
            totals.hours.evening = Decimal::from(evening);
            totals.hours.night = Decimal::from(night);
            totals.hours.weekend = Decimal::from(weekend);

            let b = calculate_compensation(&totals, &rates);
            for amount in [
                b.day_amount,
                b.evening_amount,
                b.night_amount,
                b.weekend_amount,
                b.per_diem_amount,
                b.total_amount,
            ] {
                prop_assert!(amount >= Decimal::ZERO);
            }
        }

        // The total is exactly the sum of the paid lines.
        #[test]
        fn prop_total_is_sum_of_paid_lines(
            evening in 0u32..100,
            weekend in 0u32..100,
            ot in 0u32..40,
            travel_paid in 0u32..20,
            travel_saved in 0u32..20,
        ) {
            let mut totals = PeriodTotals::default();
            totals.hours.evening = Decimal::from(evening);
            totals.hours.weekend = Decimal::from(weekend);
            totals.overtime_weekday_hours = Decimal::from(ot);
            totals.travel_hours_paid = Decimal::from(travel_paid);
            totals.travel_hours_saved = Decimal::from(travel_saved);
            totals.per_diem_days.insert(date(12), PerDiemType::Half);

            let b = calculate_compensation(&totals, &default_rates());
            let expected = b.day_amount
                + b.evening_amount
                + b.night_amount
                + b.weekend_amount
                + b.overtime_weekday_amount
                + b.overtime_weekend_amount
                + b.travel_paid_amount
                + b.per_diem_amount;
            prop_assert_eq!(b.total_amount, expected);
        }
    }
}
