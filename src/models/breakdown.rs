//! The monetary compensation breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The incremental compensation amounts for a period, in the tenant's
/// currency.
///
/// Base pay (hours times rate with no premium) is handled by payroll
/// outside this engine; every amount here is the extra owed for OB hours,
/// declared overtime, travel, and per-diem credits. All amounts are
/// non-negative.
///
/// # Example
///
/// ```
/// use ob_engine::models::CompensationBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = CompensationBreakdown::default();
/// assert_eq!(breakdown.total_amount, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBreakdown {
    /// OB premium for day hours (zero under the default day multiplier).
    pub day_amount: Decimal,
    /// OB premium for evening hours.
    pub evening_amount: Decimal,
    /// OB premium for night hours.
    pub night_amount: Decimal,
    /// OB premium for weekend hours.
    pub weekend_amount: Decimal,
    /// Compensation for declared weekday overtime.
    pub overtime_weekday_amount: Decimal,
    /// Compensation for declared weekend overtime.
    pub overtime_weekend_amount: Decimal,
    /// Travel compensation paid out now.
    pub travel_paid_amount: Decimal,
    /// Travel compensation banked as a liability, not paid out.
    pub travel_saved_amount: Decimal,
    /// Fixed per-diem allowances summed over credited days.
    pub per_diem_amount: Decimal,
    /// Sum of every payable amount above (the saved travel amount is
    /// banked, so it is excluded).
    pub total_amount: Decimal,
}
