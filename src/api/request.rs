//! Request types for the OB compensation engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EntryFlags, PerDiemType, TimeEntry, WorkInterval};

/// Request body for the `/calculate` endpoint.
///
/// Carries the tenant the entries belong to and the batch of time entries
/// to classify and price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The tenant whose configuration applies.
    pub tenant_id: String,
    /// The time entries to process.
    pub entries: Vec<EntryRequest>,
}

/// One time entry in a calculation request.
///
/// Dates and times arrive as strings and are validated per entry during
/// the calculation, so one bad entry never rejects the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Unique identifier for the entry.
    pub id: String,
    /// The date the shift started, `YYYY-MM-DD`.
    pub date: String,
    /// The shift start time, `HH:MM` or `HH:MM:SS`.
    pub start_time: String,
    /// The shift end time, same formats as `start_time`.
    pub end_time: String,
    /// Unpaid break length in minutes.
    #[serde(default)]
    pub break_minutes: i64,
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

impl From<EntryRequest> for TimeEntry {
    fn from(req: EntryRequest) -> Self {
        TimeEntry {
            id: req.id,
            interval: WorkInterval {
                date: req.date,
                start_time: req.start_time,
                end_time: req.end_time,
                break_minutes: req.break_minutes,
            },
            flags: EntryFlags {
                overtime_weekday_hours: req.overtime_weekday_hours,
                overtime_weekend_hours: req.overtime_weekend_hours,
                travel_hours: req.travel_hours,
                travel_saved: req.travel_saved,
                per_diem_type: req.per_diem_type,
                comp_time_saved_hours: req.comp_time_saved_hours,
                comp_time_taken_hours: req.comp_time_taken_hours,
            },
        }
    }
}
