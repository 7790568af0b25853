//! Tenant configuration for the shift compensation engine.
//!
//! Raw per-tenant overrides are supplied by a [`ConfigProvider`] and
//! normalized against documented defaults by [`resolve`]; the engine only
//! ever sees a fully-resolved, immutable [`TenantConfig`] snapshot.

mod provider;
mod resolver;
mod types;

pub use provider::{ConfigProvider, FileConfigProvider, StaticConfigProvider};
pub use resolver::{
    DEFAULT_MONTHLY_DIVISOR, DEFAULT_PER_DIEM_FULL, DEFAULT_PER_DIEM_HALF, DEFAULT_TRAVEL_RATE,
    resolve,
};
pub use types::{
    CompensationRates, HourWindow, Multipliers, RawHourWindow, RawMultipliers, RawTenantConfig,
    RawWeekendWindow, RawWindows, ShiftWindowConfig, TenantConfig, WeekendWindow,
};
