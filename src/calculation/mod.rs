//! Calculation logic for the shift compensation engine.
//!
//! This module contains the weekend precedence resolver, the interval
//! classifier, the period aggregator, and the compensation calculator.
//! Every function here is pure: all configuration and entry data is
//! supplied by the caller and nothing is cached or mutated.

mod aggregate;
mod classify;
mod compensation;
mod weekend;

pub use aggregate::{AggregationOutcome, EntryError, aggregate};
pub use classify::{classify, start_category};
pub use compensation::calculate_compensation;
pub use weekend::is_weekend;
