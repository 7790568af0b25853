//! Shift-time classification and compensation engine.
//!
//! This crate classifies worked intervals into tenant-configurable shift
//! categories (day/evening/night/weekend), aggregates classified hours and
//! per-entry flags across a period, and turns the totals into an
//! OB/overtime/travel/per-diem compensation breakdown.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
