//! HTTP API module for the OB compensation engine.
//!
//! This module provides the REST API endpoint for classifying a batch of
//! time entries and pricing them with a tenant's configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EntryRequest};
pub use response::{ApiError, CalculationResponse, EntryErrorResponse};
pub use state::AppState;
