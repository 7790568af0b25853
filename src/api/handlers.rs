//! HTTP request handlers for the OB compensation engine API.
//!
//! This module contains the handler function for the `/calculate` endpoint.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate, calculate_compensation};
use crate::models::TimeEntry;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, EntryErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a batch of time entries for one tenant and returns the
/// aggregated hours and priced compensation breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the tenant configuration
    let config = match state.provider().tenant_config(&request.tenant_id) {
        Ok(config) => config,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                tenant_id = %request.tenant_id,
                error = %err,
                "Failed to resolve tenant configuration"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let entries: Vec<TimeEntry> = request.entries.into_iter().map(Into::into).collect();

    // Perform the calculation
    let start_time = Instant::now();
    let outcome = aggregate(&entries, &config.windows);
    let breakdown = calculate_compensation(&outcome.totals, &config.rates);
    let duration = start_time.elapsed();

    let entry_errors: Vec<EntryErrorResponse> = outcome
        .errors
        .iter()
        .map(|e| EntryErrorResponse {
            entry_id: e.entry_id.clone(),
            message: e.error.to_string(),
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        tenant_id = %request.tenant_id,
        entries_count = entries.len(),
        failed_entries = entry_errors.len(),
        total_amount = %breakdown.total_amount,
        duration_us = duration.as_micros(),
        "Calculation completed"
    );

    let response = CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tenant_id: request.tenant_id,
        totals: outcome.totals,
        breakdown,
        entry_errors,
        duration_us: duration.as_micros() as u64,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
