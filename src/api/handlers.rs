//! HTTP request handlers for the legal calculation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_with_rates;
use crate::catalog::{CalculationKind, catalog};
use crate::models::HistoryEntry;
use crate::presenter::render_rows;

use super::request::{CalculateRequest, SaveHistoryRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, CatalogResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculations", get(catalog_handler))
        .route("/calculate", post(calculate_handler))
        .route("/history", post(save_history_handler).get(list_history_handler))
        .route("/history/:id", delete(delete_history_handler))
        .with_state(state)
}

/// Handler for GET /calculations endpoint.
///
/// Returns the calculation catalog grouped by legal category.
async fn catalog_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CatalogResponse::from_catalog(catalog())),
    )
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the computed result envelope.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
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

    // Resolve the calculation kind
    let kind: CalculationKind = match request.kind.parse() {
        Ok(kind) => kind,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                kind = %request.kind,
                "Unknown calculation kind"
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

    // Perform the calculation; coercion makes this total over any input
    let result = compute_with_rates(kind, &request.input, state.rates());
    let formatted = render_rows(&result);

    info!(
        correlation_id = %correlation_id,
        kind = %kind,
        total = %result.total(),
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        kind,
        input: request.input,
        result,
        formatted,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /history endpoint.
///
/// Persists a computed calculation under a user-chosen title.
async fn save_history_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveHistoryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected history payload"
            );
            let error = if rejection.body_text().contains("missing field") {
                ApiError::new("VALIDATION_ERROR", rejection.body_text())
            } else {
                ApiError::malformed_json(rejection.body_text())
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let kind: CalculationKind = match request.kind.parse() {
        Ok(kind) => kind,
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let entry = HistoryEntry {
        id: Uuid::new_v4(),
        title: request.title,
        kind,
        input: request.input,
        result: request.result,
        created_at: Utc::now(),
    };

    info!(
        correlation_id = %correlation_id,
        id = %entry.id,
        kind = %kind,
        "Saved calculation to history"
    );

    let body = Json(entry.clone());
    state.history().write().expect("history lock").push(entry);

    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Handler for GET /history endpoint.
///
/// Lists saved calculations, newest first.
async fn list_history_handler(State(state): State<AppState>) -> impl IntoResponse {
    let entries: Vec<HistoryEntry> = state
        .history()
        .read()
        .expect("history lock")
        .iter()
        .rev()
        .cloned()
        .collect();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(entries),
    )
}

/// Handler for DELETE /history/{id} endpoint.
async fn delete_history_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut history = state.history().write().expect("history lock");
    let before = history.len();
    history.retain(|entry| entry.id != id);

    if history.len() == before {
        let error = ApiError::history_not_found(id);
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            Json(error),
        )
            .into_response();
    }

    info!(id = %id, "Deleted history entry");
    StatusCode::NO_CONTENT.into_response()
}
