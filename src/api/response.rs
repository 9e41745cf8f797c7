//! Response types for the legal calculation engine API.
//!
//! This module defines the calculation/catalog response envelopes and the
//! error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{CalculationKind, CalculationSpec, Category};
use crate::error::EngineError;
use crate::models::{InputRecord, ResultRecord};
use crate::presenter::GridRow;

/// Response body for a successful `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation run.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The calculation kind that ran.
    pub kind: CalculationKind,
    /// The inputs the calculation ran with (after form coercion).
    pub input: InputRecord,
    /// The raw numeric outputs, in formula order.
    pub result: ResultRecord,
    /// Presenter-formatted label/value rows for direct display.
    pub formatted: Vec<GridRow>,
}

/// One category group in the catalog listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    /// The category tag.
    pub category: Category,
    /// The calculations available in this category, in catalog order.
    pub calculations: Vec<CalculationSpec>,
}

/// Response body for `GET /calculations`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    /// The catalog grouped by legal category.
    pub categories: Vec<CategoryGroup>,
}

impl CatalogResponse {
    /// Builds the catalog listing from the static registry.
    pub fn from_catalog(specs: &[CalculationSpec]) -> Self {
        let categories = Category::all()
            .iter()
            .map(|category| CategoryGroup {
                category: *category,
                calculations: specs
                    .iter()
                    .filter(|spec| spec.category == *category)
                    .copied()
                    .collect(),
            })
            .collect();
        Self { categories }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown-calculation error response.
    pub fn unknown_calculation(kind: &str) -> Self {
        Self::new(
            "UNKNOWN_CALCULATION",
            format!("Unknown calculation kind: {}", kind),
        )
    }

    /// Creates a history-entry-not-found error response.
    pub fn history_not_found(id: Uuid) -> Self {
        Self::new("HISTORY_NOT_FOUND", format!("History entry not found: {}", id))
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::UnknownCalculation { kind } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::unknown_calculation(&kind),
            },
            EngineError::UnknownIndex { index } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "UNKNOWN_INDEX",
                    format!("Unknown correction index: {}", index),
                ),
            },
            EngineError::RatesNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new(
                    "RATES_ERROR",
                    format!("Index-rate file not found: {}", path),
                ),
            },
            EngineError::RatesParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new(
                    "RATES_ERROR",
                    format!("Failed to parse index-rate file '{}': {}", path, message),
                ),
            },
        }
    }
}
