//! HTTP API module for the legal calculation engine.
//!
//! This module provides the REST endpoints: the calculation catalog, the
//! `/calculate` entry point, and the saved-calculation history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateRequest, SaveHistoryRequest};
pub use response::{ApiError, CalculationResponse, CatalogResponse};
pub use state::AppState;
