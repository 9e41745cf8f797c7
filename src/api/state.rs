//! Application state for the legal calculation engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock};

use crate::catalog::{RateProvider, SimulatedRates};
use crate::models::HistoryEntry;

/// Shared application state.
///
/// Carries the correction-index rate provider and the in-memory history
/// store. The history store stands in for an external persistence gateway;
/// the engine itself never touches it.
#[derive(Clone)]
pub struct AppState {
    rates: Arc<dyn RateProvider + Send + Sync>,
    history: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl AppState {
    /// Creates application state with the built-in simulated index rates.
    pub fn new() -> Self {
        Self::with_rates(SimulatedRates)
    }

    /// Creates application state with a custom rate provider.
    pub fn with_rates(rates: impl RateProvider + Send + Sync + 'static) -> Self {
        Self {
            rates: Arc::new(rates),
            history: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the rate provider.
    pub fn rates(&self) -> &(dyn RateProvider + Send + Sync) {
        self.rates.as_ref()
    }

    /// Returns the history store.
    pub fn history(&self) -> &RwLock<Vec<HistoryEntry>> {
        &self.history
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
