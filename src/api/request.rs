//! Request types for the legal calculation engine API.

use serde::{Deserialize, Serialize};

use crate::models::{InputRecord, ResultRecord};

/// Request body for the `POST /calculate` endpoint.
///
/// The kind is carried as its string tag so an unknown tag surfaces as an
/// `UNKNOWN_CALCULATION` error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The calculation-kind tag (e.g. `"severance_pay"`).
    pub kind: String,
    /// The form inputs; absent fields follow the catalog defaults.
    #[serde(default)]
    pub input: InputRecord,
}

/// Request body for the `POST /history` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveHistoryRequest {
    /// The name the user gives the saved calculation.
    pub title: String,
    /// The calculation-kind tag.
    pub kind: String,
    /// The inputs the calculation ran with.
    #[serde(default)]
    pub input: InputRecord,
    /// The computed outputs to persist.
    pub result: ResultRecord,
}
