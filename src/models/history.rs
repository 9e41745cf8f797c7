//! Saved-calculation history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::CalculationKind;

use super::{InputRecord, ResultRecord};

/// A calculation the user explicitly named and saved.
///
/// Entries are immutable once created and removed only by explicit user
/// action. The engine itself never reads or writes history; persistence is
/// the presentation layer's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for this entry.
    pub id: Uuid,
    /// The name the user gave the saved calculation.
    pub title: String,
    /// Which calculation produced the result.
    pub kind: CalculationKind,
    /// The inputs the calculation ran with.
    pub input: InputRecord,
    /// The computed outputs.
    pub result: ResultRecord,
    /// When the entry was saved.
    pub created_at: DateTime<Utc>,
}
