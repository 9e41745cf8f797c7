//! Core data models for the legal calculation engine.

mod history;
mod input;
mod result;

pub use history::HistoryEntry;
pub use input::InputRecord;
pub use result::{ResultRecord, ResultValue};
