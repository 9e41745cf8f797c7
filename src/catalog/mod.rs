//! Static calculation catalog for the legal calculation engine.
//!
//! The catalog maps each calculation-kind tag to its human label, legal
//! category and input schema, and carries the monthly rates used by the
//! monetary-correction formula. It is data, not code: the presentation layer
//! reads it to render the right form, and [`crate::calculation::compute`]
//! dispatches on the same tags.

mod kinds;
mod rates;
mod schema;

pub use kinds::{CalculationKind, Category};
pub use rates::{CorrectionIndex, RateProvider, RateTable, SimulatedRates};
pub use schema::{CalculationSpec, FieldKind, FieldSpec, catalog, find_spec};
