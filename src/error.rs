//! Error types for the legal calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The engine itself has almost nothing to fail on: malformed user input is
//! coerced to documented defaults rather than rejected, so the only
//! engine-level error is a calculation-kind tag that the catalog does not
//! know about. The remaining variants belong to the index-rate table loader.

use thiserror::Error;

/// The main error type for the legal calculation engine.
///
/// # Example
///
/// ```
/// use juscalc::error::EngineError;
///
/// let error = EngineError::UnknownCalculation {
///     kind: "icms".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown calculation kind: icms");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The calculation-kind tag is not in the catalog.
    ///
    /// This indicates a catalog/engine mismatch (a programming error in the
    /// caller), not bad user input.
    #[error("Unknown calculation kind: {kind}")]
    UnknownCalculation {
        /// The tag that was not recognized.
        kind: String,
    },

    /// The correction-index tag is not recognized.
    #[error("Unknown correction index: {index}")]
    UnknownIndex {
        /// The index tag that was not recognized.
        index: String,
    },

    /// The index-rate file was not found at the specified path.
    #[error("Index-rate file not found: {path}")]
    RatesNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The index-rate file could not be parsed.
    #[error("Failed to parse index-rate file '{path}': {message}")]
    RatesParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_calculation_displays_kind() {
        let error = EngineError::UnknownCalculation {
            kind: "fator_previdenciario".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown calculation kind: fator_previdenciario"
        );
    }

    #[test]
    fn test_unknown_index_displays_index() {
        let error = EngineError::UnknownIndex {
            index: "tr".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown correction index: tr");
    }

    #[test]
    fn test_rates_not_found_displays_path() {
        let error = EngineError::RatesNotFound {
            path: "/missing/indices.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Index-rate file not found: /missing/indices.yaml"
        );
    }

    #[test]
    fn test_rates_parse_error_displays_path_and_message() {
        let error = EngineError::RatesParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse index-rate file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_kind() -> EngineResult<()> {
            Err(EngineError::UnknownCalculation {
                kind: "irpf".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_kind()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
