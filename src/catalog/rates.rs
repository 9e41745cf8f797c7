//! Monthly rates for the monetary-correction indices.
//!
//! The fixed rates in [`SimulatedRates`] are placeholders pending integration
//! with a real index-rate provider (IBGE/FGV/BACEN series). They sit behind
//! the [`RateProvider`] trait so a real data source can be substituted
//! without touching the formula logic; [`RateTable`] is a YAML-backed
//! implementation for overriding the rates from a config file.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Simulated monthly IPCA rate (0.5% per month).
pub const IPCA_MONTHLY_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// Simulated monthly INPC rate (0.48% per month).
pub const INPC_MONTHLY_RATE: Decimal = Decimal::from_parts(48, 0, 0, false, 4);

/// Simulated monthly IGP-M rate (0.6% per month).
pub const IGPM_MONTHLY_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 3);

/// Simulated monthly SELIC rate (0.75% per month).
pub const SELIC_MONTHLY_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 4);

/// One of the correction indices the monetary-correction formula accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionIndex {
    /// Broad consumer price index (IBGE).
    Ipca,
    /// National consumer price index (IBGE).
    Inpc,
    /// General market price index (FGV).
    Igpm,
    /// Central bank base rate.
    Selic,
}

impl CorrectionIndex {
    /// Returns the stable string tag for this index.
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectionIndex::Ipca => "ipca",
            CorrectionIndex::Inpc => "inpc",
            CorrectionIndex::Igpm => "igpm",
            CorrectionIndex::Selic => "selic",
        }
    }

    /// All indices, in catalog order.
    pub fn all() -> &'static [CorrectionIndex] {
        &[
            CorrectionIndex::Ipca,
            CorrectionIndex::Inpc,
            CorrectionIndex::Igpm,
            CorrectionIndex::Selic,
        ]
    }
}

impl fmt::Display for CorrectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrectionIndex {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CorrectionIndex::all()
            .iter()
            .find(|i| i.as_str() == s)
            .copied()
            .ok_or_else(|| EngineError::UnknownIndex {
                index: s.to_string(),
            })
    }
}

/// Source of monthly rates for the correction indices.
///
/// The monetary-correction formula is generic over this trait so the
/// simulated placeholder rates can later be replaced by a live series.
pub trait RateProvider {
    /// Returns the monthly rate for the given index (e.g. `0.005` for 0.5%).
    fn monthly_rate(&self, index: CorrectionIndex) -> Decimal;
}

/// The placeholder rates shipped with the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedRates;

impl RateProvider for SimulatedRates {
    fn monthly_rate(&self, index: CorrectionIndex) -> Decimal {
        match index {
            CorrectionIndex::Ipca => IPCA_MONTHLY_RATE,
            CorrectionIndex::Inpc => INPC_MONTHLY_RATE,
            CorrectionIndex::Igpm => IGPM_MONTHLY_RATE,
            CorrectionIndex::Selic => SELIC_MONTHLY_RATE,
        }
    }
}

/// Shape of the YAML index-rate file.
#[derive(Debug, Deserialize)]
struct RateFile {
    rates: HashMap<String, Decimal>,
}

/// A rate table loaded from a YAML file, falling back to the simulated
/// rates for indices the file does not mention.
///
/// # File format
///
/// ```yaml
/// rates:
///   ipca: "0.0043"
///   inpc: "0.0041"
/// ```
///
/// # Example
///
/// ```no_run
/// use juscalc::catalog::{CorrectionIndex, RateProvider, RateTable};
///
/// let table = RateTable::load("./config/indices.yaml")?;
/// let rate = table.monthly_rate(CorrectionIndex::Ipca);
/// # Ok::<(), juscalc::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RateTable {
    overrides: HashMap<CorrectionIndex, Decimal>,
}

impl RateTable {
    /// Loads a rate table from the given YAML file.
    ///
    /// Returns `RatesNotFound` if the file is missing, `RatesParseError` if
    /// it is not valid YAML, and `UnknownIndex` if it names an index tag the
    /// engine does not know.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RatesNotFound {
            path: path_str.clone(),
        })?;

        let file: RateFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::RatesParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        let mut overrides = HashMap::new();
        for (tag, rate) in file.rates {
            let index = tag.parse::<CorrectionIndex>()?;
            overrides.insert(index, rate);
        }

        Ok(Self { overrides })
    }

    /// Builds a rate table directly from index/rate pairs.
    pub fn from_overrides(overrides: HashMap<CorrectionIndex, Decimal>) -> Self {
        Self { overrides }
    }
}

impl RateProvider for RateTable {
    fn monthly_rate(&self, index: CorrectionIndex) -> Decimal {
        self.overrides
            .get(&index)
            .copied()
            .unwrap_or_else(|| SimulatedRates.monthly_rate(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_simulated_rates_match_constants() {
        let rates = SimulatedRates;
        assert_eq!(rates.monthly_rate(CorrectionIndex::Ipca), dec("0.005"));
        assert_eq!(rates.monthly_rate(CorrectionIndex::Inpc), dec("0.0048"));
        assert_eq!(rates.monthly_rate(CorrectionIndex::Igpm), dec("0.006"));
        assert_eq!(rates.monthly_rate(CorrectionIndex::Selic), dec("0.0075"));
    }

    #[test]
    fn test_index_roundtrips_through_tag() {
        for index in CorrectionIndex::all() {
            let parsed: CorrectionIndex = index.as_str().parse().unwrap();
            assert_eq!(parsed, *index);
        }
    }

    #[test]
    fn test_unknown_index_tag_is_an_error() {
        let result: Result<CorrectionIndex, _> = "tr".parse();
        match result.unwrap_err() {
            EngineError::UnknownIndex { index } => assert_eq!(index, "tr"),
            other => panic!("Expected UnknownIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_table_override_and_fallback() {
        let mut overrides = HashMap::new();
        overrides.insert(CorrectionIndex::Ipca, dec("0.0043"));
        let table = RateTable::from_overrides(overrides);

        assert_eq!(table.monthly_rate(CorrectionIndex::Ipca), dec("0.0043"));
        // Not overridden: falls back to the simulated rate.
        assert_eq!(table.monthly_rate(CorrectionIndex::Selic), dec("0.0075"));
    }

    #[test]
    fn test_rate_table_load_missing_file_is_not_found() {
        let result = RateTable::load("/definitely/missing/indices.yaml");
        match result.unwrap_err() {
            EngineError::RatesNotFound { path } => {
                assert!(path.contains("indices.yaml"));
            }
            other => panic!("Expected RatesNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_table_load_from_repo_config() {
        let table = RateTable::load("./config/indices.yaml").unwrap();
        // The shipped file mirrors the simulated placeholder rates.
        assert_eq!(table.monthly_rate(CorrectionIndex::Ipca), dec("0.005"));
        assert_eq!(table.monthly_rate(CorrectionIndex::Igpm), dec("0.006"));
    }
}
