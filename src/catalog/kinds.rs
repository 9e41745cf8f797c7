//! Calculation-kind and category tags.
//!
//! Kinds are fixed string tags grouped into the legal categories the
//! platform exposes as calculator tabs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The legal category a calculation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Labor law (CLT) calculations.
    Labor,
    /// Civil claims: monetary correction, attorney fees.
    Civil,
    /// Family law: child support, asset division.
    Family,
    /// Social security (INSS) calculations.
    SocialSecurity,
    /// Tax law. No calculations ship under it yet; the category exists so
    /// the catalog mirrors the platform's full tab set.
    Tax,
}

impl Category {
    /// Returns the stable string tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Labor => "labor",
            Category::Civil => "civil",
            Category::Family => "family",
            Category::SocialSecurity => "social_security",
            Category::Tax => "tax",
        }
    }

    /// All categories, in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Labor,
            Category::Civil,
            Category::Family,
            Category::SocialSecurity,
            Category::Tax,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one of the fixed set of calculations the engine implements.
///
/// # Example
///
/// ```
/// use juscalc::catalog::{CalculationKind, Category};
///
/// let kind: CalculationKind = "severance_pay".parse().unwrap();
/// assert_eq!(kind, CalculationKind::SeverancePay);
/// assert_eq!(kind.category(), Category::Labor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    /// Termination pay: salary balance, 13th, vacation, notice, FGTS penalty.
    SeverancePay,
    /// Overtime hours with the statutory 50% or 100% premium plus DSR reflex.
    Overtime,
    /// Night-shift premium (20%) with the reduced 52m30s night hour.
    NightShiftPremium,
    /// Unhealthy-conditions premium over the reference minimum wage.
    UnhealthyConditionsPremium,
    /// Hazard premium (30% of base salary).
    HazardPremium,
    /// Inflation correction of a historical value plus simple interest.
    MonetaryCorrection,
    /// Attorney fees as a percentage of the case value.
    AttorneyFees,
    /// Child support over the payer's monthly income.
    ChildSupport,
    /// Division of assets between parties.
    AssetDivision,
    /// Social-security contribution time in years, months and days.
    ContributionTime,
}

impl CalculationKind {
    /// Returns the stable string tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationKind::SeverancePay => "severance_pay",
            CalculationKind::Overtime => "overtime",
            CalculationKind::NightShiftPremium => "night_shift_premium",
            CalculationKind::UnhealthyConditionsPremium => "unhealthy_conditions_premium",
            CalculationKind::HazardPremium => "hazard_premium",
            CalculationKind::MonetaryCorrection => "monetary_correction",
            CalculationKind::AttorneyFees => "attorney_fees",
            CalculationKind::ChildSupport => "child_support",
            CalculationKind::AssetDivision => "asset_division",
            CalculationKind::ContributionTime => "contribution_time",
        }
    }

    /// Returns the legal category this kind belongs to.
    pub fn category(&self) -> Category {
        match self {
            CalculationKind::SeverancePay
            | CalculationKind::Overtime
            | CalculationKind::NightShiftPremium
            | CalculationKind::UnhealthyConditionsPremium
            | CalculationKind::HazardPremium => Category::Labor,
            CalculationKind::MonetaryCorrection | CalculationKind::AttorneyFees => Category::Civil,
            CalculationKind::ChildSupport | CalculationKind::AssetDivision => Category::Family,
            CalculationKind::ContributionTime => Category::SocialSecurity,
        }
    }

    /// All calculation kinds, in catalog order.
    pub fn all() -> &'static [CalculationKind] {
        &[
            CalculationKind::SeverancePay,
            CalculationKind::Overtime,
            CalculationKind::NightShiftPremium,
            CalculationKind::UnhealthyConditionsPremium,
            CalculationKind::HazardPremium,
            CalculationKind::MonetaryCorrection,
            CalculationKind::AttorneyFees,
            CalculationKind::ChildSupport,
            CalculationKind::AssetDivision,
            CalculationKind::ContributionTime,
        ]
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculationKind::all()
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| EngineError::UnknownCalculation {
                kind: s.to_string(),
            })
    }
}
