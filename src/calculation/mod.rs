//! Calculation logic for the legal calculation engine.
//!
//! This module contains one pure formula per calculation kind — severance
//! pay, overtime, night-shift premium, unhealthy-conditions and hazard
//! premiums, monetary correction, attorney fees, child support, asset
//! division and contribution time — plus the [`compute`] dispatch that maps
//! a [`CalculationKind`] to its formula.
//!
//! Every formula is deterministic, side-effect free and total: malformed
//! input is coerced to documented defaults by [`InputRecord`], divisions are
//! guarded, and no call panics or produces a non-finite value.

mod asset_division;
mod attorney_fees;
mod child_support;
mod contribution_time;
mod monetary_correction;
mod night_shift;
mod overtime;
mod premiums;
mod severance_pay;

pub use asset_division::calculate_asset_division;
pub use attorney_fees::calculate_attorney_fees;
pub use child_support::calculate_child_support;
pub use contribution_time::calculate_contribution_time;
pub use monetary_correction::calculate_monetary_correction;
pub use night_shift::calculate_night_shift_premium;
pub use overtime::{DEFAULT_MONTHLY_HOURS, calculate_overtime};
pub use premiums::{calculate_hazard_premium, calculate_unhealthy_premium};
pub use severance_pay::calculate_severance_pay;

use crate::catalog::{CalculationKind, RateProvider, SimulatedRates};
use crate::models::{InputRecord, ResultRecord};

/// Runs the calculation identified by `kind` over `input`.
///
/// This is the engine's single function-call boundary: a synchronous pure
/// evaluation with no intermediate state. Monetary correction uses the
/// built-in simulated index rates; use [`compute_with_rates`] to substitute
/// a different [`RateProvider`].
///
/// # Example
///
/// ```
/// use juscalc::calculation::compute;
/// use juscalc::catalog::CalculationKind;
/// use juscalc::models::InputRecord;
/// use rust_decimal::Decimal;
///
/// let input = InputRecord::new()
///     .with("case_value", 10000)
///     .with("percent", 15);
/// let result = compute(CalculationKind::AttorneyFees, &input);
/// assert_eq!(result.total(), Decimal::from(1500));
/// ```
pub fn compute(kind: CalculationKind, input: &InputRecord) -> ResultRecord {
    compute_with_rates(kind, input, &SimulatedRates)
}

/// Runs the calculation identified by `kind` with an explicit rate provider
/// for the monetary-correction indices.
pub fn compute_with_rates(
    kind: CalculationKind,
    input: &InputRecord,
    rates: &dyn RateProvider,
) -> ResultRecord {
    match kind {
        CalculationKind::SeverancePay => calculate_severance_pay(input),
        CalculationKind::Overtime => calculate_overtime(input),
        CalculationKind::NightShiftPremium => calculate_night_shift_premium(input),
        CalculationKind::UnhealthyConditionsPremium => calculate_unhealthy_premium(input),
        CalculationKind::HazardPremium => calculate_hazard_premium(input),
        CalculationKind::MonetaryCorrection => calculate_monetary_correction(input, rates),
        CalculationKind::AttorneyFees => calculate_attorney_fees(input),
        CalculationKind::ChildSupport => calculate_child_support(input),
        CalculationKind::AssetDivision => calculate_asset_division(input),
        CalculationKind::ContributionTime => calculate_contribution_time(input),
    }
}
