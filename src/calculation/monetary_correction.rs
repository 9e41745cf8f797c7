//! Monetary correction with compound index correction and simple interest.

use rust_decimal::{Decimal, MathematicalOps};

use crate::catalog::{CorrectionIndex, RateProvider};
use crate::models::{InputRecord, ResultRecord};

/// Default simple-interest rate: 1% per month (CC art. 406 convention).
const DEFAULT_MONTHLY_INTEREST_PERCENT: Decimal = Decimal::ONE;

/// Corrects a historical value by a price index and accrues simple interest.
///
/// # Inputs
///
/// * `original_value` — the historical amount (coerced to 0)
/// * `start_date`, `end_date` — calendar dates; a missing or unparseable
///   date yields a zero-day span
/// * `index` — `ipca`, `inpc`, `igpm` or `selic` (default `ipca`; unknown
///   tags also fall back to `ipca`)
/// * `monthly_interest_percent` — whole-number percentage (default 1)
///
/// # Formula
///
/// Elapsed months are `max(1, floor(days / 30))` over the date span, so any
/// span shorter than a month still accrues one month. The index correction
/// compounds monthly at the provider's rate; interest is simple over the
/// same months. Extreme date ranges saturate instead of overflowing.
///
/// The monthly rates come from the [`RateProvider`] — the built-in
/// [`crate::catalog::SimulatedRates`] are placeholders pending a real
/// index-series integration.
///
/// # Example
///
/// ```
/// use juscalc::calculation::calculate_monetary_correction;
/// use juscalc::catalog::SimulatedRates;
/// use juscalc::models::InputRecord;
/// use rust_decimal::Decimal;
///
/// let input = InputRecord::new()
///     .with("original_value", 1000)
///     .with("start_date", "2024-01-01")
///     .with("end_date", "2024-07-01")
///     .with("index", "ipca");
///
/// let result = calculate_monetary_correction(&input, &SimulatedRates);
/// assert_eq!(result.number("elapsed_months"), Some(Decimal::from(6)));
/// ```
pub fn calculate_monetary_correction(
    input: &InputRecord,
    rates: &dyn RateProvider,
) -> ResultRecord {
    let original_value = input.decimal("original_value");
    let monthly_interest_percent =
        input.decimal_or("monthly_interest_percent", DEFAULT_MONTHLY_INTEREST_PERCENT);

    let days = match (input.date("start_date"), input.date("end_date")) {
        (Some(start), Some(end)) => (end - start).num_days(),
        _ => 0,
    };
    let elapsed_months = days.div_euclid(30).max(1);

    let index = input
        .choice_or("index", "ipca")
        .parse::<CorrectionIndex>()
        .unwrap_or(CorrectionIndex::Ipca);
    let monthly_rate = rates.monthly_rate(index);

    let compound_factor = (Decimal::ONE + monthly_rate)
        .checked_powi(elapsed_months)
        .unwrap_or(Decimal::MAX);
    let accumulated_correction = compound_factor - Decimal::ONE;

    let corrected_value = original_value.saturating_mul(compound_factor);
    let accrued_interest = original_value
        .saturating_mul(monthly_interest_percent / Decimal::ONE_HUNDRED)
        .saturating_mul(Decimal::from(elapsed_months));
    let total = corrected_value.saturating_add(accrued_interest);

    let mut result = ResultRecord::new();
    result.insert("original_value", original_value);
    result.insert("elapsed_months", Decimal::from(elapsed_months));
    result.insert(
        "accumulated_correction_percent",
        accumulated_correction.saturating_mul(Decimal::ONE_HUNDRED),
    );
    result.insert("corrected_value", corrected_value);
    result.insert("accrued_interest", accrued_interest);
    result.insert("total", total);
    result
}
