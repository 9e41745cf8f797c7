//! Child-support (pensão alimentícia) calculation.

use rust_decimal::Decimal;

use crate::models::{InputRecord, ResultRecord};

/// Default support percentage over the payer's income: 30%.
const DEFAULT_PERCENT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Months in the annual projection, excluding the 13th-salary reflex.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Calculates monthly and annual child support over the payer's income.
///
/// # Inputs
///
/// * `payer_monthly_income` — gross monthly income (coerced to 0)
/// * `percent` — whole-number percentage of income (default 30)
/// * `child_count` — number of children; floor-guarded to 1 so the
///   per-child split never divides by zero
///
/// The annual total projects twelve monthly payments plus the 13th-salary
/// reflex (one extra monthly payment); `total` is that annual figure.
pub fn calculate_child_support(input: &InputRecord) -> ResultRecord {
    let income = input.decimal("payer_monthly_income");
    let percent = input.decimal_or("percent", DEFAULT_PERCENT);
    let child_count = input.integer_or("child_count", 1).max(1);

    let monthly_support = income * percent / Decimal::ONE_HUNDRED;
    let per_child = monthly_support / Decimal::from(child_count);
    let annual_support = monthly_support * MONTHS_PER_YEAR;
    let thirteenth_reflex = monthly_support;
    let total = annual_support + thirteenth_reflex;

    let mut result = ResultRecord::new();
    result.insert("support_percent", percent);
    result.insert("monthly_support", monthly_support);
    result.insert("per_child", per_child);
    result.insert("thirteenth_reflex", thirteenth_reflex);
    result.insert("annual_support", annual_support);
    result.insert("total", total);
    result
}
