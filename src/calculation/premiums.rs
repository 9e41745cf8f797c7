//! Unhealthy-conditions and hazard premium calculations.
//!
//! Both premiums share the same composition: a monthly premium, the sum
//! over the exposure period, a 13th-salary reflex equal to one monthly
//! premium, and a vacation reflex of the monthly premium plus one third.
//! They differ only in the base: insalubridade is a percentage of the
//! reference minimum wage by degree (CLT art. 192), periculosidade is a
//! flat 30% of the base salary (CLT art. 193 §1º).

use rust_decimal::Decimal;

use crate::models::{InputRecord, ResultRecord};

/// Reference minimum wage used when none is supplied (2024 national floor).
pub const DEFAULT_MINIMUM_WAGE: Decimal = Decimal::from_parts(1412, 0, 0, false, 0);

/// Default insalubridade degree when none is selected: 20% (medium).
const DEFAULT_DEGREE_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Hazard premium rate: 30% of the base salary.
const HAZARD_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

/// Calculates the unhealthy-conditions premium (adicional de insalubridade).
///
/// # Inputs
///
/// * `minimum_wage` — reference base (default 1412)
/// * `degree_percent` — 10, 20 or 40 (default 20)
/// * `months` — months of exposure (coerced to 0)
pub fn calculate_unhealthy_premium(input: &InputRecord) -> ResultRecord {
    let minimum_wage = input.decimal_or("minimum_wage", DEFAULT_MINIMUM_WAGE);
    let degree_percent = input.decimal_or("degree_percent", DEFAULT_DEGREE_PERCENT);
    let months = input.integer_or("months", 0);

    let monthly_premium = minimum_wage * degree_percent / Decimal::ONE_HUNDRED;
    premium_composition(monthly_premium, months)
}

/// Calculates the hazard premium (adicional de periculosidade).
///
/// Inputs: `base_salary` (coerced to 0) and `months` of exposure.
pub fn calculate_hazard_premium(input: &InputRecord) -> ResultRecord {
    let base_salary = input.decimal("base_salary");
    let months = input.integer_or("months", 0);

    let monthly_premium = base_salary * HAZARD_RATE;
    premium_composition(monthly_premium, months)
}

/// Shared reflex/total composition for both premiums.
fn premium_composition(monthly_premium: Decimal, months: i64) -> ResultRecord {
    let total_period = monthly_premium * Decimal::from(months);
    let thirteenth_reflex = monthly_premium;
    let vacation_reflex = monthly_premium * Decimal::from(4) / Decimal::from(3);
    let total = total_period + thirteenth_reflex + vacation_reflex;

    let mut result = ResultRecord::new();
    result.insert("monthly_premium", monthly_premium);
    result.insert("total_period", total_period);
    result.insert("thirteenth_reflex", thirteenth_reflex);
    result.insert("vacation_reflex", vacation_reflex);
    result.insert("total", total);
    result
}
