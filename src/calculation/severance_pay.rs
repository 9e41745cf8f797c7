//! Severance pay (verbas rescisórias) calculation.
//!
//! Computes the amounts due on contract termination: salary balance,
//! prorated 13th-month bonus, prorated and unused vacation with the
//! constitutional one-third, notice pay and the FGTS penalty.

use rust_decimal::Decimal;

use crate::models::{InputRecord, ResultRecord};

/// FGTS deposit rate: 8% of the monthly salary (Lei 8.036/90, art. 15).
const FGTS_DEPOSIT_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// FGTS penalty on dismissal without cause: 40% of deposits (art. 18 §1º).
const FGTS_PENALTY_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 1);

/// Calculates severance pay for a terminated employment contract.
///
/// # Inputs
///
/// * `base_salary` — monthly salary (currency, coerced to 0)
/// * `months_worked` — total months of service (integer, coerced to 0)
/// * `unused_vacation_periods` — count of expired, untaken vacation periods
/// * `notice_type` — `worked` or `indemnified` (default `worked`)
/// * `termination_reason` — `without_cause`, `with_cause`, `resignation` or
///   `mutual_agreement` (default `without_cause`)
///
/// # Formula
///
/// The salary balance assumes half a month worked. The 13th-month bonus and
/// vacation are prorated by `months_worked mod 12`, where a remainder of
/// zero counts as a full 12-month year. Notice is 30 days plus 3 days per
/// completed year of service, capped at 60 additional days (Lei
/// 12.506/2011), and is only paid out when indemnified. FGTS deposits are
/// 8% of salary per month worked; dismissal without cause adds the 40%
/// penalty on the deposited amount. The deposited FGTS itself is reported
/// but not summed into `total` — only the penalty is newly owed.
///
/// # Example
///
/// ```
/// use juscalc::calculation::calculate_severance_pay;
/// use juscalc::models::InputRecord;
/// use rust_decimal::Decimal;
///
/// let input = InputRecord::new()
///     .with("base_salary", 3000)
///     .with("months_worked", 12)
///     .with("notice_type", "indemnified")
///     .with("termination_reason", "without_cause");
///
/// let result = calculate_severance_pay(&input);
/// assert_eq!(result.total(), Decimal::from(12952));
/// ```
pub fn calculate_severance_pay(input: &InputRecord) -> ResultRecord {
    let base_salary = input.decimal("base_salary");
    let months_worked = input.integer_or("months_worked", 0);
    let unused_vacation_periods = input.integer_or("unused_vacation_periods", 0);
    let notice_type = input.choice_or("notice_type", "worked");
    let termination_reason = input.choice_or("termination_reason", "without_cause");

    let balance_of_salary = base_salary / Decimal::TWO;

    // A zero remainder counts as a full year for proration.
    let remainder = months_worked % 12;
    let proportional_months = if remainder == 0 { 12 } else { remainder };
    let proportional_13th = base_salary / Decimal::from(12) * Decimal::from(proportional_months);

    let proportional_vacation = proportional_13th;
    let vacation_third = proportional_vacation / Decimal::from(3);

    let unused_vacation_total = if unused_vacation_periods > 0 {
        (base_salary + base_salary / Decimal::from(3)) * Decimal::from(unused_vacation_periods)
    } else {
        Decimal::ZERO
    };

    let completed_years = months_worked.div_euclid(12);
    let notice_days = 30 + (completed_years * 3).min(60);
    let notice_pay = if notice_type == "indemnified" {
        base_salary / Decimal::from(30) * Decimal::from(notice_days)
    } else {
        Decimal::ZERO
    };

    let severance_fund_deposited =
        base_salary * FGTS_DEPOSIT_RATE * Decimal::from(months_worked);
    let severance_fund_penalty = if termination_reason == "without_cause" {
        severance_fund_deposited * FGTS_PENALTY_RATE
    } else {
        Decimal::ZERO
    };

    let total = balance_of_salary
        + proportional_13th
        + proportional_vacation
        + vacation_third
        + unused_vacation_total
        + notice_pay
        + severance_fund_penalty;

    let mut result = ResultRecord::new();
    result.insert("balance_of_salary", balance_of_salary);
    result.insert("proportional_13th", proportional_13th);
    result.insert("proportional_vacation", proportional_vacation);
    result.insert("vacation_third", vacation_third);
    result.insert("unused_vacation_total", unused_vacation_total);
    result.insert("notice_days", Decimal::from(notice_days));
    result.insert("notice_pay", notice_pay);
    result.insert("severance_fund_deposited", severance_fund_deposited);
    result.insert("severance_fund_penalty", severance_fund_penalty);
    result.insert("total", total);
    result
}
