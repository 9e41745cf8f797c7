//! Overtime calculation with the weekly-rest (DSR) reflex.

use rust_decimal::Decimal;

use crate::models::{InputRecord, ResultRecord};

/// Default monthly divisor of 220 hours (CLT art. 64: 44h week).
pub const DEFAULT_MONTHLY_HOURS: Decimal = Decimal::from_parts(220, 0, 0, false, 0);

/// Calculates overtime pay plus its reflex on the paid weekly rest.
///
/// # Inputs
///
/// * `base_salary` — monthly salary (coerced to 0)
/// * `monthly_hours` — contractual monthly hours; absent, unparseable or
///   zero values fall back to 220 so the hourly rate stays finite
/// * `overtime_hours` — overtime hours worked (coerced to 0)
/// * `premium_percent` — 50 or 100, given as a whole number (default 50)
///
/// # Formula
///
/// The hourly rate is `base_salary / monthly_hours`; each overtime hour is
/// paid at `1 + premium/100` times that rate (CLT art. 59 §1º). The DSR
/// reflex adds one sixth of the overtime value (Lei 605/49, súmula 172 TST).
///
/// # Example
///
/// ```
/// use juscalc::calculation::calculate_overtime;
/// use juscalc::models::InputRecord;
/// use rust_decimal::Decimal;
///
/// let input = InputRecord::new()
///     .with("base_salary", 2200)
///     .with("overtime_hours", 10);
///
/// let result = calculate_overtime(&input);
/// assert_eq!(result.total(), Decimal::from(175));
/// ```
pub fn calculate_overtime(input: &InputRecord) -> ResultRecord {
    let base_salary = input.decimal("base_salary");
    let monthly_hours = input.divisor_or("monthly_hours", DEFAULT_MONTHLY_HOURS);
    let overtime_hours = input.decimal("overtime_hours");
    let premium_percent = input.decimal_or("premium_percent", Decimal::from(50));

    let hourly_rate = base_salary / monthly_hours;
    let overtime_hourly_rate = hourly_rate * (Decimal::ONE + premium_percent / Decimal::ONE_HUNDRED);
    let overtime_total = overtime_hourly_rate * overtime_hours;
    let weekly_rest_reflex = overtime_total / Decimal::from(6);
    let total = overtime_total + weekly_rest_reflex;

    let mut result = ResultRecord::new();
    result.insert("hourly_rate", hourly_rate);
    result.insert("overtime_hourly_rate", overtime_hourly_rate);
    result.insert("overtime_total", overtime_total);
    result.insert("weekly_rest_reflex", weekly_rest_reflex);
    result.insert("total", total);
    result
}
