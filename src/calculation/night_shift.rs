//! Night-shift premium calculation (CLT art. 73).
//!
//! Urban night work pays a 20% premium, and the legal night hour lasts
//! 52 minutes 30 seconds, so each clock hour worked at night counts for
//! more than one paid hour. The formula pays the 20% premium on the clock
//! hours and then the premium-loaded value of the hour difference created
//! by the reduced hour.

use rust_decimal::Decimal;

use crate::models::{InputRecord, ResultRecord};

use super::DEFAULT_MONTHLY_HOURS;

/// Night premium: 20% over the normal hour (CLT art. 73, caput).
const NIGHT_PREMIUM_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Clock-hours to legal night hours factor: 52.5 / 60 (CLT art. 73 §1º).
const REDUCED_HOUR_FACTOR: Decimal = Decimal::from_parts(875, 0, 0, false, 3);

/// Premium-loaded multiplier for the reduced-hour difference (1.20).
const LOADED_HOUR_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// Calculates the night-shift premium over a 220-hour month.
///
/// Inputs: `base_salary` and `night_hours` (clock hours worked between
/// 22:00 and 05:00), both coerced to 0 when absent or malformed.
pub fn calculate_night_shift_premium(input: &InputRecord) -> ResultRecord {
    let base_salary = input.decimal("base_salary");
    let night_hours = input.decimal("night_hours");

    let hourly_rate = base_salary / DEFAULT_MONTHLY_HOURS;
    let premium_20pct = hourly_rate * NIGHT_PREMIUM_RATE * night_hours;

    let reduced_hours = night_hours * REDUCED_HOUR_FACTOR;
    let hour_difference = night_hours - reduced_hours;
    let difference_value = hour_difference * hourly_rate * LOADED_HOUR_RATE;

    let total = premium_20pct + difference_value;

    let mut result = ResultRecord::new();
    result.insert("hourly_rate", hourly_rate);
    result.insert("premium_20pct", premium_20pct);
    result.insert("reduced_hours", reduced_hours);
    result.insert("hour_difference", hour_difference);
    result.insert("difference_value", difference_value);
    result.insert("total", total);
    result
}
