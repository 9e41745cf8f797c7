//! Attorney-fee (honorários de sucumbência) calculation.

use rust_decimal::Decimal;

use crate::models::{InputRecord, ResultRecord};

/// Statutory floor: 10% of the case value (CPC art. 85 §2º).
const FLOOR_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Statutory ceiling: 20% of the case value (CPC art. 85 §2º).
const CEILING_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Calculates attorney fees as a percentage of the case value.
///
/// Inputs: `case_value` (coerced to 0) and `percent` as a whole number
/// (default 10, the statutory floor). The 10% and 20% reference bounds are
/// reported alongside the fee for context; the percentage itself is not
/// clamped to them.
pub fn calculate_attorney_fees(input: &InputRecord) -> ResultRecord {
    let case_value = input.decimal("case_value");
    let percent = input.decimal_or("percent", Decimal::TEN);

    let fees = case_value * percent / Decimal::ONE_HUNDRED;
    let min_10pct = case_value * FLOOR_RATE;
    let max_20pct = case_value * CEILING_RATE;

    let mut result = ResultRecord::new();
    result.insert("fees", fees);
    result.insert("min_10pct", min_10pct);
    result.insert("max_20pct", max_20pct);
    result.insert("total", fees);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fees_at_fifteen_percent() {
        let input = InputRecord::new()
            .with("case_value", 10000)
            .with("percent", 15);

        let result = calculate_attorney_fees(&input);

        assert_eq!(result.number("fees"), Some(dec("1500")));
        assert_eq!(result.number("min_10pct"), Some(dec("1000")));
        assert_eq!(result.number("max_20pct"), Some(dec("2000")));
        assert_eq!(result.total(), dec("1500"));
    }

    #[test]
    fn test_percent_defaults_to_the_floor() {
        let input = InputRecord::new().with("case_value", 10000);
        let result = calculate_attorney_fees(&input);
        assert_eq!(result.number("fees"), Some(dec("1000")));
    }

    #[test]
    fn test_out_of_band_percent_is_not_clamped() {
        let input = InputRecord::new()
            .with("case_value", 10000)
            .with("percent", 25);
        let result = calculate_attorney_fees(&input);
        assert_eq!(result.number("fees"), Some(dec("2500")));
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let result = calculate_attorney_fees(&InputRecord::new());
        assert_eq!(result.total(), dec("0"));
    }
}
