//! Asset-division (partilha de bens) calculation.

use rust_decimal::Decimal;

use crate::models::{InputRecord, ResultRecord};

/// Default share: an even 50/50 split (meação).
const DEFAULT_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Splits a total estate between two parties.
///
/// Inputs: `total_assets` (coerced to 0) and `percent` as a whole number
/// (default 50). `total` is the requesting party's share; the remainder
/// goes to the other party.
pub fn calculate_asset_division(input: &InputRecord) -> ResultRecord {
    let total_assets = input.decimal("total_assets");
    let percent = input.decimal_or("percent", DEFAULT_PERCENT);

    let share_value = total_assets * percent / Decimal::ONE_HUNDRED;
    let other_party_value = total_assets - share_value;

    let mut result = ResultRecord::new();
    result.insert("share_value", share_value);
    result.insert("other_party_value", other_party_value);
    result.insert("total", share_value);
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
    fn test_even_split_by_default() {
        let input = InputRecord::new().with("total_assets", 200000);
        let result = calculate_asset_division(&input);

        assert_eq!(result.number("share_value"), Some(dec("100000")));
        assert_eq!(result.number("other_party_value"), Some(dec("100000")));
        assert_eq!(result.total(), dec("100000"));
    }

    #[test]
    fn test_uneven_split_keeps_the_remainder_for_the_other_party() {
        let input = InputRecord::new()
            .with("total_assets", 300000)
            .with("percent", 60);
        let result = calculate_asset_division(&input);

        assert_eq!(result.number("share_value"), Some(dec("180000")));
        assert_eq!(result.number("other_party_value"), Some(dec("120000")));
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let result = calculate_asset_division(&InputRecord::new());
        assert_eq!(result.total(), dec("0"));
        assert_eq!(result.number("other_party_value"), Some(dec("0")));
    }
}
