//! Input records and the best-effort coercion policy.
//!
//! Calculation inputs arrive from web forms as loosely-typed JSON. The
//! engine never rejects malformed values: every accessor coerces to the
//! field's documented default (usually zero) and the formula proceeds. This
//! graceful-degradation policy is part of the engine's contract — callers
//! and tests depend on it, so it must not be tightened into strict
//! validation. Negative numbers are allowed to flow through unclamped.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A loosely-typed mapping from field name to form value.
///
/// # Example
///
/// ```
/// use juscalc::models::InputRecord;
/// use rust_decimal::Decimal;
///
/// let input = InputRecord::new()
///     .with("base_salary", 3000)
///     .with("months_worked", "12");
///
/// assert_eq!(input.decimal("base_salary"), Decimal::from(3000));
/// // Unparseable text coerces to the default, never an error.
/// assert_eq!(input.decimal("missing"), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputRecord {
    fields: BTreeMap<String, Value>,
}

impl InputRecord {
    /// Creates an empty input record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, consuming and returning the record (builder style).
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Sets a field in place.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Returns the raw value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reads a numeric field, coercing absent or unparseable values to
    /// `default`.
    ///
    /// Accepts JSON numbers and numeric strings (including scientific
    /// notation). Anything else coerces to `default`.
    pub fn decimal_or(&self, name: &str, default: Decimal) -> Decimal {
        match self.fields.get(name) {
            Some(Value::Number(n)) => parse_decimal(&n.to_string()).unwrap_or(default),
            Some(Value::String(s)) => parse_decimal(s.trim()).unwrap_or(default),
            _ => default,
        }
    }

    /// Reads a numeric field, coercing to zero on absence or bad input.
    pub fn decimal(&self, name: &str) -> Decimal {
        self.decimal_or(name, Decimal::ZERO)
    }

    /// Reads a divisor field: absent, unparseable *or zero* values coerce to
    /// `default`, so formulas dividing by it never produce a non-finite
    /// result.
    pub fn divisor_or(&self, name: &str, default: Decimal) -> Decimal {
        let value = self.decimal_or(name, default);
        if value.is_zero() { default } else { value }
    }

    /// Reads an integer field, truncating toward zero; coerces to `default`
    /// on absence, bad input, or values outside the `i64` range.
    pub fn integer_or(&self, name: &str, default: i64) -> i64 {
        match self.fields.get(name) {
            Some(_) => self
                .decimal_or(name, Decimal::from(default))
                .trunc()
                .to_i64()
                .unwrap_or(default),
            None => default,
        }
    }

    /// Reads a calendar date field (`YYYY-MM-DD`).
    ///
    /// Absent or unparseable dates yield `None`; per the coercion policy the
    /// formulas treat that as a zero-length span, not an error.
    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.fields.get(name) {
            Some(Value::String(s)) => NaiveDate::from_str(s.trim()).ok(),
            _ => None,
        }
    }

    /// Reads an enumerated string field, falling back to `default` when the
    /// field is absent or not a string.
    ///
    /// Option tags are not validated here: formulas compare against the
    /// tags they know and treat anything else like the fallback branch.
    pub fn choice_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.fields.get(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim(),
            _ => default,
        }
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_number_and_numeric_string_both_parse() {
        let input = InputRecord::new()
            .with("a", 3000)
            .with("b", "2200.50")
            .with("c", 10.5);

        assert_eq!(input.decimal("a"), dec("3000"));
        assert_eq!(input.decimal("b"), dec("2200.50"));
        assert_eq!(input.decimal("c"), dec("10.5"));
    }

    #[test]
    fn test_malformed_numeric_coerces_to_default() {
        let input = InputRecord::new()
            .with("salary", "abc")
            .with("hours", Value::Null)
            .with("flag", true);

        assert_eq!(input.decimal("salary"), Decimal::ZERO);
        assert_eq!(input.decimal_or("hours", dec("220")), dec("220"));
        assert_eq!(input.decimal("flag"), Decimal::ZERO);
        assert_eq!(input.decimal("absent"), Decimal::ZERO);
    }

    #[test]
    fn test_negative_values_flow_through_unclamped() {
        let input = InputRecord::new().with("salary", "-3000");
        assert_eq!(input.decimal("salary"), dec("-3000"));
    }

    #[test]
    fn test_divisor_guards_zero() {
        let input = InputRecord::new().with("monthly_hours", 0);
        assert_eq!(input.divisor_or("monthly_hours", dec("220")), dec("220"));

        let input = InputRecord::new().with("monthly_hours", "180");
        assert_eq!(input.divisor_or("monthly_hours", dec("220")), dec("180"));

        let input = InputRecord::new();
        assert_eq!(input.divisor_or("monthly_hours", dec("220")), dec("220"));
    }

    #[test]
    fn test_integer_truncates_toward_zero() {
        let input = InputRecord::new()
            .with("months", "14.9")
            .with("neg", "-2.7");
        assert_eq!(input.integer_or("months", 0), 14);
        assert_eq!(input.integer_or("neg", 0), -2);
        assert_eq!(input.integer_or("absent", 1), 1);
    }

    #[test]
    fn test_garbage_integer_coerces_to_default() {
        let input = InputRecord::new().with("child_count", "dois");
        assert_eq!(input.integer_or("child_count", 1), 1);
    }

    #[test]
    fn test_date_parses_iso_and_rejects_garbage() {
        let input = InputRecord::new()
            .with("start_date", "2024-01-01")
            .with("end_date", "not a date");

        assert_eq!(
            input.date("start_date"),
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(input.date("end_date"), None);
        assert_eq!(input.date("absent"), None);
    }

    #[test]
    fn test_choice_falls_back_to_default() {
        let input = InputRecord::new()
            .with("notice_type", "indemnified")
            .with("empty", "  ");

        assert_eq!(input.choice_or("notice_type", "worked"), "indemnified");
        assert_eq!(input.choice_or("empty", "worked"), "worked");
        assert_eq!(input.choice_or("absent", "worked"), "worked");
    }

    #[test]
    fn test_scientific_notation_parses() {
        let input = InputRecord::new().with("value", "1e3");
        assert_eq!(input.decimal("value"), dec("1000"));
    }

    #[test]
    fn test_serde_is_transparent_map() {
        let input = InputRecord::new().with("base_salary", 3000);
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"base_salary":3000}"#);

        let back: InputRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
