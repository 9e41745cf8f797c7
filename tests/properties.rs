//! Property-based tests for the calculation engine.
//!
//! The engine promises to be total over arbitrary form input: any JSON
//! object must produce a result record without panicking, the same input
//! must always produce the same output, and every record must carry a
//! `total` field. These properties are checked over randomized inputs.

use proptest::prelude::*;
use serde_json::Value;

use juscalc::calculation::compute;
use juscalc::catalog::CalculationKind;
use juscalc::models::InputRecord;

/// Field names drawn from every calculation's schema, plus strays.
fn field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("base_salary".to_string()),
        Just("months_worked".to_string()),
        Just("unused_vacation_periods".to_string()),
        Just("notice_type".to_string()),
        Just("termination_reason".to_string()),
        Just("monthly_hours".to_string()),
        Just("overtime_hours".to_string()),
        Just("premium_percent".to_string()),
        Just("night_hours".to_string()),
        Just("minimum_wage".to_string()),
        Just("degree_percent".to_string()),
        Just("months".to_string()),
        Just("original_value".to_string()),
        Just("start_date".to_string()),
        Just("end_date".to_string()),
        Just("index".to_string()),
        Just("monthly_interest_percent".to_string()),
        Just("case_value".to_string()),
        Just("percent".to_string()),
        Just("payer_monthly_income".to_string()),
        Just("child_count".to_string()),
        Just("total_assets".to_string()),
        "[a-z_]{1,20}",
    ]
}

/// Field values spanning well-formed numbers, dates, garbage and nulls.
fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1_000_000i64..1_000_000i64).prop_map(|n| Value::from(n)),
        (-1e9f64..1e9f64).prop_map(Value::from),
        "-?[0-9]{1,9}(\\.[0-9]{1,4})?".prop_map(Value::from),
        "[0-9]{4}-[0-9]{2}-[0-9]{2}".prop_map(Value::from),
        "\\PC{0,12}".prop_map(Value::from),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
    ]
}

fn arbitrary_input() -> impl Strategy<Value = InputRecord> {
    proptest::collection::vec((field_name(), field_value()), 0..12).prop_map(|fields| {
        let mut input = InputRecord::new();
        for (name, value) in fields {
            input.set(&name, value);
        }
        input
    })
}

fn any_kind() -> impl Strategy<Value = CalculationKind> {
    proptest::sample::select(CalculationKind::all())
}

proptest! {
    /// The engine never panics, whatever the form sends.
    #[test]
    fn compute_is_total_over_arbitrary_input(
        kind in any_kind(),
        input in arbitrary_input(),
    ) {
        let result = compute(kind, &input);
        prop_assert!(!result.is_empty());
    }

    /// Same input, same output.
    #[test]
    fn compute_is_deterministic(
        kind in any_kind(),
        input in arbitrary_input(),
    ) {
        let first = compute(kind, &input);
        let second = compute(kind, &input);
        prop_assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    /// Every result record ends with a grand total.
    #[test]
    fn every_result_carries_a_total(
        kind in any_kind(),
        input in arbitrary_input(),
    ) {
        let result = compute(kind, &input);
        prop_assert!(result.number("total").is_some());
    }

    /// Result records survive a serde roundtrip with order intact.
    #[test]
    fn result_record_roundtrips_through_json(
        kind in any_kind(),
        input in arbitrary_input(),
    ) {
        let result = compute(kind, &input);
        let json = serde_json::to_string(&result).unwrap();
        let back: juscalc::models::ResultRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(
            result.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            back.iter().map(|(n, _)| n).collect::<Vec<_>>()
        );
    }
}
