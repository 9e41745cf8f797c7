//! Result presentation: pt-BR formatting of result records.
//!
//! The engine emits bare numbers; this module turns them into display
//! strings. Dispatch is by output-field name: names containing `percent`
//! render with a `%` suffix, names indicating a day/month/year count render
//! as plain integers, and everything else is currency-formatted as BRL
//! (`R$ 1.234,56`). Text values pass through unchanged.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{ResultRecord, ResultValue};

/// How a numeric output field should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Localized BRL currency string.
    Currency,
    /// Two-decimal percentage with a `%` suffix.
    Percent,
    /// Plain integer count (days, months, years).
    Count,
}

/// Decides the render format for an output field from its name.
///
/// ```
/// use juscalc::presenter::{FieldFormat, classify_field};
///
/// assert_eq!(classify_field("accumulated_correction_percent"), FieldFormat::Percent);
/// assert_eq!(classify_field("notice_days"), FieldFormat::Count);
/// assert_eq!(classify_field("corrected_value"), FieldFormat::Currency);
/// ```
pub fn classify_field(name: &str) -> FieldFormat {
    let lower = name.to_ascii_lowercase();
    if lower.contains("percent") {
        FieldFormat::Percent
    } else if lower.contains("days") || lower.contains("months") || lower.contains("years") {
        FieldFormat::Count
    } else {
        FieldFormat::Currency
    }
}

/// Formats a decimal as a pt-BR BRL currency string: `R$ 1.234,56`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').expect("two fixed decimals");

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}R$ {},{}", sign, grouped, frac_part)
}

/// Formats a single output value according to its field name.
pub fn format_value(name: &str, value: &ResultValue) -> String {
    match value {
        ResultValue::Text(text) => text.clone(),
        ResultValue::Number(number) => match classify_field(name) {
            FieldFormat::Currency => format_brl(*number),
            FieldFormat::Percent => format!(
                "{:.2}%",
                number.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            ),
            FieldFormat::Count => number.normalize().to_string(),
        },
    }
}

/// One row of the rendered result grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// Humanized field label.
    pub label: String,
    /// The formatted display value.
    pub value: String,
}

/// Renders a result record as label/value grid rows, in field order.
pub fn render_rows(result: &ResultRecord) -> Vec<GridRow> {
    result
        .iter()
        .map(|(name, value)| GridRow {
            label: humanize(name),
            value: format_value(name, value),
        })
        .collect()
}

/// Turns a snake_case field name into a capitalized label.
fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len());
    for (i, word) in name.split('_').enumerate() {
        if i > 0 {
            label.push(' ');
        }
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                label.extend(first.to_uppercase());
                label.push_str(chars.as_str());
            }
        } else {
            label.push_str(word);
        }
    }
    label
}
