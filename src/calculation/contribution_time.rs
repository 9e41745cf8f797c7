//! Social-security contribution-time calculation.
//!
//! Converts the span between two dates into the years/months/days shape
//! used by INSS benefit counting: commercial years of 365 days, months of
//! 30 days over the year remainder.

use rust_decimal::Decimal;

use crate::models::{InputRecord, ResultRecord};

/// Calculates elapsed contribution time between two dates.
///
/// Inputs: `start_date` and `end_date`. Order does not matter — the span is
/// taken as an absolute number of days; missing or unparseable dates yield
/// a zero-length span.
///
/// # Example
///
/// ```
/// use juscalc::calculation::calculate_contribution_time;
/// use juscalc::models::InputRecord;
/// use rust_decimal::Decimal;
///
/// let input = InputRecord::new()
///     .with("start_date", "2000-01-01")
///     .with("end_date", "2020-01-01");
///
/// let result = calculate_contribution_time(&input);
/// assert_eq!(result.number("years"), Some(Decimal::from(20)));
/// assert_eq!(result.total(), Decimal::from(7305));
/// ```
pub fn calculate_contribution_time(input: &InputRecord) -> ResultRecord {
    let elapsed_days = match (input.date("start_date"), input.date("end_date")) {
        (Some(start), Some(end)) => (end - start).num_days().abs(),
        _ => 0,
    };

    let years = elapsed_days / 365;
    let year_remainder = elapsed_days % 365;
    let months = year_remainder / 30;
    let days = year_remainder % 30;

    let summary = format!(
        "{} {}, {} {} e {} {}",
        years,
        if years == 1 { "ano" } else { "anos" },
        months,
        if months == 1 { "mês" } else { "meses" },
        days,
        if days == 1 { "dia" } else { "dias" },
    );

    let mut result = ResultRecord::new();
    result.insert("elapsed_days", Decimal::from(elapsed_days));
    result.insert("years", Decimal::from(years));
    result.insert("months", Decimal::from(months));
    result.insert("days", Decimal::from(days));
    result.insert_text("summary", summary);
    result.insert("total", Decimal::from(elapsed_days));
    result
}
