//! Result records: the ordered output of a calculation.
//!
//! A [`ResultRecord`] is an ordered mapping from output-field name to a
//! numeric or text value. Field order is the order the formula inserted
//! them in, and the JSON representation preserves it; every record carries
//! a `total` field with the headline value.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single output value: a number (currency amount, percentage, count) or
/// a preformatted text summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultValue {
    /// A numeric output. Whether it renders as currency, percentage or a
    /// plain count is decided by the presenter from the field name.
    Number(Decimal),
    /// A human-readable text output (e.g. a duration summary).
    Text(String),
}

/// The ordered output of one calculation.
///
/// # Example
///
/// ```
/// use juscalc::models::ResultRecord;
/// use rust_decimal::Decimal;
///
/// let mut result = ResultRecord::new();
/// result.insert("fees", Decimal::from(500));
/// result.insert("total", Decimal::from(500));
///
/// assert_eq!(result.total(), Decimal::from(500));
/// assert_eq!(result.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRecord {
    entries: Vec<(String, ResultValue)>,
}

impl ResultRecord {
    /// Creates an empty result record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a numeric output field.
    pub fn insert(&mut self, name: &str, value: Decimal) {
        self.entries.push((name.to_string(), ResultValue::Number(value)));
    }

    /// Appends a text output field.
    pub fn insert_text(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .push((name.to_string(), ResultValue::Text(value.into())));
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&ResultValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the numeric value of a field, if present and numeric.
    pub fn number(&self, name: &str) -> Option<Decimal> {
        match self.get(name) {
            Some(ResultValue::Number(d)) => Some(*d),
            _ => None,
        }
    }

    /// Returns the headline `total` field, or zero if absent.
    pub fn total(&self) -> Decimal {
        self.number("total").unwrap_or(Decimal::ZERO)
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// The number of output fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            match value {
                ResultValue::Number(d) => map.serialize_entry(name, d)?,
                ResultValue::Text(t) => map.serialize_entry(name, t)?,
            }
        }
        map.end()
    }
}

struct ResultRecordVisitor;

impl<'de> Visitor<'de> for ResultRecordVisitor {
    type Value = ResultRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of output-field names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut record = ResultRecord::new();
        while let Some((name, value)) = access.next_entry::<String, serde_json::Value>()? {
            match value {
                serde_json::Value::String(s) => match Decimal::from_str(&s) {
                    Ok(d) => record.insert(&name, d),
                    Err(_) => record.insert_text(&name, s),
                },
                serde_json::Value::Number(n) => match Decimal::from_str(&n.to_string()) {
                    Ok(d) => record.insert(&name, d),
                    Err(_) => record.insert_text(&name, n.to_string()),
                },
                other => record.insert_text(&name, other.to_string()),
            }
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for ResultRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResultRecordVisitor)
    }
}
