//! The revenue triple
//!
//! Stored as the JSON array `[today, total, target]`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RevenueError;

/// Named slot in the revenue triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevenueField {
    Today,
    Total,
    Target,
}

impl RevenueField {
    pub const ALL: [Self; 3] = [Self::Today, Self::Total, Self::Target];

    /// Position in the persisted array
    pub const fn index(self) -> usize {
        match self {
            Self::Today => 0,
            Self::Total => 1,
            Self::Target => 2,
        }
    }
}

/// Today's revenue, cumulative total and target, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[u64; 3]", into = "[u64; 3]")]
pub struct Revenue {
    pub today: u64,
    pub total: u64,
    pub target: u64,
}

impl Revenue {
    pub const fn new(today: u64, total: u64, target: u64) -> Self {
        Self {
            today,
            total,
            target,
        }
    }

    pub const fn get(&self, field: RevenueField) -> u64 {
        match field {
            RevenueField::Today => self.today,
            RevenueField::Total => self.total,
            RevenueField::Target => self.target,
        }
    }

    pub fn set(&mut self, field: RevenueField, value: u64) {
        match field {
            RevenueField::Today => self.today = value,
            RevenueField::Total => self.total = value,
            RevenueField::Target => self.target = value,
        }
    }

    pub const fn to_array(self) -> [u64; 3] {
        [self.today, self.total, self.target]
    }

    pub fn to_json(self) -> String {
        // A [u64; 3] always serializes.
        serde_json::to_string(&self.to_array()).unwrap_or_else(|_| "[0,0,0]".to_string())
    }

    /// Decode a stored payload.
    ///
    /// Any JSON array with at least three elements is accepted; extra
    /// elements are ignored and each of the first three is coerced to a
    /// whole amount with [`coerce_amount`].
    pub fn from_json(raw: &str) -> Result<Self, RevenueError> {
        let value: Value = serde_json::from_str(raw)?;
        match value {
            Value::Array(items) if items.len() >= 3 => Ok(Self::new(
                coerce_amount(&items[RevenueField::Today.index()]),
                coerce_amount(&items[RevenueField::Total.index()]),
                coerce_amount(&items[RevenueField::Target.index()]),
            )),
            _ => Err(RevenueError::Shape),
        }
    }
}

impl From<[u64; 3]> for Revenue {
    fn from([today, total, target]: [u64; 3]) -> Self {
        Self::new(today, total, target)
    }
}

impl From<Revenue> for [u64; 3] {
    fn from(revenue: Revenue) -> Self {
        revenue.to_array()
    }
}

/// Loose numeric coercion for stored elements.
///
/// Numbers are truncated to whole units; negatives and non-numeric strings
/// become 0; `true` counts as 1. A one-element array stands for its
/// element, the way `Number([5])` is 5.
///
/// Amounts stay finite: `"Infinity"` and out-of-range numbers become 0.
/// Only decimal notation is read, so `"0x10"` is 0 as well.
pub fn coerce_amount(value: &Value) -> u64 {
    match value {
        Value::Bool(true) => 1,
        Value::Array(items) => match items.as_slice() {
            [only] => coerce_wrapped(only),
            _ => 0,
        },
        other => coerce_scalar(other),
    }
}

/// An element inside a one-element array is read through its string form,
/// so `[true]` is 0 while `[[7]]` is 7.
fn coerce_wrapped(value: &Value) -> u64 {
    match value {
        Value::Array(items) => match items.as_slice() {
            [only] => coerce_wrapped(only),
            _ => 0,
        },
        other => coerce_scalar(other),
    }
}

fn coerce_scalar(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(float_amount))
            .unwrap_or(0),
        Value::String(s) => {
            let trimmed = s.trim();
            // `f64::from_str` also takes "inf" and "nan" spellings
            if trimmed.is_empty() || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
                0
            } else {
                trimmed.parse::<f64>().map_or(0, float_amount)
            }
        }
        _ => 0,
    }
}

fn float_amount(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_map_to_fixed_indices() {
        assert_eq!(RevenueField::Today.index(), 0);
        assert_eq!(RevenueField::Total.index(), 1);
        assert_eq!(RevenueField::Target.index(), 2);
    }

    #[test]
    fn set_and_get_by_field() {
        let mut revenue = Revenue::default();
        revenue.set(RevenueField::Target, 5_000);
        revenue.set(RevenueField::Today, 12);
        assert_eq!(revenue.get(RevenueField::Target), 5_000);
        assert_eq!(revenue.to_array(), [12, 0, 5_000]);
    }

    #[test]
    fn json_is_a_plain_array() {
        let revenue = Revenue::new(100, 200, 300);
        assert_eq!(revenue.to_json(), "[100,200,300]");
        assert_eq!(Revenue::from_json("[100,200,300]").unwrap(), revenue);
        let via_serde: Revenue = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(via_serde, Revenue::new(1, 2, 3));
    }

    #[test]
    fn longer_arrays_use_the_first_three() {
        assert_eq!(
            Revenue::from_json("[1,2,3,4,5]").unwrap(),
            Revenue::new(1, 2, 3)
        );
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        assert!(matches!(Revenue::from_json("[1,2]"), Err(RevenueError::Shape)));
        assert!(matches!(
            Revenue::from_json(r#"{"today":1}"#),
            Err(RevenueError::Shape)
        ));
        assert!(matches!(Revenue::from_json("not json"), Err(RevenueError::Json(_))));
    }

    #[test]
    fn elements_are_coerced_loosely() {
        assert_eq!(coerce_amount(&json!(12.9)), 12);
        assert_eq!(coerce_amount(&json!(-5)), 0);
        assert_eq!(coerce_amount(&json!(" 750 ")), 750);
        assert_eq!(coerce_amount(&json!("abc")), 0);
        assert_eq!(coerce_amount(&json!(null)), 0);
        assert_eq!(coerce_amount(&json!(true)), 1);
        assert_eq!(
            Revenue::from_json(r#"["10", null, 7.5]"#).unwrap(),
            Revenue::new(10, 0, 7)
        );
    }

    #[test]
    fn single_element_arrays_unwrap() {
        assert_eq!(coerce_amount(&json!([5])), 5);
        assert_eq!(coerce_amount(&json!(["42"])), 42);
        assert_eq!(coerce_amount(&json!([[7]])), 7);
        assert_eq!(coerce_amount(&json!([])), 0);
        assert_eq!(coerce_amount(&json!([1, 2])), 0);
        assert_eq!(coerce_amount(&json!([true])), 0);
        assert_eq!(coerce_amount(&json!([null])), 0);
        assert_eq!(
            Revenue::from_json("[[5], 20, [\"30\"]]").unwrap(),
            Revenue::new(5, 20, 30)
        );
    }

    #[test]
    fn non_finite_and_non_decimal_strings_are_zero() {
        assert_eq!(coerce_amount(&json!("Infinity")), 0);
        assert_eq!(coerce_amount(&json!("-Infinity")), 0);
        assert_eq!(coerce_amount(&json!("inf")), 0);
        assert_eq!(coerce_amount(&json!("NaN")), 0);
        assert_eq!(coerce_amount(&json!("1e400")), 0);
        assert_eq!(coerce_amount(&json!("0x10")), 0);
        assert_eq!(coerce_amount(&json!("1e3")), 1_000);
    }
}
