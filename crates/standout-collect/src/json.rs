//! Collection operations over dynamic JSON values.
//!
//! A `serde_json::Value` only reveals its shape at runtime, so the helpers in
//! this module check it and return [`CollectError`] when an array was needed
//! and something else arrived (or an object was needed). Arrays map to
//! sequences and objects to mappings:
//!
//! ```
//! use serde_json::json;
//! use standout_collect::{json, size, Collection};
//!
//! let doc = json!({"a": 1, "b": [2, [3]]});
//!
//! assert_eq!(size(Collection::try_from(&doc)?), 2);
//! assert_eq!(json::keys(&doc)?, vec!["a", "b"]);
//! assert_eq!(json::flatten(&doc["b"], false)?, vec![&json!(2), &json!(3)]);
//! assert!(json::first(&doc).is_err());
//! # Ok::<(), standout_collect::CollectError>(())
//! ```

use std::cmp::Ordering;

use serde_json::{Map, Number, Value};

use crate::collection::{Collection, Shape};
use crate::error::{CollectError, Result};
use crate::flatten::{self as flat, Nest};
use crate::{mapping, sequence};

/// Returns the JSON type name of a value.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Nest for Value {
    fn children(&self) -> Option<&[Self]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl<'a> TryFrom<&'a Value> for Collection<'a, Value> {
    type Error = CollectError;

    fn try_from(value: &'a Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Collection::Sequence(items)),
            Value::Object(map) => Ok(Collection::from_entries(map)),
            other => Err(CollectError::not_a_collection(kind(other))),
        }
    }
}

/// Returns the elements of an array.
pub fn as_array(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(CollectError::wrong_shape(Shape::Sequence, kind(other))),
    }
}

/// Returns the entries of an object.
pub fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CollectError::wrong_shape(Shape::Mapping, kind(other))),
    }
}

/// First element of an array, `Ok(None)` when it is empty.
pub fn first(value: &Value) -> Result<Option<&Value>> {
    as_array(value).map(sequence::first)
}

/// First `count` elements of an array.
pub fn first_n(value: &Value, count: usize) -> Result<&[Value]> {
    Ok(sequence::first_n(as_array(value)?, count))
}

/// Last element of an array, `Ok(None)` when it is empty.
pub fn last(value: &Value) -> Result<Option<&Value>> {
    as_array(value).map(sequence::last)
}

/// Last `count` elements of an array.
pub fn last_n(value: &Value, count: usize) -> Result<&[Value]> {
    Ok(sequence::last_n(as_array(value)?, count))
}

/// Sorts an array by a key extracted from each element.
///
/// Keys are ordered with [`compare`]. Equal keys keep their input order.
///
/// ```
/// use serde_json::json;
/// use standout_collect::json;
///
/// let rows = json!([{"v": 3}, {"v": 1}, {"v": 2}]);
/// let sorted = json::sort_by(&rows, |row| &row["v"])?;
/// let order: Vec<_> = sorted.iter().map(|row| &row["v"]).collect();
/// assert_eq!(order, vec![&json!(1), &json!(2), &json!(3)]);
/// # Ok::<(), standout_collect::CollectError>(())
/// ```
pub fn sort_by<'a, F>(value: &'a Value, mut key: F) -> Result<Vec<&'a Value>>
where
    F: FnMut(&'a Value) -> &'a Value,
{
    let items = as_array(value)?;
    Ok(sequence::sort_by(items, |item| SortKey(key(item))))
}

/// Flattens nested arrays, one level when `shallow`, otherwise completely.
pub fn flatten(value: &Value, shallow: bool) -> Result<Vec<&Value>> {
    Ok(flat::flatten(as_array(value)?, shallow))
}

/// Keys of an object in its iteration order.
pub fn keys(value: &Value) -> Result<Vec<&str>> {
    Ok(mapping::keys(as_object(value)?)
        .into_iter()
        .map(String::as_str)
        .collect())
}

/// Values of an object in the same order as [`keys`].
pub fn values(value: &Value) -> Result<Vec<&Value>> {
    Ok(mapping::values(as_object(value)?))
}

/// Total order over JSON values.
///
/// Values of different types order as null, boolean, number, string, array,
/// object. Within a type: `false < true`, numbers numerically (integers
/// exactly, even beyond the range a float represents), strings by
/// bytes, arrays and objects element by element with the shorter prefix
/// first.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => a
            .iter()
            .zip(b)
            .map(|(x, y)| compare(x, y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        (Value::Object(a), Value::Object(b)) => a
            .iter()
            .zip(b)
            .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| compare(va, vb)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (integer(a), integer(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(x), None) => compare_integer_float(x, float(b)),
        (None, Some(y)) => compare_integer_float(y, float(a)).reverse(),
        (None, None) => float(a).total_cmp(&float(b)),
    }
}

// Rounding to f64 is monotone, so only a tie needs the exact check. A tie
// means the float is integral and within i128 range.
fn compare_integer_float(x: i128, f: f64) -> Ordering {
    (x as f64)
        .total_cmp(&f)
        .then_with(|| x.cmp(&(f as i128)))
}

fn integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn float(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

struct SortKey<'a>(&'a Value);

impl PartialEq for SortKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for SortKey<'_> {}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.0, other.0)
    }
}
