//! Defensive converters for heterogeneous data.
//!
//! These never fail: elements of the wrong type are skipped and non-list
//! inputs produce nothing.

use crate::value::Value;

/// Returns the string elements of a list, in order, skipping everything else.
///
/// Yields nothing if `value` is not a list.
pub fn text_items(value: &Value) -> impl Iterator<Item = &str> {
    value
        .as_list()
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_text)
}

/// Collects the string elements of a list.
///
/// ```
/// # use nested::{Value, convert::to_string_vec};
/// let mixed = Value::from(vec![
///     Value::from("a"),
///     Value::from(1),
///     Value::from("b"),
///     Value::from(true),
/// ]);
///
/// assert_eq!(to_string_vec(&mixed), vec!["a", "b"]);
/// assert!(to_string_vec(&Value::from("a")).is_empty());
/// ```
pub fn to_string_vec(value: &Value) -> Vec<String> {
    text_items(value).map(str::to_string).collect()
}
