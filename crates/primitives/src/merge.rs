//! Merge-by-data
//!
//! Recursive default-merge of an input value onto a base value:
//!
//! - Object input onto Object base: every input field wins; when the input
//!   holds an Object for a field the base holds as an Object or Array, the
//!   merge recurses; base fields the input does not mention are kept.
//! - Object input onto an Array base: the array counts as a mapping from
//!   decimal position to element, so `["x"]` merged with `{"a": 1}` gives
//!   `{"0": "x", "a": 1}`.
//! - Object input onto anything else (including `Null`): the base counts as
//!   an empty mapping, so the result is the input.
//! - Non-object input: plain replace.
//!
//! Arrays are replaced, never merged element-wise. A `Null` input field is a
//! value like any other and overwrites the base field.

use crate::traverse::spread_array;
use mapstore_core::Value;

/// Merge `input` onto `base`, returning the combined value.
pub fn merge_defaults(base: Value, input: Value) -> Value {
    match (base, input) {
        (Value::Object(mut base), Value::Object(input)) => {
            for (field, incoming) in input {
                let merged = match base.remove(&field) {
                    Some(existing @ (Value::Object(_) | Value::Array(_))) if incoming.is_object() => {
                        merge_defaults(existing, incoming)
                    }
                    _ => incoming,
                };
                base.insert(field, merged);
            }
            Value::Object(base)
        }
        (Value::Array(items), input @ Value::Object(_)) => merge_defaults(spread_array(items), input),
        (_, input) => input,
    }
}
