//! Nested-path traversal
//!
//! Every read descent and every coercion decision made on write lives here.
//!
//! ## Read rules
//!
//! | Current | Segment | Result |
//! |---------|---------|--------|
//! | Object | `Key(k)` | field `k` |
//! | Object | `Index(i)` | field `"i"` |
//! | Array | `Index(i)` | element `i` |
//! | Array | `Key(k)`, `k` canonical decimal | element `k` |
//! | anything else | any | unresolved |
//!
//! ## Write rules
//!
//! A segment the current value accepts (per the read table) descends into it,
//! creating a `Null` slot when the field or element is missing. Arrays are
//! padded with `Null` up to the target index. Anything that does not accept
//! the segment (scalars, `Null`, or an Array facing a non-numeric key) is
//! overwritten by a fresh Object for `Key` segments or Array for `Index`
//! segments.
//!
//! Padding stops at [`MAX_ARRAY_INDEX`]. A write to a higher position that
//! an array does not already hold turns the array into an Object keyed by
//! decimal position (existing elements keep their positions as `"0"`,
//! `"1"`, ...), and a fresh container for such an index is an Object. The
//! write still lands and reads back through the same path, since `Index(i)`
//! on an Object addresses field `"i"`.

use mapstore_core::{Path, PathSegment, Value};
use tracing::trace;

/// Resolve `path` inside `value`.
///
/// Returns `None` when any step does not resolve.
pub fn get_at<'a>(value: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| step(current, segment))
}

fn step<'a>(value: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    match value {
        Value::Array(items) => segment.as_index().and_then(|i| items.get(i)),
        Value::Object(fields) => fields.get(segment.as_key().as_ref()),
        _ => None,
    }
}

/// Largest array position a write pads up to.
pub const MAX_ARRAY_INDEX: usize = u16::MAX as usize;

/// Write `value` at `path` inside `target`, creating or coercing containers
/// along the way. An empty path replaces `target` entirely.
pub fn set_at(target: &mut Value, path: &Path, value: Value) {
    let mut cursor = target;
    for segment in path {
        cursor = child_mut(cursor, segment);
    }
    *cursor = value;
}

fn child_mut<'a>(target: &'a mut Value, segment: &PathSegment) -> &'a mut Value {
    let index = segment.as_index();

    let replacement = match &mut *target {
        Value::Object(_) => None,
        Value::Array(items) => match index {
            Some(i) if i < items.len() || i <= MAX_ARRAY_INDEX => None,
            Some(_) => Some(spread_array(std::mem::take(items))),
            None => Some(Value::object()),
        },
        _ => Some(match segment {
            PathSegment::Index(i) if *i <= MAX_ARRAY_INDEX => Value::array(),
            _ => Value::object(),
        }),
    };

    if let Some(replacement) = replacement {
        trace!(
            found = target.type_name(),
            replacement = replacement.type_name(),
            segment = %segment,
            "coercing path step to container"
        );
        *target = replacement;
    }

    match target {
        Value::Array(items) => {
            // Arrays only survive the check above for an index in reach.
            let i = index.unwrap_or_default();
            if items.len() <= i {
                items.resize(i + 1, Value::Null);
            }
            &mut items[i]
        }
        Value::Object(fields) => fields
            .entry(segment.as_key().into_owned())
            .or_insert(Value::Null),
        // Coerced to a container above.
        other => other,
    }
}

/// Object holding `items` under their decimal positions.
pub(crate) fn spread_array(items: Vec<Value>) -> Value {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| (i.to_string(), item))
        .collect()
}
