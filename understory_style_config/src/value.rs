// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style object representation and small map helpers.
//!
//! Style objects are JSON-shaped trees: string keys mapping to primitive
//! leaves, sequences, or nested style objects. Values such as responsive
//! arrays or pseudo-selector keys are opaque here; they are only merged
//! and compared.

use serde_json::{Map, Value};

/// A nested mapping of style properties.
///
/// The same shape is used for property maps (component default props and
/// caller props), since both are plain string-keyed JSON mappings.
pub type StyleObject = Map<String, Value>;

/// Returns a copy of `map` without the listed `keys`.
#[must_use]
pub fn omit_keys(map: &StyleObject, keys: &[&str]) -> StyleObject {
    map.iter()
        .filter(|(k, _)| !keys.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Collects `(key, Option<value>)` pairs into a mapping, skipping absent values.
///
/// `None` is the absent-marker. `Some(Value::Null)` is a real value and is kept.
///
/// ```rust
/// use serde_json::{Value, json};
/// use understory_style_config::drop_absent_values;
///
/// let entries = [
///     ("variant".to_string(), None),
///     ("size".to_string(), Some(json!("sm"))),
///     ("label".to_string(), Some(Value::Null)),
/// ];
/// let map = drop_absent_values(entries.iter().map(|(k, v)| (k, v.as_ref())));
/// assert_eq!(Value::Object(map), json!({ "size": "sm", "label": null }));
/// ```
#[must_use]
pub fn drop_absent_values<'a, I>(entries: I) -> StyleObject
where
    I: IntoIterator<Item = (&'a String, Option<&'a Value>)>,
{
    entries
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k.clone(), v.clone())))
        .collect()
}

/// Looks up a dotted path (`"colors.red.500"`) in a JSON tree.
///
/// Each segment must name a key of an object; numeric segments also index
/// into arrays. Returns `None` as soon as a segment is missing.
#[must_use]
pub fn path_get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Wraps a JSON value into a style object, mapping non-objects to empty.
pub(crate) fn into_object(value: Value) -> StyleObject {
    match value {
        Value::Object(map) => map,
        _ => StyleObject::new(),
    }
}
