// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deep merge of style objects.

use serde_json::Value;

use crate::value::StyleObject;

/// Strategy for combining style layers.
///
/// Implementations must treat later layers as higher precedence and must not
/// mutate their inputs.
pub trait Merger {
    /// Merges `layers` into a fresh style object, right-most layer winning.
    fn merge(&self, layers: &[&StyleObject]) -> StyleObject;
}

/// Recursive key-by-key merge.
///
/// Nested objects are merged recursively; any other value (including
/// arrays and `null`) replaces what was there.
///
/// ```rust
/// use serde_json::{Value, json};
/// use understory_style_config::{DeepMerge, Merger};
///
/// let base = json!({ "color": "red", "_hover": { "bg": "gray.100", "color": "red" } });
/// let over = json!({ "_hover": { "bg": "gray.200" } });
/// let merged = DeepMerge.merge(&[base.as_object().unwrap(), over.as_object().unwrap()]);
/// assert_eq!(
///     Value::Object(merged),
///     json!({ "color": "red", "_hover": { "bg": "gray.200", "color": "red" } }),
/// );
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DeepMerge;

impl Merger for DeepMerge {
    fn merge(&self, layers: &[&StyleObject]) -> StyleObject {
        let mut target = StyleObject::new();
        for layer in layers {
            merge_into(&mut target, layer);
        }
        target
    }
}

/// Merges `source` into `target` in place.
pub(crate) fn merge_into(target: &mut StyleObject, source: &StyleObject) {
    for (key, value) in source {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> StyleObject {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("fixture must be an object"),
        }
    }

    #[test]
    fn empty_layers_yield_empty() {
        assert!(DeepMerge.merge(&[]).is_empty());
    }

    #[test]
    fn later_layer_wins_on_leaves() {
        let a = obj(json!({ "color": "red", "p": 2 }));
        let b = obj(json!({ "p": 4 }));
        let c = obj(json!({ "color": "blue" }));
        let out = DeepMerge.merge(&[&a, &b, &c]);
        assert_eq!(Value::Object(out), json!({ "color": "blue", "p": 4 }));
    }

    #[test]
    fn nested_objects_merge_recursively() {
        let a = obj(json!({ "_focus": { "ring": 2, "outline": "none" } }));
        let b = obj(json!({ "_focus": { "ring": 3 } }));
        let out = DeepMerge.merge(&[&a, &b]);
        assert_eq!(
            Value::Object(out),
            json!({ "_focus": { "ring": 3, "outline": "none" } })
        );
    }

    #[test]
    fn arrays_and_scalars_replace() {
        let a = obj(json!({ "p": [1, 2, 3], "nested": { "x": 1 } }));
        let b = obj(json!({ "p": [9], "nested": "flat" }));
        let out = DeepMerge.merge(&[&a, &b]);
        assert_eq!(Value::Object(out), json!({ "p": [9], "nested": "flat" }));
    }

    #[test]
    fn object_replaces_scalar() {
        let a = obj(json!({ "bg": "red" }));
        let b = obj(json!({ "bg": { "base": "red", "md": "blue" } }));
        let out = DeepMerge.merge(&[&a, &b]);
        assert_eq!(Value::Object(out), json!({ "bg": { "base": "red", "md": "blue" } }));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = obj(json!({ "_hover": { "bg": "a" } }));
        let b = obj(json!({ "_hover": { "color": "b" } }));
        let _ = DeepMerge.merge(&[&a, &b]);
        assert_eq!(Value::Object(a), json!({ "_hover": { "bg": "a" } }));
        assert_eq!(Value::Object(b), json!({ "_hover": { "color": "b" } }));
    }

    #[test]
    fn null_replaces_value() {
        let a = obj(json!({ "bg": "red" }));
        let b = obj(json!({ "bg": null }));
        let out = DeepMerge.merge(&[&a, &b]);
        assert_eq!(Value::Object(out), json!({ "bg": null }));
    }
}
