// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content equality for style objects.

use crate::value::StyleObject;

/// Strategy deciding whether two style results carry the same content.
pub trait EqualityOracle {
    /// Returns `true` if `a` and `b` are structurally equal.
    fn equals(&self, a: &StyleObject, b: &StyleObject) -> bool;
}

/// Recursive content equality.
///
/// Objects compare key-by-key regardless of insertion order, arrays compare
/// element-wise in order, and leaves compare by value. Numbers compare by
/// their JSON representation, so `1` and `1.0` differ.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StructuralEq;

impl EqualityOracle for StructuralEq {
    fn equals(&self, a: &StyleObject, b: &StyleObject) -> bool {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn eq(a: Value, b: Value) -> bool {
        let (Value::Object(a), Value::Object(b)) = (a, b) else {
            unreachable!("fixtures must be objects");
        };
        StructuralEq.equals(&a, &b)
    }

    #[test]
    fn empty_objects_equal() {
        assert!(eq(json!({}), json!({})));
    }

    #[test]
    fn nested_content_equal() {
        assert!(eq(
            json!({ "a": { "b": [1, { "c": true }] }, "d": null }),
            json!({ "d": null, "a": { "b": [1, { "c": true }] } }),
        ));
    }

    #[test]
    fn leaf_difference_detected() {
        assert!(!eq(json!({ "a": { "b": 1 } }), json!({ "a": { "b": 2 } })));
    }

    #[test]
    fn extra_key_detected() {
        assert!(!eq(json!({ "a": 1 }), json!({ "a": 1, "b": 2 })));
        assert!(!eq(json!({ "a": 1, "b": 2 }), json!({ "a": 1 })));
    }

    #[test]
    fn arrays_are_order_sensitive() {
        assert!(!eq(json!({ "p": [1, 2] }), json!({ "p": [2, 1] })));
        assert!(!eq(json!({ "p": [1, 2] }), json!({ "p": [1, 2, 3] })));
    }

    #[test]
    fn type_mismatch_is_unequal() {
        assert!(!eq(json!({ "a": "1" }), json!({ "a": 1 })));
        assert!(!eq(json!({ "a": {} }), json!({ "a": [] })));
    }
}
