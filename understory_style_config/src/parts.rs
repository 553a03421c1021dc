// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-part expansion.
//!
//! A multi-part component (an input with a field and a stepper, a tag with
//! a label and a close button) is styled as one `root` object with each
//! declared part nested under its own class selector:
//!
//! ```text
//! { field: {..}, icon: {..}, stray: {..} }
//!   => { root: { ".ns-input__field": {..}, ".ns-input__icon": {..} }, stray: {..} }
//! ```
//!
//! Keys that are not declared parts stay where they are.

use serde_json::Value;

use crate::value::StyleObject;

/// Namespace used for part class names unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "understory";

/// Key that receives the folded parts.
pub const ROOT_PART: &str = "root";

/// Builds the class name of a component part, `<namespace>-<component>__<part>`.
///
/// All whitespace is removed and the result is lowercased, over the whole
/// composed string.
///
/// ```rust
/// use understory_style_config::namespaced_part_class_name;
///
/// assert_eq!(
///     namespaced_part_class_name("acme", "Number input", " Field "),
///     "acme-numberinput__field",
/// );
/// ```
#[must_use]
pub fn namespaced_part_class_name(namespace: &str, component: &str, part: &str) -> String {
    format!("{namespace}-{component}__{part}")
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Builds the class name of a component part in the [default namespace](DEFAULT_NAMESPACE).
///
/// ```rust
/// use understory_style_config::part_class_name;
///
/// assert_eq!(part_class_name("Numberinput", "Field "), "understory-numberinput__field");
/// ```
#[must_use]
pub fn part_class_name(component: &str, part: &str) -> String {
    namespaced_part_class_name(DEFAULT_NAMESPACE, component, part)
}

/// Builds the selector key a part is nested under inside `root` (`.` + class name).
#[must_use]
pub fn part_selector(namespace: &str, component: &str, part: &str) -> String {
    format!(".{}", namespaced_part_class_name(namespace, component, part))
}

/// Folds the declared `parts` of `styles` into a fresh `root` object.
///
/// Any `root` produced by the layers is discarded first. Each declared part
/// is removed from the top level and nested under its selector. A missing or
/// `null` part becomes an empty object. Undeclared keys are left untouched.
#[must_use]
pub fn expand_parts(
    mut styles: StyleObject,
    namespace: &str,
    component: &str,
    parts: &[String],
) -> StyleObject {
    styles.remove(ROOT_PART);
    let mut root = StyleObject::new();
    for part in parts {
        let style = match styles.remove(part) {
            None | Some(Value::Null) => Value::Object(StyleObject::new()),
            Some(style) => style,
        };
        root.insert(part_selector(namespace, component, part), style);
    }
    styles.insert(ROOT_PART.into(), Value::Object(root));
    styles
}
