// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller props and the merged context handed to layers.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::ComponentConfig;
use crate::merge::{DeepMerge, Merger};
use crate::theme::{ColorMode, Theme};
use crate::value::{StyleObject, drop_absent_values, omit_keys};

/// Prop that carries child content and never takes part in styling.
pub const CHILDREN_PROP: &str = "children";

/// Key under which the color mode token appears in the merged context.
pub const COLOR_MODE_KEY: &str = "colorMode";

/// Key under which the theme appears in [`StyleContext::to_value`].
pub const THEME_KEY: &str = "theme";

/// Properties supplied by the caller of a resolution.
///
/// Besides plain values, a prop can be explicitly absent (see
/// [`Props::unset`]); absent props never shadow the recipe's defaults.
///
/// ```rust
/// use understory_style_config::Props;
///
/// let props = Props::new()
///     .variant("solid")
///     .set("colorScheme", "teal")
///     .unset("size");
///
/// assert_eq!(props.get("variant").and_then(|v| v.as_str()), Some("solid"));
/// assert!(props.is_absent("size"));
/// assert!(props.get("size").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Props {
    style_config: Option<ComponentConfig>,
    values: BTreeMap<String, Option<Value>>,
}

impl Props {
    /// Creates an empty prop set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the recipe the theme declares for the component.
    #[must_use]
    pub fn style_config(mut self, config: ComponentConfig) -> Self {
        self.style_config = Some(config);
        self
    }

    /// Sets a prop.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Marks a prop as explicitly absent.
    #[must_use]
    pub fn unset(mut self, key: impl Into<String>) -> Self {
        self.values.insert(key.into(), None);
        self
    }

    /// Sets the `variant` prop.
    #[must_use]
    pub fn variant(self, variant: impl Into<String>) -> Self {
        self.set("variant", variant.into())
    }

    /// Sets the `size` prop.
    #[must_use]
    pub fn size(self, size: impl Into<String>) -> Self {
        self.set("size", size.into())
    }

    /// Sets the `children` prop.
    #[must_use]
    pub fn children(self, children: impl Into<Value>) -> Self {
        self.set(CHILDREN_PROP, children)
    }

    /// Sets a prop in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), Some(value.into()));
    }

    /// Removes a prop entirely, returning its previous state.
    pub fn remove(&mut self, key: &str) -> Option<Option<Value>> {
        self.values.remove(key)
    }

    /// Returns a prop's value, or `None` if it is unset or absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).and_then(Option::as_ref)
    }

    /// Returns `true` if the prop was explicitly marked absent.
    #[must_use]
    pub fn is_absent(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(None))
    }

    /// The caller-supplied recipe override, if any.
    #[must_use]
    pub fn config_override(&self) -> Option<&ComponentConfig> {
        self.style_config.as_ref()
    }

    /// Props that take part in styling: `children` and absent props removed.
    #[must_use]
    pub fn styling_values(&self) -> StyleObject {
        let present = drop_absent_values(self.values.iter().map(|(k, v)| (k, v.as_ref())));
        omit_keys(&present, &[CHILDREN_PROP])
    }
}

impl From<StyleObject> for Props {
    fn from(values: StyleObject) -> Self {
        Self {
            style_config: None,
            values: values.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        }
    }
}

/// The merged context: theme, color mode, recipe defaults and caller props.
///
/// This is what selects the size and variant layers and what dynamic layers
/// receive. It is rebuilt on every resolution.
#[derive(Clone, Debug)]
pub struct StyleContext<'a> {
    theme: &'a Theme,
    color_mode: ColorMode,
    values: StyleObject,
}

impl<'a> StyleContext<'a> {
    /// Builds the merged context with the default [`DeepMerge`].
    ///
    /// `defaults` are the recipe's default props; see
    /// [`StyleContext::merge_with`] for the precedence rules.
    #[must_use]
    pub fn new(
        theme: &'a Theme,
        color_mode: ColorMode,
        defaults: Option<&StyleObject>,
        props: &Props,
    ) -> Self {
        Self::merge_with(&DeepMerge, theme, color_mode, defaults, props)
    }

    /// Builds the merged context using `merger`.
    ///
    /// Later layers win: the color mode token, then `defaults`, then the
    /// caller's [styling values](Props::styling_values).
    #[must_use]
    pub fn merge_with<M: Merger + ?Sized>(
        merger: &M,
        theme: &'a Theme,
        color_mode: ColorMode,
        defaults: Option<&StyleObject>,
        props: &Props,
    ) -> Self {
        let mut ambient = StyleObject::new();
        ambient.insert(COLOR_MODE_KEY.into(), color_mode.into());
        let empty = StyleObject::new();
        let caller = props.styling_values();
        let values = merger.merge(&[&ambient, defaults.unwrap_or(&empty), &caller]);
        Self {
            theme,
            color_mode,
            values,
        }
    }

    /// The active theme.
    #[must_use]
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// The active color mode.
    ///
    /// This is authoritative. A caller prop named `colorMode` shadows the
    /// merged `colorMode` value seen through [`get`](Self::get), but never
    /// this accessor.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// All merged values, including the `colorMode` token.
    #[must_use]
    pub fn values(&self) -> &StyleObject {
        &self.values
    }

    /// Returns a merged value, exactly as the caller's props left it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The layer name selected by the `variant` value.
    #[must_use]
    pub fn variant(&self) -> Option<String> {
        self.get("variant").and_then(layer_name)
    }

    /// The layer name selected by the `size` value.
    #[must_use]
    pub fn size(&self) -> Option<String> {
        self.get("size").and_then(layer_name)
    }

    /// Renders the context as one mapping `{ theme, colorMode, ...values }`.
    ///
    /// The theme is rendered as its token tree unless a prop named `theme`
    /// shadows it.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut out = StyleObject::new();
        out.insert(THEME_KEY.into(), self.theme.tokens().clone());
        out.extend(self.values.clone());
        Value::Object(out)
    }
}

/// Strings name layers directly; numbers and booleans by their text.
fn layer_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
