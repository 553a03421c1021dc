// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component style recipes.

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::layer::Layer;
use crate::value::StyleObject;

/// The styling recipe a theme declares for one component.
///
/// A recipe has default props, an optional base style, named sizes and
/// variants, and optionally the list of parts a multi-part component
/// decomposes into. Internally it wraps an `Rc`, so cloning is cheap.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use understory_style_config::{ComponentConfig, Layer};
///
/// let button = ComponentConfig::builder()
///     .default_prop("size", "md")
///     .base_style(json!({ "borderRadius": "md" }))
///     .size("md", json!({ "h": 10, "px": 4 }))
///     .variant("ghost", Layer::dynamic(|cx| {
///         let scheme = cx.get("colorScheme").and_then(|v| v.as_str()).unwrap_or("gray");
///         json!({ "color": format!("{scheme}.600") }).as_object().cloned().unwrap_or_default()
///     }))
///     .build();
///
/// assert_eq!(button.default_props().get("size"), Some(&json!("md")));
/// assert!(button.variant("ghost").is_some_and(Layer::is_dynamic));
/// assert!(button.parts().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComponentConfig {
    inner: Rc<ComponentConfigData>,
}

#[derive(Debug, Default)]
struct ComponentConfigData {
    default_props: StyleObject,
    base_style: Option<Layer>,
    sizes: BTreeMap<String, Layer>,
    variants: BTreeMap<String, Layer>,
    parts: Option<Vec<String>>,
}

impl ComponentConfig {
    /// Starts building a recipe.
    #[must_use]
    pub fn builder() -> ComponentConfigBuilder {
        ComponentConfigBuilder::new()
    }

    /// Decodes a static recipe from JSON.
    ///
    /// Recognized fields are `defaultProps`, `baseStyle`, `sizes`,
    /// `variants` and `parts`; unknown fields are ignored. `component` is
    /// only used for error reporting.
    pub fn from_json(component: &str, value: Value) -> Result<Self> {
        let raw: RawComponentConfig =
            serde_json::from_value(value).map_err(|source| Error::InvalidConfig {
                component: component.to_owned(),
                source,
            })?;
        Ok(raw.into())
    }

    /// Props merged under the caller's own props.
    #[must_use]
    pub fn default_props(&self) -> &StyleObject {
        &self.inner.default_props
    }

    /// The base layer, if declared.
    #[must_use]
    pub fn base_style(&self) -> Option<&Layer> {
        self.inner.base_style.as_ref()
    }

    /// The size layer named `name`, if declared.
    #[must_use]
    pub fn size(&self, name: &str) -> Option<&Layer> {
        self.inner.sizes.get(name)
    }

    /// The variant layer named `name`, if declared.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&Layer> {
        self.inner.variants.get(name)
    }

    /// Names of declared sizes, sorted.
    pub fn size_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.sizes.keys().map(String::as_str)
    }

    /// Names of declared variants, sorted.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.variants.keys().map(String::as_str)
    }

    /// The declared parts of a multi-part component.
    ///
    /// `None` means the component is not multi-part; `Some(&[])` is a
    /// declared but empty list.
    #[must_use]
    pub fn parts(&self) -> Option<&[String]> {
        self.inner.parts.as_deref()
    }
}

/// Builder for [`ComponentConfig`].
#[derive(Debug, Default)]
pub struct ComponentConfigBuilder {
    data: ComponentConfigData,
}

impl ComponentConfigBuilder {
    /// Creates an empty recipe builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one default prop.
    #[must_use]
    pub fn default_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.default_props.insert(key.into(), value.into());
        self
    }

    /// Replaces all default props.
    #[must_use]
    pub fn default_props(mut self, props: StyleObject) -> Self {
        self.data.default_props = props;
        self
    }

    /// Sets the base layer.
    #[must_use]
    pub fn base_style(mut self, layer: impl Into<Layer>) -> Self {
        self.data.base_style = Some(layer.into());
        self
    }

    /// Declares a size layer.
    #[must_use]
    pub fn size(mut self, name: impl Into<String>, layer: impl Into<Layer>) -> Self {
        self.data.sizes.insert(name.into(), layer.into());
        self
    }

    /// Declares a variant layer.
    #[must_use]
    pub fn variant(mut self, name: impl Into<String>, layer: impl Into<Layer>) -> Self {
        self.data.variants.insert(name.into(), layer.into());
        self
    }

    /// Declares the parts of a multi-part component.
    #[must_use]
    pub fn parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.parts = Some(parts.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the recipe.
    #[must_use]
    pub fn build(self) -> ComponentConfig {
        ComponentConfig {
            inner: Rc::new(self.data),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComponentConfig {
    #[serde(default)]
    default_props: StyleObject,
    #[serde(default)]
    base_style: Option<StyleObject>,
    #[serde(default)]
    sizes: BTreeMap<String, StyleObject>,
    #[serde(default)]
    variants: BTreeMap<String, StyleObject>,
    #[serde(default)]
    parts: Option<Vec<String>>,
}

impl From<RawComponentConfig> for ComponentConfig {
    fn from(raw: RawComponentConfig) -> Self {
        let data = ComponentConfigData {
            default_props: raw.default_props,
            base_style: raw.base_style.map(Layer::Static),
            sizes: raw
                .sizes
                .into_iter()
                .map(|(name, style)| (name, Layer::Static(style)))
                .collect(),
            variants: raw
                .variants
                .into_iter()
                .map(|(name, style)| (name, Layer::Static(style)))
                .collect(),
            parts: raw.parts,
        };
        Self {
            inner: Rc::new(data),
        }
    }
}
