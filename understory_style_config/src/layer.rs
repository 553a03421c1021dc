// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style layers: static objects or functions of the merged context.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::context::StyleContext;
use crate::error::LayerError;
use crate::value::{StyleObject, into_object};

/// Signature of a dynamic layer.
pub type LayerFn = dyn Fn(&StyleContext<'_>) -> Result<StyleObject, LayerError>;

/// One override source of a component recipe (base style, a size, or a variant).
///
/// Cloning is cheap for dynamic layers (`Rc`), and clones the object for
/// static ones.
///
/// ```rust
/// use serde_json::json;
/// use understory_style_config::{ColorMode, Layer, Props, StyleContext, Theme};
///
/// let layer = Layer::dynamic(|cx| {
///     let color = if cx.color_mode() == ColorMode::Dark { "white" } else { "black" };
///     json!({ "color": color }).as_object().cloned().unwrap_or_default()
/// });
///
/// let theme = Theme::default();
/// let cx = StyleContext::new(&theme, ColorMode::Dark, None, &Props::new());
/// let style = layer.resolve(&cx).unwrap();
/// assert_eq!(style.get("color"), Some(&json!("white")));
/// ```
#[derive(Clone)]
pub enum Layer {
    /// A fixed style object.
    Static(StyleObject),
    /// A function invoked with the merged context on every resolution.
    Dynamic(Rc<LayerFn>),
}

impl Layer {
    /// Creates a dynamic layer from an infallible function.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&StyleContext<'_>) -> StyleObject + 'static,
    {
        Self::Dynamic(Rc::new(
            move |cx: &StyleContext<'_>| -> Result<StyleObject, LayerError> { Ok(f(cx)) },
        ))
    }

    /// Creates a dynamic layer from a fallible function.
    ///
    /// An error aborts the resolution that invoked it.
    pub fn try_dynamic<F>(f: F) -> Self
    where
        F: Fn(&StyleContext<'_>) -> Result<StyleObject, LayerError> + 'static,
    {
        Self::Dynamic(Rc::new(f))
    }

    /// Returns `true` if this layer is a function.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    /// Materializes the layer against `cx`.
    ///
    /// Static layers are borrowed; dynamic layers are invoked.
    pub fn resolve<'l>(&'l self, cx: &StyleContext<'_>) -> Result<Cow<'l, StyleObject>, LayerError> {
        match self {
            Self::Static(style) => Ok(Cow::Borrowed(style)),
            Self::Dynamic(f) => f(cx).map(Cow::Owned),
        }
    }
}

/// Materializes an optional layer, treating absence as an empty style.
pub fn resolve_layer<'l>(
    layer: Option<&'l Layer>,
    cx: &StyleContext<'_>,
) -> Result<Cow<'l, StyleObject>, LayerError> {
    match layer {
        Some(layer) => layer.resolve(cx),
        None => Ok(Cow::Owned(StyleObject::new())),
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(style) => f.debug_tuple("Static").field(style).finish(),
            Self::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<fn>").finish(),
        }
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::Static(StyleObject::new())
    }
}

impl From<StyleObject> for Layer {
    fn from(style: StyleObject) -> Self {
        Self::Static(style)
    }
}

/// Non-object JSON values become an empty static layer.
impl From<Value> for Layer {
    fn from(value: Value) -> Self {
        Self::Static(into_object(value))
    }
}
