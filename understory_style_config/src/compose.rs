// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer composition: base, then size, then variant.

use std::borrow::Cow;

use crate::config::ComponentConfig;
use crate::context::StyleContext;
use crate::error::{Error, Result};
use crate::layer::{Layer, resolve_layer};
use crate::merge::Merger;
use crate::value::StyleObject;

/// Materializes and merges the layers `cx` selects from `config`.
///
/// Precedence is **variant → size → base**: the variant wins over the size,
/// which wins over the base style, key by key and recursively for nested
/// objects. A missing or unmatched size/variant contributes nothing.
///
/// Layers are invoked in the order base, variant, size. The first failing
/// layer aborts composition with [`Error::Layer`].
pub fn compose_layers<M: Merger + ?Sized>(
    merger: &M,
    component: &str,
    config: &ComponentConfig,
    cx: &StyleContext<'_>,
) -> Result<StyleObject> {
    let base = materialize(component, "base", config.base_style(), cx)?;

    let variant_name = cx.variant();
    let variant = match variant_name.as_deref() {
        Some(name) => materialize(component, &format!("variant:{name}"), config.variant(name), cx)?,
        None => Cow::Owned(StyleObject::new()),
    };

    let size_name = cx.size();
    let size = match size_name.as_deref() {
        Some(name) => materialize(component, &format!("size:{name}"), config.size(name), cx)?,
        None => Cow::Owned(StyleObject::new()),
    };

    Ok(merger.merge(&[&*base, &*size, &*variant]))
}

fn materialize<'l>(
    component: &str,
    layer_name: &str,
    layer: Option<&'l Layer>,
    cx: &StyleContext<'_>,
) -> Result<Cow<'l, StyleObject>> {
    resolve_layer(layer, cx).map_err(|source| Error::Layer {
        component: component.to_owned(),
        layer: layer_name.to_owned(),
        source,
    })
}
