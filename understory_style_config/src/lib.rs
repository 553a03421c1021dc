// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Style Config: theme-driven component style recipes.
//!
//! Given a component key and caller props, this crate derives one concrete
//! style object (or, for multi-part components, a `root` object with one
//! nested selector per part) from the recipe the theme declares for that
//! component. Layers combine in a fixed order:
//!
//! **Variant → Size → Base**
//!
//! ## Core Concepts
//!
//! ### Recipes
//!
//! A [`ComponentConfig`] holds default props, a base style, named sizes and
//! named variants. Every one of those style layers is a [`Layer`]: either a
//! static object or a function of the merged context.
//!
//! ```rust
//! use serde_json::json;
//! use understory_style_config::{ColorMode, ComponentConfig, Layer};
//!
//! let button = ComponentConfig::builder()
//!     .default_prop("size", "md")
//!     .base_style(Layer::dynamic(|cx| {
//!         let color = if cx.color_mode() == ColorMode::Dark { "white" } else { "black" };
//!         json!({ "color": color }).as_object().cloned().unwrap_or_default()
//!     }))
//!     .size("md", json!({ "h": 10, "px": 4 }))
//!     .variant("ghost", json!({ "bg": "transparent" }))
//!     .build();
//! # let _ = button;
//! ```
//!
//! ### Themes and context
//!
//! A [`Theme`] pairs a JSON token tree with declared recipes and is usually
//! loaded with [`Theme::from_json`]. The active theme and [`ColorMode`] are
//! passed explicitly through a [`ContextAccessor`], such as [`ThemeContext`].
//!
//! ### Resolution and stable results
//!
//! A [`StyleResolver`] belongs to one consuming instance. It merges the
//! recipe defaults with the caller's [`Props`], materializes and composes the
//! layers, optionally folds declared parts into `root`, and then reconciles
//! the result with the one it returned last time: if the content is equal,
//! the previous `Rc` is returned again.
//!
//! ```rust
//! use std::rc::Rc;
//! use serde_json::{Value, json};
//! use understory_style_config::{
//!     ColorMode, ComponentConfig, Props, StyleResolver, ThemeBuilder, ThemeContext,
//! };
//!
//! let theme = ThemeBuilder::new()
//!     .component(
//!         "NumberInput",
//!         ComponentConfig::builder()
//!             .parts(["field", "stepper"])
//!             .base_style(json!({ "field": { "width": "100%" }, "stepper": { "w": 6 } }))
//!             .variant("filled", json!({ "field": { "bg": "gray.100" } }))
//!             .build(),
//!     )
//!     .build();
//! let cx = ThemeContext::new(theme, ColorMode::Light);
//! let mut resolver = StyleResolver::new();
//!
//! let props = Props::new().variant("filled");
//! let styles = resolver.resolve_multi_part_style(&cx, "NumberInput", &props).unwrap();
//! assert_eq!(
//!     Value::Object((*styles).clone()),
//!     json!({
//!         "root": {
//!             ".understory-numberinput__field": { "width": "100%", "bg": "gray.100" },
//!             ".understory-numberinput__stepper": { "w": 6 }
//!         }
//!     }),
//! );
//!
//! // Freshly built but identical props: same handle.
//! let again = resolver
//!     .resolve_multi_part_style(&cx, "NumberInput", &Props::new().variant("filled"))
//!     .unwrap();
//! assert!(Rc::ptr_eq(&styles, &again));
//! ```
//!
//! ## Strategies
//!
//! Merging and equality are pluggable through [`Merger`] and
//! [`EqualityOracle`]; [`DeepMerge`] and [`StructuralEq`] are the defaults.
//!
//! ## Logging
//!
//! Resolution emits `tracing` events at `trace` and `debug` level. No
//! subscriber is installed by this crate.

mod cache;
mod compose;
mod config;
mod context;
mod equality;
mod error;
mod layer;
mod merge;
mod parts;
mod resolve;
mod theme;
mod value;

pub use cache::{Reconciled, StyleCache, reconcile};
pub use compose::compose_layers;
pub use config::{ComponentConfig, ComponentConfigBuilder};
pub use context::{CHILDREN_PROP, COLOR_MODE_KEY, Props, StyleContext, THEME_KEY};
pub use equality::{EqualityOracle, StructuralEq};
pub use error::{Error, LayerError, Result};
pub use layer::{Layer, LayerFn, resolve_layer};
pub use merge::{DeepMerge, Merger};
pub use parts::{
    DEFAULT_NAMESPACE, ROOT_PART, expand_parts, namespaced_part_class_name, part_class_name,
    part_selector,
};
pub use resolve::{ResolveOptions, ResolverConfig, StyleResolver};
pub use theme::{ColorMode, ContextAccessor, Theme, ThemeBuilder, ThemeContext};
pub use value::{StyleObject, drop_absent_values, omit_keys, path_get};
