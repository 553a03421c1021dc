// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance style resolution.
//!
//! This module provides [`StyleResolver`], which ties the pipeline together:
//!
//! **locate recipe → merge props → materialize layers → compose → expand parts → reconcile**

use std::rc::Rc;

use tracing::{debug, trace};

use crate::cache::StyleCache;
use crate::compose::compose_layers;
use crate::context::{Props, StyleContext};
use crate::equality::{EqualityOracle, StructuralEq};
use crate::error::Result;
use crate::merge::{DeepMerge, Merger};
use crate::parts::{DEFAULT_NAMESPACE, expand_parts, namespaced_part_class_name, part_selector};
use crate::theme::ContextAccessor;
use crate::value::StyleObject;

/// Per-call options.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Fold declared parts into `root` (see [`expand_parts`]).
    pub multi_part: bool,
}

impl ResolveOptions {
    /// Options for a single-part resolution.
    pub const SINGLE: Self = Self { multi_part: false };
    /// Options for a multi-part resolution.
    pub const MULTI_PART: Self = Self { multi_part: true };
}

/// Resolver-wide settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    namespace: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.into(),
        }
    }
}

impl ResolverConfig {
    /// Creates the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace used in part class names.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Returns the namespace used in part class names.
    #[must_use]
    pub fn namespace_str(&self) -> &str {
        &self.namespace
    }

    /// Class name of `part` of `component` under this namespace.
    #[must_use]
    pub fn part_class_name(&self, component: &str, part: &str) -> String {
        namespaced_part_class_name(&self.namespace, component, part)
    }

    /// Selector key of `part` of `component` inside `root`.
    #[must_use]
    pub fn part_selector(&self, component: &str, part: &str) -> String {
        part_selector(&self.namespace, component, part)
    }
}

/// Resolves component styles for one consuming instance.
///
/// Each resolver owns one cache slot. Successive resolutions return the
/// same `Rc` as long as the computed content does not change, so consumers
/// can skip work with `Rc::ptr_eq`. Use one resolver per instance; never
/// share one across instances.
///
/// # Type Parameters
///
/// * `M` - The [`Merger`] combining layers (default [`DeepMerge`])
/// * `E` - The [`EqualityOracle`] gating cache replacement (default [`StructuralEq`])
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use serde_json::json;
/// use understory_style_config::{ColorMode, Props, StyleResolver, Theme, ThemeContext};
///
/// let theme = Theme::from_json(json!({
///     "components": {
///         "Button": {
///             "defaultProps": { "size": "md", "variant": "solid" },
///             "baseStyle": { "fontWeight": "semibold" },
///             "sizes": { "md": { "h": 10 }, "sm": { "h": 8 } },
///             "variants": { "solid": { "bg": "blue.500" } }
///         }
///     }
/// }))
/// .unwrap();
/// let cx = ThemeContext::new(theme, ColorMode::Light);
///
/// let mut resolver = StyleResolver::new();
/// let a = resolver.resolve_style(&cx, "Button", &Props::new()).unwrap();
/// assert_eq!(*a, json!({ "fontWeight": "semibold", "h": 10, "bg": "blue.500" }).as_object().cloned().unwrap());
///
/// // Same content, same handle.
/// let b = resolver.resolve_style(&cx, "Button", &Props::new().size("md")).unwrap();
/// assert!(Rc::ptr_eq(&a, &b));
///
/// // Different content, new handle.
/// let c = resolver.resolve_style(&cx, "Button", &Props::new().size("sm")).unwrap();
/// assert!(!Rc::ptr_eq(&b, &c));
/// ```
#[derive(Debug)]
pub struct StyleResolver<M = DeepMerge, E = StructuralEq> {
    config: ResolverConfig,
    merger: M,
    oracle: E,
    cache: StyleCache,
}

impl StyleResolver {
    /// Creates a resolver with default settings and strategies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Creates a resolver with `config` and the default strategies.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self::with_strategies(config, DeepMerge, StructuralEq)
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, E> StyleResolver<M, E>
where
    M: Merger,
    E: EqualityOracle,
{
    /// Creates a resolver with custom merge and equality strategies.
    #[must_use]
    pub fn with_strategies(config: ResolverConfig, merger: M, oracle: E) -> Self {
        Self {
            config,
            merger,
            oracle,
            cache: StyleCache::new(),
        }
    }

    /// Returns the resolver settings.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the result currently held by the cache slot.
    #[must_use]
    pub fn current(&self) -> &Rc<StyleObject> {
        self.cache.current()
    }

    /// Empties the cache slot.
    pub fn reset(&mut self) {
        self.cache.reset();
    }

    /// Resolves the single-part style of `component`.
    ///
    /// Shorthand for [`resolve`](Self::resolve) with [`ResolveOptions::SINGLE`].
    pub fn resolve_style<C>(
        &mut self,
        cx: &C,
        component: &str,
        props: &Props,
    ) -> Result<Rc<StyleObject>>
    where
        C: ContextAccessor + ?Sized,
    {
        self.resolve(cx, component, props, ResolveOptions::SINGLE)
    }

    /// Resolves the multi-part style of `component`.
    ///
    /// Shorthand for [`resolve`](Self::resolve) with [`ResolveOptions::MULTI_PART`].
    pub fn resolve_multi_part_style<C>(
        &mut self,
        cx: &C,
        component: &str,
        props: &Props,
    ) -> Result<Rc<StyleObject>>
    where
        C: ContextAccessor + ?Sized,
    {
        self.resolve(cx, component, props, ResolveOptions::MULTI_PART)
    }

    /// Resolves the style of `component` for `props`.
    ///
    /// The recipe is the caller's [override](Props::style_config) if any,
    /// otherwise the one the active theme declares for `component`. Without
    /// a recipe nothing is computed and the cached result is returned as is
    /// (an empty object on the first call).
    ///
    /// Part folding only happens when `options.multi_part` is set and the
    /// recipe declares `parts`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Layer`](crate::Error::Layer) if a dynamic layer fails.
    /// The cache slot is left unchanged in that case.
    pub fn resolve<C>(
        &mut self,
        cx: &C,
        component: &str,
        props: &Props,
        options: ResolveOptions,
    ) -> Result<Rc<StyleObject>>
    where
        C: ContextAccessor + ?Sized,
    {
        trace!(component, multi_part = options.multi_part, "resolving style");

        let theme = cx.active_theme();
        let Some(config) = props
            .config_override()
            .or_else(|| theme.component(component))
        else {
            debug!(component, "no style recipe; returning cached result");
            return Ok(Rc::clone(self.cache.current()));
        };

        let style_cx = StyleContext::merge_with(
            &self.merger,
            theme,
            cx.active_mode(),
            Some(config.default_props()),
            props,
        );

        let mut styles = compose_layers(&self.merger, component, config, &style_cx)?;

        if options.multi_part
            && let Some(parts) = config.parts()
        {
            styles = expand_parts(styles, &self.config.namespace, component, parts);
        }

        Ok(self.cache.update(&self.oracle, styles))
    }
}
