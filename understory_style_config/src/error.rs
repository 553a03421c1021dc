// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for style resolution and recipe loading.

use thiserror::Error;

/// Error returned by a dynamic layer function.
pub type LayerError = Box<dyn core::error::Error + Send + Sync>;

/// Errors that can occur while loading recipes or resolving styles.
///
/// Missing components and unmatched sizes/variants are not errors; they
/// degrade to empty styling.
#[derive(Debug, Error)]
pub enum Error {
    /// A dynamic layer failed while being evaluated.
    #[error("style layer `{layer}` of component `{component}` failed: {source}")]
    Layer {
        /// The component key being resolved.
        component: String,
        /// Which layer failed (`base`, `size:<name>` or `variant:<name>`).
        layer: String,
        /// The error raised by the layer function.
        #[source]
        source: LayerError,
    },

    /// A JSON component recipe could not be decoded.
    #[error("invalid recipe for component `{component}`: {source}")]
    InvalidConfig {
        /// The component key whose recipe was rejected.
        component: String,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// A JSON theme did not have the expected shape.
    #[error("invalid theme: {0}")]
    InvalidTheme(String),
}

/// Result alias used throughout this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_error_display_names_component_and_layer() {
        let err = Error::Layer {
            component: "Button".into(),
            layer: "variant:solid".into(),
            source: "boom".into(),
        };
        assert_eq!(
            err.to_string(),
            "style layer `variant:solid` of component `Button` failed: boom"
        );
        assert!(core::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_theme_display() {
        let err = Error::InvalidTheme("`components` must be an object".into());
        assert_eq!(err.to_string(), "invalid theme: `components` must be an object");
    }
}
