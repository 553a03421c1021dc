// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Themes, color modes, and the context they are read from.
//!
//! A [`Theme`] pairs a JSON token tree with the component recipes it
//! declares. Resolution never mutates a theme.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};
use tracing::warn;

use crate::config::ComponentConfig;
use crate::error::{Error, Result};
use crate::value::path_get;

/// Field names that mark an object under `components` as a recipe.
const RECIPE_FIELDS: [&str; 5] = ["defaultProps", "baseStyle", "sizes", "variants", "parts"];

/// The active color appearance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl ColorMode {
    /// Returns the mode token as seen by layer functions (`"light"` / `"dark"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ColorMode> for Value {
    fn from(mode: ColorMode) -> Self {
        Self::String(mode.as_str().into())
    }
}

/// A design theme: token tree plus component recipes.
///
/// Internally, `Theme` wraps an `Rc<ThemeData>`, so cloning is cheap.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use understory_style_config::Theme;
///
/// let theme = Theme::from_json(json!({
///     "colors": { "brand": { "500": "#0078d4" } },
///     "components": {
///         "Button": {
///             "baseStyle": { "fontWeight": "semibold" },
///             "defaultProps": { "size": "md" }
///         }
///     }
/// }))
/// .unwrap();
///
/// assert_eq!(theme.token("colors.brand.500"), Some(&json!("#0078d4")));
/// assert!(theme.component("Button").is_some());
/// assert!(theme.component("Badge").is_none());
/// ```
#[derive(Clone, Default)]
pub struct Theme {
    inner: Rc<ThemeData>,
}

#[derive(Default)]
struct ThemeData {
    tokens: Value,
    components: BTreeMap<String, ComponentConfig>,
}

impl Theme {
    /// Builds a theme from its JSON form.
    ///
    /// The whole value is kept as the token tree. Recipes under
    /// `components` are decoded as static recipes. An object that has no
    /// recipe fields and only object-valued entries is a namespace: its
    /// entries register under dotted keys (`components.Forms.Input` becomes
    /// `"Forms.Input"`).
    ///
    /// A recipe that fails to decode is skipped with a warning, so one bad
    /// entry does not take the rest of the theme down with it.
    pub fn from_json(value: Value) -> Result<Self> {
        let Value::Object(root) = &value else {
            return Err(Error::InvalidTheme("theme root must be an object".into()));
        };
        let mut components = BTreeMap::new();
        match root.get("components") {
            None => {}
            Some(Value::Object(entries)) => collect_components(None, entries, &mut components),
            Some(_) => {
                return Err(Error::InvalidTheme("`components` must be an object".into()));
            }
        }
        let builder = ThemeBuilder {
            tokens: value,
            components,
        };
        Ok(builder.build())
    }

    /// Returns the token tree.
    #[must_use]
    pub fn tokens(&self) -> &Value {
        &self.inner.tokens
    }

    /// Looks up a token by dotted path.
    #[must_use]
    pub fn token(&self, path: &str) -> Option<&Value> {
        path_get(&self.inner.tokens, path)
    }

    /// Locates the recipe declared for `key`, if any.
    ///
    /// Dotted keys (`"Forms.Input"`) address recipes nested in namespaces,
    /// as well as recipes registered under that exact key.
    #[must_use]
    pub fn component(&self, key: &str) -> Option<&ComponentConfig> {
        self.inner.components.get(key)
    }

    /// Returns the keys of all declared components, sorted.
    pub fn component_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.components.keys().map(String::as_str)
    }

    /// Returns `true` if both handles share the same data.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("tokens", &self.inner.tokens)
            .field("components", &self.inner.components.keys())
            .finish()
    }
}

fn is_namespace(entry: &Map<String, Value>) -> bool {
    !entry.is_empty()
        && !RECIPE_FIELDS.iter().any(|field| entry.contains_key(*field))
        && entry.values().all(Value::is_object)
}

fn collect_components(
    prefix: Option<&str>,
    entries: &Map<String, Value>,
    out: &mut BTreeMap<String, ComponentConfig>,
) {
    for (name, entry) in entries {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        if let Value::Object(nested) = entry
            && is_namespace(nested)
        {
            collect_components(Some(&key), nested, out);
            continue;
        }
        match ComponentConfig::from_json(&key, entry.clone()) {
            Ok(config) => {
                out.insert(key, config);
            }
            Err(err) => warn!(component = %key, error = %err, "skipping style recipe"),
        }
    }
}

/// Builder for constructing [`Theme`] instances.
///
/// Use this to attach recipes with dynamic layers, which cannot be
/// expressed in JSON.
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    tokens: Value,
    components: BTreeMap<String, ComponentConfig>,
}

impl ThemeBuilder {
    /// Creates an empty theme builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token tree.
    #[must_use]
    pub fn tokens(mut self, tokens: Value) -> Self {
        self.tokens = tokens;
        self
    }

    /// Declares the recipe for a component key, replacing any previous one.
    #[must_use]
    pub fn component(mut self, key: impl Into<String>, config: ComponentConfig) -> Self {
        self.components.insert(key.into(), config);
        self
    }

    /// Builds the theme.
    #[must_use]
    pub fn build(self) -> Theme {
        Theme {
            inner: Rc::new(ThemeData {
                tokens: self.tokens,
                components: self.components,
            }),
        }
    }
}

/// Supplies the active theme and color mode to a resolution.
pub trait ContextAccessor {
    /// The theme in effect for this resolution.
    fn active_theme(&self) -> &Theme;

    /// The color mode in effect for this resolution.
    fn active_mode(&self) -> ColorMode;
}

/// A plain [`ContextAccessor`] holding a theme and a mode.
#[derive(Clone, Debug, Default)]
pub struct ThemeContext {
    theme: Theme,
    color_mode: ColorMode,
}

impl ThemeContext {
    /// Creates a context for `theme` in `color_mode`.
    #[must_use]
    pub fn new(theme: Theme, color_mode: ColorMode) -> Self {
        Self { theme, color_mode }
    }

    /// Switches the color mode.
    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.color_mode = color_mode;
    }

    /// Replaces the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl ContextAccessor for ThemeContext {
    fn active_theme(&self) -> &Theme {
        &self.theme
    }

    fn active_mode(&self) -> ColorMode {
        self.color_mode
    }
}
