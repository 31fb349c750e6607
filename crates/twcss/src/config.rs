//! User configuration: theme replacements, theme extensions and plugins.
//!
//! A configuration can be built in code or read from TOML:
//!
//! ```toml
//! [theme.screens]
//! sm = "640px"
//! tablet = { min = "900px" }
//!
//! [theme.extend.colors]
//! brand = { DEFAULT = "#1fb6ff", dark = "#0b7bb5" }
//!
//! [theme.extend.fontFamily]
//! sans = ["Graphik", "sans-serif"]
//! ```
//!
//! Keys directly under `theme` replace the default category wholesale;
//! keys under `theme.extend` are merged entry by entry on top. Plugins are
//! code and can only be attached with [`TailwindConfig::with_plugin`].

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::Result;
use crate::plugin::Plugin;

/// A value in a theme category.
///
/// Nested maps are flattened with `-` when the theme is resolved
/// (`red.500` becomes `red-500`, and a `DEFAULT` key maps to the parent).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Text(String),
    Integer(i64),
    Float(f64),
    List(Vec<ThemeValue>),
    Map(BTreeMap<String, ThemeValue>),
}

impl ThemeValue {
    /// Builds a map value from key/value pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ThemeValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        entries.into_iter().collect()
    }

    /// The scalar text of this value, if it is not a list or a map.
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            ThemeValue::Text(text) => Some(text.clone()),
            ThemeValue::Integer(number) => Some(number.to_string()),
            ThemeValue::Float(number) => Some(number.to_string()),
            ThemeValue::List(_) | ThemeValue::Map(_) => None,
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::Text(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue::Text(value)
    }
}

impl From<i64> for ThemeValue {
    fn from(value: i64) -> Self {
        ThemeValue::Integer(value)
    }
}

impl From<f64> for ThemeValue {
    fn from(value: f64) -> Self {
        ThemeValue::Float(value)
    }
}

impl<V: Into<ThemeValue>> From<Vec<V>> for ThemeValue {
    fn from(values: Vec<V>) -> Self {
        ThemeValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, ThemeValue>> for ThemeValue {
    fn from(map: BTreeMap<String, ThemeValue>) -> Self {
        ThemeValue::Map(map)
    }
}

impl<K: Into<String>, V: Into<ThemeValue>> FromIterator<(K, V)> for ThemeValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ThemeValue::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// The `theme` section: per-category replacements plus `extend`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub extend: BTreeMap<String, ThemeValue>,
    #[serde(flatten)]
    pub categories: BTreeMap<String, ThemeValue>,
}

/// Complete configuration for one compiler instance.
#[derive(Clone, Default, Deserialize)]
pub struct TailwindConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Applied in order after the theme is merged.
    #[serde(skip)]
    pub plugins: Vec<Arc<dyn Plugin>>,
}

impl TailwindConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Replaces a whole theme category.
    pub fn with_theme(mut self, category: impl Into<String>, value: impl Into<ThemeValue>) -> Self {
        self.theme.categories.insert(category.into(), value.into());
        self
    }

    /// Merges entries into a theme category.
    ///
    /// Extending the same category twice merges both sets of entries.
    pub fn with_extend(mut self, category: impl Into<String>, value: impl Into<ThemeValue>) -> Self {
        let category = category.into();
        let merged = match (self.theme.extend.remove(&category), value.into()) {
            (Some(ThemeValue::Map(mut existing)), ThemeValue::Map(entries)) => {
                existing.extend(entries);
                ThemeValue::Map(existing)
            }
            (_, value) => value,
        };
        self.theme.extend.insert(category, merged);
        self
    }

    /// Replaces the default screens with `min-width` breakpoints.
    pub fn with_screens<K, V, I>(self, screens: I) -> Self
    where
        K: Into<String>,
        V: Into<ThemeValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.with_theme("screens", ThemeValue::map(screens))
    }

    pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }
}

impl fmt::Debug for TailwindConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TailwindConfig")
            .field("theme", &self.theme)
            .field("plugins", &self.plugins.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_replacements_and_extensions() {
        let config = TailwindConfig::from_toml_str(
            r##"
[theme.screens]
sm = { min = "640px" }

[theme.extend.colors]
custom = "#1fb6ff"

[theme.extend.fontFamily]
sans = ["Graphik", "sans-serif"]
"##,
        )
        .expect("config should parse");

        assert!(config.theme.categories.contains_key("screens"));
        assert!(!config.theme.categories.contains_key("extend"));
        assert_eq!(
            config.theme.extend["colors"],
            ThemeValue::map([("custom", "#1fb6ff")])
        );
        assert_eq!(
            config.theme.extend["fontFamily"],
            ThemeValue::map([("sans", vec!["Graphik", "sans-serif"])])
        );
    }

    #[test]
    fn empty_config_is_default() {
        let config = TailwindConfig::from_toml_str("").expect("config should parse");
        assert_eq!(config.theme, ThemeConfig::default());
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn repeated_extend_merges() {
        let config = TailwindConfig::new()
            .with_extend("colors", ThemeValue::map([("a", "#000")]))
            .with_extend("colors", ThemeValue::map([("b", "#fff")]));
        let ThemeValue::Map(colors) = &config.theme.extend["colors"] else {
            panic!("colors should be a map");
        };
        assert_eq!(colors.len(), 2);
    }
}
