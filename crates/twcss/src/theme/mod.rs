//! Theme resolution.
//!
//! A [`Theme`] maps category names (`colors`, `spacing`, `fontFamily`, ...)
//! to flat `key -> value` tables, plus the ordered list of [`Screen`]s.
//!
//! ## Merge order
//!
//! 1. Start from a clone of the process-wide default theme
//! 2. `theme.<category>` replaces that category
//! 3. `theme.extend.<category>` is merged key by key on top
//! 4. Plugins run in order and register extra utilities
//!
//! A replaced `screens` table is used exactly as given (sorted by minimum
//! width), so custom breakpoint names become variant prefixes directly.

pub mod defaults;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::config::{TailwindConfig, ThemeValue};
use crate::error::{ConfigError, Result};
use crate::plugin::{PluginApi, UtilityRegistry};
use crate::types::{Screen, default_screens, sort_screens};

pub const COLORS: &str = "colors";
pub const SPACING: &str = "spacing";
pub const FONT_SIZE: &str = "fontSize";
pub const FONT_FAMILY: &str = "fontFamily";
pub const FONT_WEIGHT: &str = "fontWeight";
pub const LINE_HEIGHT: &str = "lineHeight";
pub const LETTER_SPACING: &str = "letterSpacing";
pub const BORDER_RADIUS: &str = "borderRadius";
pub const BORDER_WIDTH: &str = "borderWidth";
pub const TEXT_ALIGN: &str = "textAlign";
pub const OPACITY: &str = "opacity";
pub const MAX_WIDTH: &str = "maxWidth";
pub const Z_INDEX: &str = "zIndex";
pub const BOX_SHADOW: &str = "boxShadow";
pub const SCREENS: &str = "screens";

/// Line heights paired with `fontSize` entries written as `[size, lineHeight]`.
const FONT_SIZE_LINE_HEIGHT: &str = "fontSize/lineHeight";

/// The default theme, built once per process.
pub static DEFAULT_THEME: Lazy<Theme> = Lazy::new(Theme::builtin);

/// A fully merged theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    categories: BTreeMap<String, BTreeMap<String, String>>,
    screens: Vec<Screen>,
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME.clone()
    }
}

impl Theme {
    /// Merges `config` over the default theme and runs its plugins.
    ///
    /// Returns the theme together with the utilities the plugins registered.
    pub fn resolve(config: &TailwindConfig) -> Result<(Theme, UtilityRegistry)> {
        let mut theme = DEFAULT_THEME.clone();

        for (category, value) in &config.theme.categories {
            theme.replace_category(category, value)?;
        }
        for (category, value) in &config.theme.extend {
            theme.extend_category(category, value)?;
        }

        let mut registry = UtilityRegistry::new();
        for plugin in &config.plugins {
            let mut api = PluginApi::new(&theme, &mut registry);
            plugin.register(&mut api)?;
        }

        log::debug!(
            "theme resolved: {} categories, screens={:?}, plugin utilities={}",
            theme.categories.len(),
            theme.screens.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            registry.len()
        );

        Ok((theme, registry))
    }

    /// Looks up `key` in `category`.
    pub fn get(&self, category: &str, key: &str) -> Option<&str> {
        self.categories
            .get(category)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn category(&self, category: &str) -> Option<&BTreeMap<String, String>> {
        self.categories.get(category)
    }

    /// Line height paired with a `fontSize` entry, if it has one.
    pub fn font_size_line_height(&self, key: &str) -> Option<&str> {
        self.get(FONT_SIZE_LINE_HEIGHT, key)
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn screen(&self, name: &str) -> Option<&Screen> {
        self.screens.iter().find(|screen| screen.name == name)
    }

    fn replace_category(&mut self, category: &str, value: &ThemeValue) -> Result<()> {
        if category == SCREENS {
            self.screens = parse_screens(value)?;
            sort_screens(&mut self.screens);
            return Ok(());
        }

        let flat = flatten_category(category, value)?;
        self.categories.insert(category.to_string(), flat.values);
        if category == FONT_SIZE {
            self.categories
                .insert(FONT_SIZE_LINE_HEIGHT.to_string(), flat.line_heights);
        }
        Ok(())
    }

    fn extend_category(&mut self, category: &str, value: &ThemeValue) -> Result<()> {
        if category == SCREENS {
            for screen in parse_screens(value)? {
                match self.screens.iter_mut().find(|s| s.name == screen.name) {
                    Some(existing) => *existing = screen,
                    None => self.screens.push(screen),
                }
            }
            sort_screens(&mut self.screens);
            return Ok(());
        }

        let flat = flatten_category(category, value)?;
        if category == FONT_SIZE {
            // An extended size replaces the whole default entry, line height included.
            if let Some(line_heights) = self.categories.get_mut(FONT_SIZE_LINE_HEIGHT) {
                for key in flat.values.keys() {
                    line_heights.remove(key);
                }
            }
        }
        self.categories
            .entry(category.to_string())
            .or_default()
            .extend(flat.values);
        if !flat.line_heights.is_empty() {
            self.categories
                .entry(FONT_SIZE_LINE_HEIGHT.to_string())
                .or_default()
                .extend(flat.line_heights);
        }
        Ok(())
    }

    fn builtin() -> Theme {
        let mut categories = BTreeMap::new();

        let mut colors = table(defaults::BASE_COLORS);
        for (family, shades) in defaults::PALETTE.entries() {
            for (shade, hex) in defaults::SHADES.iter().zip(shades.iter()) {
                colors.insert(format!("{}-{}", family, shade), hex.to_string());
            }
        }
        categories.insert(COLORS.to_string(), colors);

        let mut font_size = BTreeMap::new();
        let mut font_size_line_height = BTreeMap::new();
        for (key, size, line_height) in defaults::FONT_SIZE {
            font_size.insert(key.to_string(), size.to_string());
            font_size_line_height.insert(key.to_string(), line_height.to_string());
        }
        categories.insert(FONT_SIZE.to_string(), font_size);
        categories.insert(FONT_SIZE_LINE_HEIGHT.to_string(), font_size_line_height);

        for (name, entries) in [
            (SPACING, defaults::SPACING),
            (FONT_FAMILY, defaults::FONT_FAMILY),
            (FONT_WEIGHT, defaults::FONT_WEIGHT),
            (LINE_HEIGHT, defaults::LINE_HEIGHT),
            (LETTER_SPACING, defaults::LETTER_SPACING),
            (BORDER_RADIUS, defaults::BORDER_RADIUS),
            (BORDER_WIDTH, defaults::BORDER_WIDTH),
            (TEXT_ALIGN, defaults::TEXT_ALIGN),
            (OPACITY, defaults::OPACITY),
            (MAX_WIDTH, defaults::MAX_WIDTH),
            (Z_INDEX, defaults::Z_INDEX),
            (BOX_SHADOW, defaults::BOX_SHADOW),
        ] {
            categories.insert(name.to_string(), table(entries));
        }

        Theme {
            categories,
            screens: default_screens(),
        }
    }
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[derive(Debug, Default)]
struct FlatCategory {
    values: BTreeMap<String, String>,
    line_heights: BTreeMap<String, String>,
}

fn invalid(category: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidTheme {
        category: category.to_string(),
        reason: reason.into(),
    }
}

fn flatten_category(category: &str, value: &ThemeValue) -> Result<FlatCategory> {
    let ThemeValue::Map(entries) = value else {
        return Err(invalid(category, "expected a table of entries"));
    };

    let mut flat = FlatCategory::default();
    for (key, value) in entries {
        flatten_entry(category, key, value, &mut flat)?;
    }
    Ok(flat)
}

fn flatten_entry(category: &str, key: &str, value: &ThemeValue, flat: &mut FlatCategory) -> Result<()> {
    match value {
        ThemeValue::Map(nested) => {
            for (child, value) in nested {
                let child_key = if child == "DEFAULT" {
                    key.to_string()
                } else {
                    format!("{}-{}", key, child)
                };
                flatten_entry(category, &child_key, value, flat)?;
            }
        }
        ThemeValue::List(items) if category == FONT_SIZE => {
            let size = items
                .first()
                .and_then(ThemeValue::as_scalar)
                .ok_or_else(|| invalid(category, format!("`{}` must start with a size", key)))?;
            let line_height = match items.get(1) {
                Some(ThemeValue::Map(options)) => options.get("lineHeight").and_then(ThemeValue::as_scalar),
                Some(other) => other.as_scalar(),
                None => None,
            };
            flat.values.insert(key.to_string(), size);
            if let Some(line_height) = line_height {
                flat.line_heights.insert(key.to_string(), line_height);
            }
        }
        ThemeValue::List(items) => {
            let parts = items
                .iter()
                .map(|item| {
                    item.as_scalar().ok_or_else(|| {
                        invalid(category, format!("`{}` may only list plain values", key))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            flat.values.insert(key.to_string(), parts.join(", "));
        }
        scalar => {
            if let Some(text) = scalar.as_scalar() {
                flat.values.insert(key.to_string(), text);
            }
        }
    }
    Ok(())
}

fn parse_screens(value: &ThemeValue) -> Result<Vec<Screen>> {
    let ThemeValue::Map(entries) = value else {
        return Err(invalid(SCREENS, "expected a table of named breakpoints"));
    };

    entries
        .iter()
        .map(|(name, value)| match value {
            ThemeValue::Map(bounds) => {
                let bound = |key: &str| bounds.get(key).and_then(ThemeValue::as_scalar);
                if let Some(raw) = bound("raw") {
                    return Ok(Screen::raw(name.clone(), raw));
                }
                let (min, max) = (bound("min"), bound("max"));
                if min.is_none() && max.is_none() {
                    return Err(invalid(
                        SCREENS,
                        format!("`{}` needs a `min`, `max` or `raw` boundary", name),
                    ));
                }
                Ok(Screen::range(name.clone(), min, max))
            }
            ThemeValue::List(_) => Err(invalid(
                SCREENS,
                format!("`{}` must be a width or a table of boundaries", name),
            )),
            scalar => Ok(Screen::min_width(
                name.clone(),
                scalar.as_scalar().unwrap_or_default(),
            )),
        })
        .collect()
}
