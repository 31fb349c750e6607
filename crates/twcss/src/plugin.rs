//! Plugins and the utility registry.
//!
//! A plugin is called once while the theme is resolved and receives a
//! [`PluginApi`] through which it registers utilities. Registered utilities
//! behave like built-ins: they accept every variant prefix and the `!`
//! modifier.
//!
//! ```rust
//! use twcss::{PluginApi, TailwindConfig, UtilityCompiler};
//!
//! let config = TailwindConfig::new().with_plugin(|api: &mut PluginApi<'_>| {
//!     api.add_utility(".border-custom", [("border", "2px solid")])
//! });
//! let compiler = UtilityCompiler::from_config(&config).unwrap();
//! let resolved = compiler.compile("sm:border-custom");
//! assert_eq!(resolved[0].declarations[0].value, "2px solid");
//! ```

use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};
use crate::parser::parse_utility_rules;
use crate::theme::Theme;
use crate::types::normalize_property;
use crate::utilities::resolve_builtin;

/// Something that registers utilities.
///
/// Implemented for closures taking a [`PluginApi`].
pub trait Plugin: Send + Sync {
    fn register(&self, api: &mut PluginApi<'_>) -> Result<()>;
}

impl<F> Plugin for F
where
    F: Fn(&mut PluginApi<'_>) -> Result<()> + Send + Sync,
{
    fn register(&self, api: &mut PluginApi<'_>) -> Result<()> {
        self(api)
    }
}

/// Utilities registered by plugins, keyed by class name without the dot.
///
/// Registering a name twice replaces the earlier declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UtilityRegistry {
    utilities: BTreeMap<String, Vec<(String, String)>>,
}

impl UtilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, declarations: Vec<(String, String)>) {
        let name = name.into();
        if self.utilities.insert(name.clone(), declarations).is_some() {
            log::warn!("utility `{}` registered more than once; the last registration wins", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&[(String, String)]> {
        self.utilities.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.utilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.utilities.keys().map(String::as_str)
    }
}

/// Handle passed to [`Plugin::register`].
pub struct PluginApi<'a> {
    theme: &'a Theme,
    registry: &'a mut UtilityRegistry,
}

impl<'a> PluginApi<'a> {
    pub(crate) fn new(theme: &'a Theme, registry: &'a mut UtilityRegistry) -> Self {
        Self { theme, registry }
    }

    /// Looks up a value in the merged theme.
    pub fn theme(&self, category: &str, key: &str) -> Option<&str> {
        self.theme.get(category, key)
    }

    /// Registers one utility. `name` may be written with or without the
    /// leading `.`; camelCase property names are converted to kebab-case.
    pub fn add_utility<I, P, V>(&mut self, name: &str, declarations: I) -> Result<()>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
        V: Into<String>,
    {
        let name = name.strip_prefix('.').unwrap_or(name);
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidPlugin(format!(
                "`{}` is not a valid utility name",
                name
            )));
        }

        let declarations: Vec<(String, String)> = declarations
            .into_iter()
            .map(|(property, value)| {
                (
                    normalize_property(property.as_ref()).into_owned(),
                    value.into(),
                )
            })
            .collect();
        if declarations.is_empty() {
            return Err(ConfigError::InvalidPlugin(format!(
                "utility `{}` has no declarations",
                name
            )));
        }

        if resolve_builtin(name, self.theme).is_some() {
            log::warn!("plugin utility `{}` shadows a built-in utility", name);
        }
        log::debug!("registering utility `{}` ({} declarations)", name, declarations.len());
        self.registry.register(name, declarations);
        Ok(())
    }

    /// Registers every utility in a mapping of `.class` to declarations:
    ///
    /// ```toml
    /// ".border-custom" = { border = "2px solid" }
    /// ```
    ///
    /// Anything other than that shape is rejected.
    pub fn add_utilities(&mut self, utilities: &toml::Value) -> Result<()> {
        let toml::Value::Table(table) = utilities else {
            return Err(ConfigError::InvalidPlugin(format!(
                "expected a mapping of utilities, found {}",
                utilities.type_str()
            )));
        };

        for (selector, body) in table {
            let Some(name) = selector.strip_prefix('.') else {
                return Err(ConfigError::InvalidPlugin(format!(
                    "`{}` is not a class selector",
                    selector
                )));
            };
            let toml::Value::Table(body) = body else {
                return Err(ConfigError::InvalidPlugin(format!(
                    "declarations for `{}` must be a mapping",
                    selector
                )));
            };
            let declarations = body
                .iter()
                .map(|(property, value)| {
                    let value = match value {
                        toml::Value::String(text) => text.clone(),
                        toml::Value::Integer(number) => number.to_string(),
                        toml::Value::Float(number) => number.to_string(),
                        other => {
                            return Err(ConfigError::InvalidPlugin(format!(
                                "`{}` in `{}` must be a string or number, found {}",
                                property,
                                selector,
                                other.type_str()
                            )));
                        }
                    };
                    Ok((property.as_str(), value))
                })
                .collect::<Result<Vec<_>>>()?;
            self.add_utility(name, declarations)?;
        }
        Ok(())
    }

    /// Registers utilities written as CSS rules:
    ///
    /// ```css
    /// .border-custom { border: 2px solid; }
    /// ```
    pub fn add_utilities_css(&mut self, css: &str) -> Result<()> {
        for rule in parse_utility_rules(css)? {
            self.add_utility(&rule.name, rule.declarations)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_api(run: impl FnOnce(&mut PluginApi<'_>) -> Result<()>) -> Result<UtilityRegistry> {
        let theme = Theme::default();
        let mut registry = UtilityRegistry::new();
        run(&mut PluginApi::new(&theme, &mut registry))?;
        Ok(registry)
    }

    #[test]
    fn add_utility_normalizes_names_and_properties() {
        let registry = with_api(|api| api.add_utility(".card", [("backgroundColor", "#fff")])).unwrap();
        assert_eq!(
            registry.get("card"),
            Some(&[("background-color".to_string(), "#fff".to_string())][..])
        );
    }

    #[test]
    fn add_utilities_from_mapping() {
        let value: toml::Value = toml::from_str(
            r#"
".border-custom" = { border = "2px solid" }
".z-top" = { zIndex = 999 }
"#,
        )
        .unwrap();
        let registry = with_api(|api| api.add_utilities(&value)).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("z-top").unwrap()[0].0, "z-index");
        assert_eq!(registry.get("z-top").unwrap()[0].1, "999");
    }

    #[test]
    fn non_mapping_is_rejected() {
        let err = with_api(|api| api.add_utilities(&toml::Value::String("nope".into()))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlugin(_)));
    }

    #[test]
    fn selector_without_dot_is_rejected() {
        let value: toml::Value = toml::from_str(r#"card = { color = "red" }"#).unwrap();
        assert!(with_api(|api| api.add_utilities(&value)).is_err());
    }

    #[test]
    fn css_rules() {
        let registry = with_api(|api| {
            api.add_utilities_css(".btn { padding: 12px 20px; color: #fff } .muted { opacity: .5 }")
        })
        .unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["btn", "muted"]);
        assert_eq!(registry.get("btn").unwrap().len(), 2);
    }

    #[test]
    fn empty_declarations_are_rejected() {
        let empty: [(&str, &str); 0] = [];
        assert!(with_api(|api| api.add_utility("x", empty)).is_err());
    }
}
