//! Error types for configuration and plugin registration.
//!
//! Resolution of individual class names never fails: tokens that match no
//! utility are dropped. The only fatal errors are the ones raised while the
//! theme and utility registry are being built.

use thiserror::Error;

/// Errors that can occur while building a theme or registering plugins.
///
/// # Examples
///
/// ```rust
/// use twcss::{ConfigError, TailwindConfig};
///
/// let result = TailwindConfig::from_toml_str("theme = 3");
/// assert!(matches!(result, Err(ConfigError::Parse(_))));
/// ```
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A plugin passed something other than a mapping of utilities, or a
    /// utility whose name or declarations are not usable.
    #[error("invalid plugin registration: {0}")]
    InvalidPlugin(String),

    /// A theme category has a shape the resolver cannot flatten.
    #[error("invalid theme value for `{category}`: {reason}")]
    InvalidTheme { category: String, reason: String },

    /// CSS handed to the plugin API could not be parsed.
    #[error("CSS syntax error: {0}")]
    InvalidCss(String),

    /// The TOML configuration could not be deserialized.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// An I/O error occurred while reading a configuration file.
    #[error("I/O error reading configuration")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
