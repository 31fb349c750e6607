//! # twcss - utility class compiler
//!
//! Resolves utility class names such as `bg-red-500`, `sm:p-4` or
//! `max-h-[calc(50px+3rem)]` into CSS declarations against a configurable
//! theme. This crate provides:
//!
//! - **Theme**: a default theme merged with user replacements, extensions
//!   and plugin-registered utilities
//! - **Parsing**: class attribute tokenization, variant classification and
//!   `nom` parsers for declaration blocks
//! - **Resolution**: mapping a base utility to one or more declarations
//!
//! ## Quick Start
//!
//! ```rust
//! use twcss::{UtilityCompiler, Variant};
//!
//! let compiler = UtilityCompiler::default();
//! let resolved = compiler.compile("p-4 sm:bg-red-300 not-a-utility");
//!
//! assert_eq!(resolved[0].declarations[0].to_string(), "padding:1rem");
//! assert_eq!(
//!     resolved[1].declarations[0].variant,
//!     Some(Variant::Screen("sm".into()))
//! );
//! assert!(!resolved[2].is_resolved());
//! ```
//!
//! ## Supported Syntax
//!
//! ### Variants
//! - Screens: `sm:`, `md:`, `lg:`, `xl:`, `2xl:` or any configured name
//! - Below a screen: `max-sm:`, `max-md:`, ...
//! - States: `hover:`, `focus:`, `focus-within:`, `focus-visible:`,
//!   `active:`, `visited:`, `first:`, `last:`, `odd:`, `even:`
//! - `dark:` and `print:`
//!
//! ### Values
//! - Theme keys: `text-lg`, `rounded-xl`, `bg-brand-light`
//! - Arbitrary values: `w-[300px]`, `bg-[url(/hero.png)]`, `text-[length:1.1em]`
//! - Arbitrary properties: `[mso-line-height-rule:exactly]`
//! - Fractions: `w-1/2`
//! - Opacity modifiers: `bg-black/50`
//! - Negatives: `-mt-2`
//! - Important: `!p-0`, `sm:!p-0`
//!
//! ## Modules
//!
//! - [`config`]: user configuration, from code or TOML
//! - [`theme`]: theme merging and the default theme
//! - [`parser`]: tokens, variants and declaration blocks
//! - [`plugin`]: the plugin API and utility registry
//! - [`utilities`]: utility resolution
//! - [`types`]: declarations, screens, variants and style maps
//! - [`error`]: configuration errors

pub mod config;
pub mod error;
pub mod parser;
pub mod plugin;
pub mod theme;
pub mod types;
pub mod utilities;

pub use config::{TailwindConfig, ThemeConfig, ThemeValue};
pub use error::{ConfigError, Result};
pub use plugin::{Plugin, PluginApi, UtilityRegistry};
pub use theme::Theme;
pub use types::{Declaration, Screen, StateVariant, StyleMap, Variant};
pub use utilities::{Declarations, ResolvedToken, UtilityCompiler, resolve_token};
