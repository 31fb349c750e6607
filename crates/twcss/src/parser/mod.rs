//! Parsing of class attributes and CSS declaration blocks.
//!
//! ## Submodules
//!
//! - [`tokens`]: splitting a class attribute into utility tokens
//! - [`variants`]: separating variant prefixes from the base utility
//! - [`declarations`]: `nom` parsers for `style` attributes and plugin rules

pub mod declarations;
pub mod tokens;
pub mod variants;

pub use crate::parser::declarations::{
    UtilityRule, parse_declaration_list, parse_utility_rules,
};
pub use crate::parser::tokens::{UtilityToken, tokenize};
pub use crate::parser::variants::{ClassifiedToken, VariantTable, classify};
