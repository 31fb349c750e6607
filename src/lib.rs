//! Tailwind-style utility classes for email markup.
//!
//! This crate bundles the two workspace crates:
//!
//! - [`twcss`]: the utility compiler (themes, plugins, tokens, variants)
//! - [`mailwind`]: the tree processor that inlines resolved styles and
//!   hoists responsive rules into the document head
//!
//! Everything needed to process a tree is re-exported at the root.
//!
//! ```rust
//! use mailwind_rs::{Element, Node, Tailwind, to_markup};
//!
//! let tree: Node = Element::new("p").class("text-sm text-gray-700").child("Hi").into();
//! let processed = Tailwind::new().process(tree).unwrap();
//!
//! assert_eq!(
//!     to_markup(&processed),
//!     r#"<p style="font-size:0.875rem;line-height:1.25rem;color:#374151">Hi</p>"#
//! );
//! ```

pub use mailwind::*;
pub use twcss;
pub use twcss::{Plugin, PluginApi, UtilityCompiler};
