//! # mailwind - utility classes for email markup
//!
//! Email clients ignore external stylesheets and most `<style>` features,
//! so styling has to be inlined. [`Tailwind::process`] walks a markup tree,
//! resolves every element's utility classes and:
//!
//! - inlines unconditional declarations into the element's `style`, never
//!   overriding a property the author already set
//! - gives elements with breakpoint, state, `dark:` or `print:` classes a
//!   marker class and hoists those rules into one `<style>` element
//!   appended to the document `<head>`
//!
//! ## Quick Start
//!
//! ```rust
//! use mailwind::{Element, Node, Tailwind};
//!
//! let email: Node = Element::new("html")
//!     .child(Element::new("head"))
//!     .child(
//!         Element::new("body").child(
//!             Element::new("div")
//!                 .class("bg-white p-4 sm:p-8")
//!                 .child("Welcome!"),
//!         ),
//!     )
//!     .into();
//!
//! let processed = Tailwind::new().process(email).unwrap();
//!
//! let div = processed.find_element("div").unwrap();
//! assert_eq!(div.style.to_inline_css(), "background-color:#fff;padding:1rem");
//! assert_eq!(div.class_name.as_deref(), Some("tw-rsp-0"));
//!
//! let style = processed.find_element("style").unwrap();
//! assert_eq!(
//!     style.children,
//!     [Node::raw("@media (min-width:640px){.tw-rsp-0{padding:2rem !important}}")]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`node`]: the markup tree and the component capability
//! - [`inline`]: merging declarations into inline styles
//! - [`responsive`]: the conditional rule aggregator
//! - [`head`]: head location and stylesheet injection
//! - [`markup`]: a plain serializer for processed trees
//! - [`error`]: processing errors

pub mod error;
pub mod head;
pub mod inline;
pub mod markup;
pub mod node;
pub mod responsive;
mod walker;

pub use error::{MailwindError, Result};
pub use head::NodePath;
pub use inline::merge_inline_styles;
pub use markup::to_markup;
pub use node::{Component, ComponentNode, Element, Node, Props};
pub use responsive::ResponsiveStyles;
pub use twcss::{StyleMap, TailwindConfig, ThemeValue};

use twcss::UtilityCompiler;

use crate::responsive::DEFAULT_MARKER_PREFIX;
use crate::walker::Walker;

/// Resolves utility classes across markup trees.
///
/// The theme and plugin utilities are resolved once, when the `Tailwind`
/// is built. Each [`process`](Tailwind::process) call collects its own
/// stylesheet, so one instance can process any number of trees.
#[derive(Clone, Debug)]
pub struct Tailwind {
    compiler: UtilityCompiler,
    marker_prefix: String,
}

impl Default for Tailwind {
    fn default() -> Self {
        Self::new()
    }
}

impl Tailwind {
    /// Uses the default theme.
    pub fn new() -> Self {
        Self {
            compiler: UtilityCompiler::default(),
            marker_prefix: DEFAULT_MARKER_PREFIX.to_string(),
        }
    }

    /// Merges `config` over the default theme and runs its plugins.
    pub fn with_config(config: &TailwindConfig) -> Result<Self> {
        Ok(Self {
            compiler: UtilityCompiler::from_config(config)?,
            marker_prefix: DEFAULT_MARKER_PREFIX.to_string(),
        })
    }

    /// Sets the prefix of generated marker classes (`tw-rsp-` by default).
    pub fn with_marker_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.marker_prefix = prefix.into();
        self
    }

    pub fn compiler(&self) -> &UtilityCompiler {
        &self.compiler
    }

    /// Processes a whole tree.
    ///
    /// Fails with [`MailwindError::MissingHead`] if any element uses a
    /// conditional utility and the tree has no `<head>`.
    pub fn process(&self, root: Node) -> Result<Node> {
        let mut walker = Walker::new(&self.compiler, ResponsiveStyles::new(self.marker_prefix.as_str()));
        let mut root = walker.visit(root);
        let (styles, head) = walker.finish();

        log::debug!(
            "processed tree: {} conditional rule blocks across {} elements",
            styles.len(),
            styles.marker_count()
        );

        if styles.is_empty() {
            return Ok(root);
        }

        let css = styles.to_css(self.compiler.theme().screens());
        let injected = match &head {
            Some(path) => head::inject_stylesheet(&mut root, path, css),
            None => false,
        };
        if !injected {
            return Err(MailwindError::MissingHead {
                classes: styles.classes().to_vec(),
            });
        }
        Ok(root)
    }
}
