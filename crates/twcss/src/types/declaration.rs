use std::fmt;

use crate::types::variant::Variant;

/// A resolved CSS property/value pair.
///
/// Declarations only remember what they set and under which variant; the
/// class token that produced them is not kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    /// Set by the `!` modifier (`!bg-red-500`).
    pub important: bool,
    /// `None` for declarations that are inlined on the node.
    pub variant: Option<Variant>,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
            variant: None,
        }
    }

    pub fn with_variant(mut self, variant: Option<Variant>) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn is_conditional(&self) -> bool {
        self.variant.is_some()
    }

    /// The value as it should appear in an inline `style` attribute.
    pub fn inline_value(&self) -> String {
        if self.important {
            format!("{} !important", self.value)
        } else {
            self.value.clone()
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.inline_value())
    }
}
