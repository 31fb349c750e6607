//! Aggregation of conditional declarations into one stylesheet.
//!
//! Every element with at least one conditional declaration gets its own
//! marker class (`tw-rsp-0`, `tw-rsp-1`, ...) the first time it contributes.
//! Rules are keyed by (marker, variant), so two elements never share a
//! rule block and never override each other. Within a block a later
//! declaration of the same property replaces the earlier one.
//!
//! ## Emission order
//!
//! Blocks are sorted, stably, so more specific conditions come later:
//!
//! 1. state variants (`.tw-rsp-0:hover{...}`)
//! 2. `max-{screen}` variants, widest breakpoint first
//! 3. `{screen}` variants, narrowest breakpoint first
//! 4. `dark`, then `print`
//!
//! Blocks sharing a media query are emitted in one `@media` group. Every
//! declaration carries `!important` so it overrides the inline style of
//! the same element.

use twcss::{Declaration, Screen, Variant};

pub const DEFAULT_MARKER_PREFIX: &str = "tw-rsp-";

#[derive(Clone, Debug, PartialEq, Eq)]
struct RuleBlock {
    marker: String,
    variant: Variant,
    declarations: Vec<(String, String)>,
}

/// Conditional rules collected over one traversal.
#[derive(Clone, Debug)]
pub struct ResponsiveStyles {
    marker_prefix: String,
    next_marker: usize,
    blocks: Vec<RuleBlock>,
    classes: Vec<String>,
}

impl Default for ResponsiveStyles {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_PREFIX)
    }
}

impl ResponsiveStyles {
    pub fn new(marker_prefix: impl Into<String>) -> Self {
        Self {
            marker_prefix: marker_prefix.into(),
            next_marker: 0,
            blocks: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Hands out the next marker class.
    pub fn allocate_marker(&mut self) -> String {
        let marker = format!("{}{}", self.marker_prefix, self.next_marker);
        self.next_marker += 1;
        marker
    }

    /// Whether `class` is a marker this aggregator handed out.
    pub fn is_marker(&self, class: &str) -> bool {
        class
            .strip_prefix(self.marker_prefix.as_str())
            .and_then(|index| index.parse::<usize>().ok())
            .is_some_and(|index| index < self.next_marker)
    }

    /// Records a conditional declaration for the element carrying `marker`.
    /// `class` is the token it came from. Unconditional declarations are
    /// ignored.
    pub fn record(&mut self, marker: &str, declaration: &Declaration, class: &str) {
        let Some(variant) = &declaration.variant else {
            return;
        };
        if !self.classes.iter().any(|existing| existing == class) {
            self.classes.push(class.to_string());
        }

        let existing = self
            .blocks
            .iter()
            .rposition(|block| block.marker == marker && block.variant == *variant);
        let idx = match existing {
            Some(idx) => idx,
            None => {
                self.blocks.push(RuleBlock {
                    marker: marker.to_string(),
                    variant: variant.clone(),
                    declarations: Vec::new(),
                });
                self.blocks.len() - 1
            }
        };
        let block = &mut self.blocks[idx];

        match block
            .declarations
            .iter_mut()
            .find(|(property, _)| *property == declaration.property)
        {
            Some(existing) => existing.1 = declaration.value.clone(),
            None => block
                .declarations
                .push((declaration.property.clone(), declaration.value.clone())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of (marker, variant) rule blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Markers handed out so far.
    pub fn marker_count(&self) -> usize {
        self.next_marker
    }

    /// Class tokens that produced conditional declarations, first seen first.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Renders the collected blocks as one stylesheet.
    pub fn to_css(&self, screens: &[Screen]) -> String {
        let mut blocks: Vec<&RuleBlock> = self.blocks.iter().collect();
        blocks.sort_by_key(|block| emission_rank(&block.variant, screens));

        let mut css = String::new();
        let mut open_media: Option<String> = None;
        for block in blocks {
            let media = block.variant.media_query(screens);
            if media != open_media {
                if open_media.is_some() {
                    css.push('}');
                }
                if let Some(query) = &media {
                    css.push_str(&format!("@media {}{{", query));
                }
                open_media = media;
            }
            css.push_str(&render_block(block));
        }
        if open_media.is_some() {
            css.push('}');
        }
        css
    }
}

fn render_block(block: &RuleBlock) -> String {
    let body = block
        .declarations
        .iter()
        .map(|(property, value)| {
            if value.ends_with("!important") {
                format!("{}:{}", property, value)
            } else {
                format!("{}:{} !important", property, value)
            }
        })
        .collect::<Vec<_>>()
        .join(";");
    let pseudo = block.variant.pseudo_class().unwrap_or("");
    format!(".{}{}{{{}}}", block.marker, pseudo, body)
}

fn emission_rank(variant: &Variant, screens: &[Screen]) -> (u8, usize) {
    let position = |name: &str| {
        screens
            .iter()
            .position(|screen| screen.name == name)
            .unwrap_or(screens.len())
    };
    match variant {
        Variant::State(_) => (0, 0),
        Variant::MaxScreen(name) => (1, screens.len() - position(name).min(screens.len())),
        Variant::Screen(name) => (2, position(name)),
        Variant::Dark => (3, 0),
        Variant::Print => (4, 0),
    }
}
