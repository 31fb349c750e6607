//! Merging resolved declarations into a node's inline style.

use twcss::{Declaration, StyleMap};

/// Combines a node's own `style` with the unconditional declarations its
/// classes resolved to.
///
/// Resolved declarations come first, in class order; a later class wins
/// over an earlier one for the same property. Every property the author
/// set keeps the author's value and spelling. Author properties no class
/// touched follow in their original order. Conditional declarations are
/// ignored.
pub fn merge_inline_styles(existing: &StyleMap, declarations: &[Declaration]) -> StyleMap {
    let mut merged = StyleMap::new();
    for declaration in declarations.iter().filter(|d| !d.is_conditional()) {
        merged.insert(declaration.property.as_str(), declaration.inline_value());
    }
    for (property, value) in existing.iter() {
        merged.replace(property, value);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use twcss::Variant;

    #[test]
    fn author_values_win() {
        let existing: StyleMap = [("backgroundColor", "red")].into_iter().collect();
        let resolved = [
            Declaration::new("background-color", "#000"),
            Declaration::new("padding", "1rem"),
        ];
        let merged = merge_inline_styles(&existing, &resolved);

        assert_eq!(merged.to_inline_css(), "background-color:red;padding:1rem");
        assert_eq!(merged.iter().next(), Some(("backgroundColor", "red")));
    }

    #[test]
    fn later_classes_win_and_conditionals_are_skipped() {
        let resolved = [
            Declaration::new("color", "#111"),
            Declaration::new("color", "#222"),
            Declaration::new("color", "#333").with_variant(Some(Variant::Dark)),
        ];
        let merged = merge_inline_styles(&StyleMap::new(), &resolved);
        assert_eq!(merged.to_inline_css(), "color:#222");
    }

    #[test]
    fn untouched_author_properties_are_appended() {
        let existing = StyleMap::parse("font-family: Georgia; color: blue").unwrap();
        let merged = merge_inline_styles(&existing, &[Declaration::new("color", "#fff")]);
        assert_eq!(merged.to_inline_css(), "color:blue;font-family:Georgia");
    }

    #[test]
    fn important_modifier_reaches_the_inline_value() {
        let resolved = [Declaration::new("padding", "0").with_important(true)];
        let merged = merge_inline_styles(&StyleMap::new(), &resolved);
        assert_eq!(merged.get("padding"), Some("0 !important"));
    }
}
