//! Inline style maps.
//!
//! A [`StyleMap`] is the property/value mapping attached to a node's `style`
//! attribute. Entries keep their insertion order and the spelling the author
//! used; lookups treat `backgroundColor` and `background-color` as the same
//! property.

use std::borrow::Cow;

use crate::error::Result;
use crate::parser::declarations::parse_declaration_list;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `style` attribute such as `color: red; font-size: 12px`.
    pub fn parse(source: &str) -> Result<Self> {
        Ok(parse_declaration_list(source)?.into_iter().collect())
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.position(property).map(|idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.position(property).is_some()
    }

    /// Sets a property. An existing entry for the same property keeps its
    /// position and spelling and takes the new value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.position(&property) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Like [`insert`](Self::insert), but an existing entry also takes the
    /// new spelling of the property name.
    pub fn replace(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.position(&property) {
            Some(idx) => self.entries[idx] = (property, value),
            None => self.entries.push((property, value)),
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.position(property)
            .map(|idx| self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes to `style` attribute text with kebab-case property names.
    pub fn to_inline_css(&self) -> String {
        self.entries
            .iter()
            .map(|(property, value)| format!("{}:{}", normalize_property(property), value))
            .collect::<Vec<_>>()
            .join(";")
    }

    fn position(&self, property: &str) -> Option<usize> {
        let wanted = normalize_property(property);
        self.entries
            .iter()
            .position(|(existing, _)| normalize_property(existing) == wanted)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (property, value) in iter {
            map.insert(property, value);
        }
        map
    }
}

/// Converts a camelCase property name (`backgroundColor`, `WebkitTextSizeAdjust`,
/// `msoLineHeightRule`) into its CSS spelling. Kebab-case names and custom
/// properties are returned unchanged.
pub fn normalize_property(property: &str) -> Cow<'_, str> {
    if property.starts_with("--") || !property.chars().any(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(property);
    }

    let mut out = String::with_capacity(property.len() + 4);
    for (idx, ch) in property.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            if idx == 0 && property.starts_with("ms") && !property.starts_with("mso") {
                out.push('-');
            }
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_camel_case() {
        assert_eq!(normalize_property("backgroundColor"), "background-color");
        assert_eq!(normalize_property("WebkitTextSizeAdjust"), "-webkit-text-size-adjust");
        assert_eq!(normalize_property("msTransform"), "-ms-transform");
        assert_eq!(normalize_property("msoLineHeightRule"), "mso-line-height-rule");
        assert_eq!(normalize_property("font-size"), "font-size");
        assert_eq!(normalize_property("--brandColor"), "--brandColor");
    }

    #[test]
    fn insert_keeps_author_spelling() {
        let mut style = StyleMap::new();
        style.insert("backgroundColor", "red");
        style.insert("background-color", "blue");
        assert_eq!(style.len(), 1);
        assert_eq!(style.iter().next(), Some(("backgroundColor", "blue")));
        assert_eq!(style.to_inline_css(), "background-color:blue");
    }

    #[test]
    fn remove_matches_either_spelling() {
        let mut style: StyleMap = [("fontSize", "12px"), ("color", "red")].into_iter().collect();
        assert_eq!(style.remove("font-size").as_deref(), Some("12px"));
        assert_eq!(style.len(), 1);
    }
}
