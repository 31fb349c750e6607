//! Variant classification.
//!
//! Splits a token such as `max-sm:text-red-600` into its variant key and the
//! base utility. Candidate prefixes are built from the resolved screens plus
//! the fixed state variants and tried longest first, so a custom screen named
//! `tablet-lg` wins over `tablet`. A prefix that matches nothing is left in
//! place and the whole token is treated as the base.

use crate::parser::tokens::UtilityToken;
use crate::types::{Screen, StateVariant, Variant};

/// A token split into variant, importance and base utility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub raw: String,
    pub variant: Option<Variant>,
    /// Base utility without variant prefix or `!` modifier.
    pub base: String,
    pub important: bool,
    /// Text of a trailing `[...]` group on the base, if any.
    pub payload: Option<String>,
}

/// Prefix table for one theme. Build it once per invocation and reuse it for
/// every token.
#[derive(Clone, Debug)]
pub struct VariantTable {
    prefixes: Vec<(String, Variant)>,
}

impl VariantTable {
    pub fn new(screens: &[Screen]) -> Self {
        let mut prefixes = Vec::new();
        for screen in screens {
            prefixes.push((format!("{}:", screen.name), Variant::Screen(screen.name.clone())));
            if screen.below_condition().is_some() {
                prefixes.push((
                    format!("max-{}:", screen.name),
                    Variant::MaxScreen(screen.name.clone()),
                ));
            }
        }
        for state in StateVariant::ALL {
            prefixes.push((format!("{}:", state.prefix()), Variant::State(state)));
        }
        prefixes.push(("dark:".to_string(), Variant::Dark));
        prefixes.push(("print:".to_string(), Variant::Print));

        // Stable: on equal length, screens registered first keep priority.
        prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { prefixes }
    }

    pub fn classify(&self, token: &UtilityToken) -> ClassifiedToken {
        let raw = token.raw.as_str();
        let (variant, rest) = self
            .prefixes
            .iter()
            .find_map(|(prefix, variant)| {
                raw.strip_prefix(prefix.as_str())
                    .map(|rest| (Some(variant.clone()), rest))
            })
            .unwrap_or((None, raw));

        let (important, base) = match rest.strip_prefix('!') {
            Some(base) => (true, base),
            None => (false, rest),
        };

        let payload = UtilityToken::new(base)
            .arbitrary_payload()
            .map(str::to_string);

        ClassifiedToken {
            raw: token.raw.clone(),
            variant,
            base: base.to_string(),
            important,
            payload,
        }
    }
}

/// Classifies a single token against `screens`.
///
/// Prefer [`VariantTable`] when classifying many tokens.
pub fn classify(token: &UtilityToken, screens: &[Screen]) -> ClassifiedToken {
    VariantTable::new(screens).classify(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::default_screens;

    fn classify_str(raw: &str) -> ClassifiedToken {
        classify(&UtilityToken::new(raw), &default_screens())
    }

    #[test]
    fn screen_prefix() {
        let token = classify_str("sm:bg-red-300");
        assert_eq!(token.variant, Some(Variant::Screen("sm".into())));
        assert_eq!(token.base, "bg-red-300");
    }

    #[test]
    fn max_screen_prefix() {
        let token = classify_str("max-sm:text-red-600");
        assert_eq!(token.variant, Some(Variant::MaxScreen("sm".into())));
        assert_eq!(token.base, "text-red-600");
    }

    #[test]
    fn two_xl_is_not_confused_with_xl() {
        let token = classify_str("2xl:bg-blue-500");
        assert_eq!(token.variant, Some(Variant::Screen("2xl".into())));
    }

    #[test]
    fn unknown_prefix_stays_in_base() {
        let token = classify_str("group-hover:underline");
        assert_eq!(token.variant, None);
        assert_eq!(token.base, "group-hover:underline");
    }

    #[test]
    fn max_utility_without_colon_is_not_a_variant() {
        let token = classify_str("max-h-[calc(50px+3rem)]");
        assert_eq!(token.variant, None);
        assert_eq!(token.payload.as_deref(), Some("calc(50px+3rem)"));
    }

    #[test]
    fn important_after_variant() {
        let token = classify_str("hover:!underline");
        assert_eq!(token.variant, Some(Variant::State(StateVariant::Hover)));
        assert!(token.important);
        assert_eq!(token.base, "underline");
    }

    #[test]
    fn longest_custom_screen_wins() {
        let screens = vec![
            Screen::min_width("tablet", "640px"),
            Screen::min_width("tablet-lg", "900px"),
        ];
        let token = classify(&UtilityToken::new("tablet-lg:p-4"), &screens);
        assert_eq!(token.variant, Some(Variant::Screen("tablet-lg".into())));
        assert_eq!(token.base, "p-4");
    }
}
