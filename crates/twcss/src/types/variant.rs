//! Variant keys: the conditions a utility can be restricted to.
//!
//! Inline styles cannot express any of these, so declarations carrying a
//! variant are always hoisted into the injected stylesheet.

use std::fmt;

use crate::types::screen::Screen;

/// Pseudo-class states recognised as variant prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateVariant {
    Hover,
    Focus,
    FocusWithin,
    FocusVisible,
    Active,
    Visited,
    First,
    Last,
    Odd,
    Even,
}

impl StateVariant {
    pub const ALL: [StateVariant; 10] = [
        StateVariant::Hover,
        StateVariant::Focus,
        StateVariant::FocusWithin,
        StateVariant::FocusVisible,
        StateVariant::Active,
        StateVariant::Visited,
        StateVariant::First,
        StateVariant::Last,
        StateVariant::Odd,
        StateVariant::Even,
    ];

    /// The class prefix, without the trailing colon.
    pub fn prefix(self) -> &'static str {
        match self {
            StateVariant::Hover => "hover",
            StateVariant::Focus => "focus",
            StateVariant::FocusWithin => "focus-within",
            StateVariant::FocusVisible => "focus-visible",
            StateVariant::Active => "active",
            StateVariant::Visited => "visited",
            StateVariant::First => "first",
            StateVariant::Last => "last",
            StateVariant::Odd => "odd",
            StateVariant::Even => "even",
        }
    }

    pub fn pseudo_class(self) -> &'static str {
        match self {
            StateVariant::Hover => ":hover",
            StateVariant::Focus => ":focus",
            StateVariant::FocusWithin => ":focus-within",
            StateVariant::FocusVisible => ":focus-visible",
            StateVariant::Active => ":active",
            StateVariant::Visited => ":visited",
            StateVariant::First => ":first-child",
            StateVariant::Last => ":last-child",
            StateVariant::Odd => ":nth-child(odd)",
            StateVariant::Even => ":nth-child(even)",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.prefix() == prefix)
    }
}

/// The condition attached to a conditional declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `{screen}:` - applies from the screen's boundary upwards.
    Screen(String),
    /// `max-{screen}:` - applies below the screen's boundary.
    MaxScreen(String),
    /// `hover:`, `focus:`, ...
    State(StateVariant),
    /// `dark:` - `prefers-color-scheme: dark`.
    Dark,
    /// `print:`
    Print,
}

impl Variant {
    /// The prefix text this variant is written with, e.g. `max-sm`.
    pub fn key(&self) -> String {
        match self {
            Variant::Screen(name) => name.clone(),
            Variant::MaxScreen(name) => format!("max-{}", name),
            Variant::State(state) => state.prefix().to_string(),
            Variant::Dark => "dark".to_string(),
            Variant::Print => "print".to_string(),
        }
    }

    /// The media query prelude (without `@media`) for this variant, if it
    /// is expressed as a media query at all.
    ///
    /// Returns `None` for state variants and for screens that are not in
    /// `screens` or cannot be inverted.
    pub fn media_query(&self, screens: &[Screen]) -> Option<String> {
        let find = |name: &str| screens.iter().find(|screen| screen.name == name);
        match self {
            Variant::Screen(name) => Some(find(name)?.media_condition()),
            Variant::MaxScreen(name) => find(name)?.below_condition(),
            Variant::State(_) => None,
            Variant::Dark => Some("(prefers-color-scheme:dark)".to_string()),
            Variant::Print => Some("print".to_string()),
        }
    }

    pub fn pseudo_class(&self) -> Option<&'static str> {
        match self {
            Variant::State(state) => Some(state.pseudo_class()),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_prefixes_round_trip() {
        for state in StateVariant::ALL {
            assert_eq!(StateVariant::from_prefix(state.prefix()), Some(state));
        }
        assert_eq!(StateVariant::from_prefix("sm"), None);
    }

    #[test]
    fn screen_variant_uses_min_width() {
        let screens = vec![Screen::min_width("sm", "640px")];
        assert_eq!(
            Variant::Screen("sm".into()).media_query(&screens).as_deref(),
            Some("(min-width:640px)")
        );
        assert_eq!(
            Variant::MaxScreen("sm".into()).media_query(&screens).as_deref(),
            Some("(max-width:639px)")
        );
        assert_eq!(Variant::Screen("md".into()).media_query(&screens), None);
    }

    #[test]
    fn state_variant_has_no_media_query() {
        let variant = Variant::State(StateVariant::Odd);
        assert_eq!(variant.media_query(&[]), None);
        assert_eq!(variant.pseudo_class(), Some(":nth-child(odd)"));
        assert_eq!(variant.key(), "odd");
    }
}
