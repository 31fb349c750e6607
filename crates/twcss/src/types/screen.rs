use std::cmp::Ordering;

use crate::types::length::{format_number, length_in_px, parse_length};

/// A named breakpoint.
///
/// Most screens only carry a minimum width. A screen may instead carry an
/// explicit range (`min` and/or `max`) or a raw media query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub name: String,
    pub min: Option<String>,
    pub max: Option<String>,
    pub raw: Option<String>,
}

impl Screen {
    pub fn min_width(name: impl Into<String>, min: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: Some(min.into()),
            max: None,
            raw: None,
        }
    }

    pub fn range(name: impl Into<String>, min: Option<String>, max: Option<String>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            raw: None,
        }
    }

    pub fn raw(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: None,
            max: None,
            raw: Some(query.into()),
        }
    }

    /// Media condition for the `{screen}:` variant.
    pub fn media_condition(&self) -> String {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => format!("(min-width:{}) and (max-width:{})", min, max),
            (Some(min), None) => format!("(min-width:{})", min),
            (None, Some(max)) => format!("(max-width:{})", max),
            (None, None) => "all".to_string(),
        }
    }

    /// Media condition for the `max-{screen}:` variant: everything narrower
    /// than this screen's lower boundary.
    ///
    /// Pixel boundaries become a `max-width` one pixel below; other units
    /// are negated. Screens defined only by `max` use that boundary as is.
    /// Raw screens cannot be inverted.
    pub fn below_condition(&self) -> Option<String> {
        if self.raw.is_some() {
            return None;
        }
        match (&self.min, &self.max) {
            (Some(min), _) => match parse_length(min) {
                Some((number, "px")) => Some(format!("(max-width:{}px)", format_number(number - 1.0))),
                _ => Some(format!("not all and (min-width:{})", min)),
            },
            (None, Some(max)) => Some(format!("(max-width:{})", max)),
            (None, None) => None,
        }
    }

    /// Pixel value used to order screens, smallest first.
    fn sort_key(&self) -> f64 {
        self.min
            .as_deref()
            .and_then(length_in_px)
            .unwrap_or(f64::INFINITY)
    }
}

/// Default screens, ascending.
pub fn default_screens() -> Vec<Screen> {
    vec![
        Screen::min_width("sm", "640px"),
        Screen::min_width("md", "768px"),
        Screen::min_width("lg", "1024px"),
        Screen::min_width("xl", "1280px"),
        Screen::min_width("2xl", "1536px"),
    ]
}

/// Orders screens by ascending minimum width. Screens without a comparable
/// minimum keep their relative order after the others.
pub fn sort_screens(screens: &mut [Screen]) {
    screens.sort_by(|a, b| {
        a.sort_key()
            .partial_cmp(&b.sort_key())
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_min_width_across_units() {
        let mut screens = vec![
            Screen::min_width("2xl", "1536px"),
            Screen::raw("print", "print"),
            Screen::min_width("tablet", "40rem"),
            Screen::min_width("sm", "320px"),
        ];
        sort_screens(&mut screens);
        let names: Vec<_> = screens.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["sm", "tablet", "2xl", "print"]);
    }

    #[test]
    fn below_condition_for_non_pixel_units() {
        let screen = Screen::min_width("md", "48rem");
        assert_eq!(
            screen.below_condition().as_deref(),
            Some("not all and (min-width:48rem)")
        );
        assert_eq!(Screen::raw("p", "print").below_condition(), None);
    }

    #[test]
    fn range_condition() {
        let screen = Screen::range("tablet", Some("640px".into()), Some("1023px".into()));
        assert_eq!(
            screen.media_condition(),
            "(min-width:640px) and (max-width:1023px)"
        );
    }
}
