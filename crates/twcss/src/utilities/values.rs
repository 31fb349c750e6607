//! Value lookup for functional utilities.
//!
//! A functional utility such as `mt-4`, `bg-red-500/50` or
//! `w-[calc(50px+3rem)]` is split into a prefix and a value. The value is
//! resolved here: against the theme, as a fraction or keyword, or as an
//! arbitrary bracketed literal.

use phf::phf_set;

use crate::theme::{self, Theme};
use crate::types::length::{format_number, parse_length};

/// Named colors accepted as untyped arbitrary values (`bg-[tomato]`).
static NAMED_COLORS: phf::Set<&'static str> = phf_set! {
    "black", "white", "red", "green", "blue", "yellow", "orange", "purple",
    "pink", "gray", "grey", "silver", "maroon", "navy", "teal", "olive",
    "lime", "aqua", "fuchsia", "tomato", "gold", "coral", "salmon",
    "transparent", "currentcolor", "inherit",
};

/// A bracketed literal with its optional type hint removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Arbitrary {
    pub hint: Option<String>,
    pub value: String,
}

impl Arbitrary {
    pub fn is_color(&self) -> bool {
        match self.hint.as_deref() {
            Some("color") => true,
            Some(_) => false,
            None => is_color_like(&self.value),
        }
    }

    pub fn is_length(&self) -> bool {
        match self.hint.as_deref() {
            Some("length") | Some("percentage") => true,
            Some(_) => false,
            None => is_length_like(&self.value),
        }
    }

    pub fn is_image(&self) -> bool {
        match self.hint.as_deref() {
            Some("url") | Some("image") => true,
            Some(_) => false,
            None => {
                let lower = self.value.to_ascii_lowercase();
                lower.starts_with("url(") || lower.contains("gradient(")
            }
        }
    }
}

/// The value part of a functional utility.
pub(crate) struct UtilityValue<'a> {
    /// Text after `prefix-`, or `DEFAULT` for a bare prefix.
    pub raw: &'a str,
    pub negative: bool,
    pub theme: &'a Theme,
}

impl<'a> UtilityValue<'a> {
    pub fn new(raw: &'a str, negative: bool, theme: &'a Theme) -> Self {
        Self { raw, negative, theme }
    }

    pub fn is_default(&self) -> bool {
        self.raw == "DEFAULT"
    }

    pub fn arbitrary(&self) -> Option<Arbitrary> {
        parse_arbitrary(self.raw)
    }

    /// Theme lookup in `category`, or an arbitrary literal that is not a
    /// color. Negated when the utility was written with a leading `-`.
    pub fn lookup(&self, category: &str) -> Option<String> {
        let value = match self.arbitrary() {
            Some(arbitrary) if arbitrary.is_color() || arbitrary.is_image() => return None,
            Some(arbitrary) => arbitrary.value,
            None => self.theme.get(category, self.raw)?.to_string(),
        };
        Some(self.signed(value))
    }

    pub fn spacing(&self) -> Option<String> {
        self.lookup(theme::SPACING)
    }

    /// Spacing, fractions and the sizing keywords shared by width, height
    /// and inset utilities.
    pub fn size(&self, viewport: &str) -> Option<String> {
        let keyword = match self.raw {
            "auto" => Some("auto"),
            "full" => Some("100%"),
            "screen" => Some(viewport),
            "min" => Some("min-content"),
            "max" => Some("max-content"),
            "fit" => Some("fit-content"),
            _ => None,
        };
        if let Some(keyword) = keyword {
            return Some(self.signed(keyword.to_string()));
        }
        if let Some(percent) = fraction(self.raw) {
            return Some(self.signed(percent));
        }
        self.spacing()
    }

    /// A color from the theme or an arbitrary literal, with an optional
    /// `/opacity` modifier applied.
    pub fn color(&self) -> Option<String> {
        let (name, modifier) = split_modifier(self.raw);
        let color = match parse_arbitrary(name) {
            Some(arbitrary) if arbitrary.is_color() => arbitrary.value,
            Some(_) => return None,
            None => self.theme.get(theme::COLORS, name)?.to_string(),
        };
        match modifier {
            Some(modifier) => {
                let alpha = self.alpha(modifier)?;
                Some(with_alpha(&color, alpha))
            }
            None => Some(color),
        }
    }

    /// Resolves an opacity modifier: `50`, `[.35]` or a theme key.
    fn alpha(&self, modifier: &str) -> Option<f64> {
        if let Some(arbitrary) = parse_arbitrary(modifier) {
            return parse_alpha(&arbitrary.value);
        }
        if let Some(value) = self.theme.get(theme::OPACITY, modifier) {
            return value.parse().ok();
        }
        modifier.parse::<f64>().ok().map(|percent| percent / 100.0)
    }

    pub fn signed(&self, value: String) -> String {
        if self.negative { negate(&value) } else { value }
    }
}

/// Parses `[hint:value]`, normalizing the value.
pub(crate) fn parse_arbitrary(raw: &str) -> Option<Arbitrary> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return None;
    }

    let (hint, value) = match inner.split_once(':') {
        Some((hint, value))
            if !hint.is_empty() && hint.chars().all(|ch| ch.is_ascii_lowercase() || ch == '-') =>
        {
            (Some(hint.to_string()), value)
        }
        _ => (None, inner),
    };

    Some(Arbitrary {
        hint,
        value: normalize_arbitrary_value(value),
    })
}

/// Splits `name/modifier` at the last `/` outside brackets.
pub(crate) fn split_modifier(raw: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    let mut split = None;
    for (idx, ch) in raw.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => split = Some(idx),
            _ => {}
        }
    }
    match split {
        Some(idx) if idx > 0 && idx + 1 < raw.len() => (&raw[..idx], Some(&raw[idx + 1..])),
        _ => (raw, None),
    }
}

/// `1/2` as `50%`.
pub(crate) fn fraction(raw: &str) -> Option<String> {
    let (numerator, denominator) = raw.split_once('/')?;
    let numerator: u32 = numerator.parse().ok()?;
    let denominator: u32 = denominator.parse().ok()?;
    if denominator == 0 {
        return None;
    }
    let percent = f64::from(numerator) / f64::from(denominator) * 100.0;
    Some(format!("{}%", format_number(percent)))
}

/// Prefixes a value with `-`, or wraps it in `calc(... * -1)` when it does
/// not start with a number.
pub(crate) fn negate(value: &str) -> String {
    if let Some(positive) = value.strip_prefix('-') {
        return positive.to_string();
    }
    if parse_length(value).is_some() {
        format!("-{}", value)
    } else {
        format!("calc({} * -1)", value)
    }
}

/// Underscores become spaces (except inside `url(...)`), `\_` is a literal
/// underscore, and `calc()` operators get the spaces CSS requires.
pub(crate) fn normalize_arbitrary_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();
    let mut depth = 0usize;
    let mut url_depth: Option<usize> = None;
    let mut quote: Option<char> = None;

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' if matches!(chars.peek(), Some((_, '_'))) => {
                chars.next();
                out.push('_');
                continue;
            }
            '\'' | '"' if quote.is_none() => quote = Some(ch),
            _ if quote == Some(ch) => quote = None,
            '(' if quote.is_none() => {
                depth += 1;
                if url_depth.is_none() && raw[..idx].to_ascii_lowercase().ends_with("url") {
                    url_depth = Some(depth);
                }
            }
            ')' if quote.is_none() => {
                if url_depth == Some(depth) {
                    url_depth = None;
                }
                depth = depth.saturating_sub(1);
            }
            '_' if url_depth.is_none() => {
                out.push(' ');
                continue;
            }
            _ => {}
        }
        out.push(ch);
    }

    space_calc_operators(&out)
}

/// `calc(50px+3rem)` becomes `calc(50px + 3rem)`. A `-` that follows an
/// opening paren or another operator is a sign and is left alone.
pub(crate) fn space_calc_operators(value: &str) -> String {
    if !value.to_ascii_lowercase().starts_with("calc(") {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 8);
    let mut previous: Option<char> = None;
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        let is_operator = matches!(ch, '+' | '-' | '*' | '/');
        let is_sign = ch == '-' && previous.is_none_or(|prev| matches!(prev, '(' | '+' | '-' | '*' | '/' | ','));
        // `-` inside identifiers such as `var(--gap)` stays attached; a
        // number with a unit (`100vh`) is not an identifier.
        let in_word = ch == '-'
            && word_is_identifier(&out)
            && chars.peek().is_some_and(|next| next.is_ascii_alphabetic() || *next == '-');

        if !is_operator || is_sign || in_word {
            out.push(ch);
            if !ch.is_whitespace() {
                previous = Some(ch);
            }
            continue;
        }

        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out.push(' ');
        out.push(ch);
        out.push(' ');
        while chars.peek().is_some_and(|next| next.is_whitespace()) {
            chars.next();
        }
        previous = Some(ch);
    }

    out
}

/// Whether the run of word characters at the end of `out` is an identifier
/// rather than a number such as `100vh`.
fn word_is_identifier(out: &str) -> bool {
    out.chars()
        .rev()
        .take_while(|ch| ch.is_ascii_alphanumeric() || matches!(*ch, '-' | '.' | '%'))
        .last()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '-')
}

pub(crate) fn is_color_like(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    value.starts_with('#')
        || [
            "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(",
            "color(", "color-mix(",
        ]
        .iter()
        .any(|function| lower.starts_with(function))
        || NAMED_COLORS.contains(lower.as_str())
}

pub(crate) fn is_length_like(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    parse_length(value).is_some()
        || ["calc(", "min(", "max(", "clamp("]
            .iter()
            .any(|function| lower.starts_with(function))
}

fn parse_alpha(value: &str) -> Option<f64> {
    match value.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok().map(|p| p / 100.0),
        None => value.parse().ok(),
    }
}

/// Applies an alpha channel: hex colors become `rgb(r g b / a)`, anything
/// else is mixed with `transparent`.
pub(crate) fn with_alpha(color: &str, alpha: f64) -> String {
    match hex_to_rgb(color) {
        Some((r, g, b)) => format!("rgb({} {} {} / {})", r, g, b, format_number(alpha)),
        None => format!(
            "color-mix(in srgb, {} {}%, transparent)",
            color,
            format_number(alpha * 100.0)
        ),
    }
}

fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&expanded[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
