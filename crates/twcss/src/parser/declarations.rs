//! CSS declaration blocks.
//!
//! Two inputs go through this parser:
//!
//! - author `style` attributes (`color: red; font-size: 12px`)
//! - utility rules handed to the plugin API (`.border-custom { border: 2px solid; }`)
//!
//! Values are taken verbatim up to the next `;` or `}` that is not nested
//! inside parentheses or quotes, so `url(data:image/png;base64,...)` stays
//! in one piece.

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::opt,
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{delimited, preceded, tuple},
};

use crate::error::{ConfigError, Result};

/// A class rule registered by a plugin, e.g. `.border-custom { border: 2px solid }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtilityRule {
    /// Class name without the leading `.` and with escapes removed.
    pub name: String,
    pub declarations: Vec<(String, String)>,
}

/// Parses a property name (`color`, `-webkit-text-size-adjust`, `--brand`).
pub fn parse_property_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Takes a raw value up to the terminating `;` or `}` at nesting depth zero.
pub fn parse_value(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut end = input.len();

    for (idx, ch) in input.char_indices() {
        match quote {
            Some(open) => {
                if ch == open {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' => quote = Some(ch),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ';' | '}' if depth == 0 => {
                    end = idx;
                    break;
                }
                _ => {}
            },
        }
    }

    let value = input[..end].trim();
    if value.is_empty() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::TakeWhile1)));
    }
    Ok((&input[end..], value))
}

/// Parses a single `property: value;` pair. The trailing `;` is optional.
pub fn parse_declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = multispace0(input)?;
    let (input, property) = parse_property_name(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = parse_value(input)?;
    let (input, _) = tuple((multispace0, opt(char(';')), multispace0))(input)?;
    Ok((input, (property, value)))
}

/// Parses a `.class-name` selector, unescaping `\:`-style escapes.
fn parse_class_selector(input: &str) -> IResult<&str, String> {
    let (input, _) = preceded(multispace0, char('.'))(input)?;

    let mut name = String::new();
    let mut escaped = false;
    let mut end = input.len();
    for (idx, ch) in input.char_indices() {
        if escaped {
            name.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            c if c.is_whitespace() || c == '{' || c == ',' => {
                end = idx;
                break;
            }
            c => name.push(c),
        }
    }

    if name.is_empty() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::TakeWhile1)));
    }
    Ok((&input[end..], name))
}

/// Parses one utility rule: a class selector followed by a declaration block.
pub fn parse_utility_rule(input: &str) -> IResult<&str, UtilityRule> {
    let (input, name) = parse_class_selector(input)?;
    let (input, declarations) = delimited(
        preceded(multispace0, char('{')),
        many0(parse_declaration),
        preceded(multispace0, char('}')),
    )(input)?;
    let (input, _) = multispace0(input)?;

    Ok((
        input,
        UtilityRule {
            name,
            declarations: declarations
                .into_iter()
                .map(|(property, value)| (property.to_string(), value.to_string()))
                .collect(),
        },
    ))
}

/// Parses a semicolon separated declaration list, such as a `style` attribute.
pub fn parse_declaration_list(source: &str) -> Result<Vec<(String, String)>> {
    let clean = strip_comments(source);
    let (remaining, declarations) =
        many0(parse_declaration)(&clean).map_err(|e| ConfigError::InvalidCss(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(ConfigError::InvalidCss(format!(
            "Unexpected tokens in declaration list: {}",
            remaining.trim()
        )));
    }

    Ok(declarations
        .into_iter()
        .map(|(property, value)| (property.to_string(), value.to_string()))
        .collect())
}

/// Parses a sequence of utility rules.
pub fn parse_utility_rules(source: &str) -> Result<Vec<UtilityRule>> {
    let clean = strip_comments(source);
    let (remaining, rules) =
        many0(parse_utility_rule)(&clean).map_err(|e| ConfigError::InvalidCss(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(ConfigError::InvalidCss(format!(
            "Unexpected tokens at end of utilities: {}",
            remaining.trim()
        )));
    }

    Ok(rules)
}

/// Removes `/* ... */` block comments.
fn strip_comments(source: &str) -> String {
    let mut clean = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
            continue;
        }
        clean.push(c);
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_keeps_nested_semicolons() {
        let (rest, value) = parse_value("url(data:image/png;base64,AA); color: red").unwrap();
        assert_eq!(value, "url(data:image/png;base64,AA)");
        assert_eq!(rest, "; color: red");
    }

    #[test]
    fn selector_unescapes() {
        let (rest, name) = parse_class_selector(".sm\\:card {").unwrap();
        assert_eq!(name, "sm:card");
        assert_eq!(rest, " {");
    }

    #[test]
    fn comments_are_stripped() {
        let decls = parse_declaration_list("/* author */ color: red").unwrap();
        assert_eq!(decls, vec![("color".to_string(), "red".to_string())]);
    }
}
