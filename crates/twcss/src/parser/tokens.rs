//! Class attribute tokenization.
//!
//! A class attribute is split on whitespace, except that whitespace nested
//! inside `[...]` or `(...)` belongs to the surrounding token:
//!
//! ```rust
//! use twcss::parser::tokenize;
//!
//! let tokens = tokenize("p-2 w-[calc(100% - 2rem)] lg:max-h-[calc(50px+5rem)]");
//! let raw: Vec<_> = tokens.iter().map(|t| t.raw.as_str()).collect();
//! assert_eq!(raw, ["p-2", "w-[calc(100% - 2rem)]", "lg:max-h-[calc(50px+5rem)]"]);
//! ```

/// One class-name token as written in the attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UtilityToken {
    pub raw: String,
    /// `false` when the brackets in `raw` do not pair up. Such tokens are
    /// passed on opaquely and usually fail to resolve.
    pub balanced: bool,
}

impl UtilityToken {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let balanced = brackets_balanced(&raw);
        Self { raw, balanced }
    }

    /// The text inside the trailing `[...]` group, if the token ends with one.
    pub fn arbitrary_payload(&self) -> Option<&str> {
        if !self.balanced {
            return None;
        }
        let inner = self.raw.strip_suffix(']')?;
        let open = matching_open_bracket(inner)?;
        Some(&inner[open + 1..])
    }
}

/// Splits a class attribute into tokens, keeping document order.
pub fn tokenize(class_name: &str) -> Vec<UtilityToken> {
    let mut tokens = Vec::new();
    let mut rest = class_name.trim_start();

    while !rest.is_empty() {
        let end = match token_end(rest) {
            Some(end) => end,
            // Brackets never closed: the token is opaque up to the next space.
            None => rest.find(char::is_whitespace).unwrap_or(rest.len()),
        };
        tokens.push(UtilityToken::new(&rest[..end]));
        rest = rest[end..].trim_start();
    }

    tokens
}

/// Byte offset of the first whitespace at nesting depth zero, or the end
/// of input. `None` if the input ends while brackets are still open.
fn token_end(input: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in input.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return Some(idx),
            _ => {}
        }
    }
    if depth == 0 { Some(input.len()) } else { None }
}

fn brackets_balanced(raw: &str) -> bool {
    let mut stack = Vec::new();
    for ch in raw.chars() {
        match ch {
            '[' | '(' => stack.push(ch),
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Index of the `[` matching an implicit `]` at the end of `inner`.
fn matching_open_bracket(inner: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in inner.char_indices().rev() {
        match ch {
            ']' => depth += 1,
            '[' if depth == 0 => return Some(idx),
            '[' => depth -= 1,
            _ => {}
        }
    }
    None
}
