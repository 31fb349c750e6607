//! Utility resolution: from a classified token to CSS declarations.
//!
//! A base utility is tried against, in order:
//!
//! 1. utilities registered by plugins (exact name match)
//! 2. arbitrary properties, `[mso-line-height-rule:exactly]`
//! 3. the static catalog, `flex`, `italic`, `truncate`
//! 4. a functional prefix on its own, `rounded`, `border`, `shadow`
//! 5. a functional prefix plus value, longest prefix first, so
//!    `border-t-red-500` is read as `border-t` + `red-500`
//!
//! A token that matches none of these resolves to no declarations. That is
//! not an error: class attributes routinely carry non-utility names.

pub(crate) mod catalog;
pub(crate) mod values;

use smallvec::SmallVec;

use crate::config::TailwindConfig;
use crate::error::Result;
use crate::parser::{ClassifiedToken, VariantTable, tokenize};
use crate::plugin::UtilityRegistry;
use crate::theme::Theme;
use crate::types::{Declaration, normalize_property};
use crate::utilities::values::{UtilityValue, normalize_arbitrary_value};

/// Declarations produced by one token. Most utilities expand to one or two.
pub type Declarations = SmallVec<[Declaration; 2]>;

/// A class token together with what it resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedToken {
    pub token: ClassifiedToken,
    pub declarations: Declarations,
}

impl ResolvedToken {
    pub fn is_resolved(&self) -> bool {
        !self.declarations.is_empty()
    }
}

/// Resolves one classified token. Every declaration carries the token's
/// variant and `!important` flag.
pub fn resolve_token(token: &ClassifiedToken, theme: &Theme, registry: &UtilityRegistry) -> Declarations {
    let mut declarations = match registry.get(&token.base) {
        Some(entries) => entries
            .iter()
            .map(|(property, value)| Declaration::new(property.as_str(), value.as_str()))
            .collect(),
        None => resolve_builtin(&token.base, theme).unwrap_or_default(),
    };

    if declarations.is_empty() {
        log::trace!("`{}` is not a utility", token.raw);
    }
    for declaration in &mut declarations {
        declaration.variant = token.variant.clone();
        declaration.important = token.important;
    }
    declarations
}

/// Resolves a base utility against the built-in catalog only.
pub(crate) fn resolve_builtin(base: &str, theme: &Theme) -> Option<Declarations> {
    if let Some(declarations) = arbitrary_property(base) {
        return Some(declarations);
    }
    if let Some(entries) = catalog::STATIC_UTILITIES.get(base) {
        return Some(
            entries
                .iter()
                .map(|(property, value)| Declaration::new(*property, *value))
                .collect(),
        );
    }
    resolve_functional(base, theme)
}

fn resolve_functional(base: &str, theme: &Theme) -> Option<Declarations> {
    let (negative, body) = match base.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, base),
    };
    let resolver = |prefix: &str| {
        catalog::functional(prefix).filter(|_| !negative || catalog::allows_negative(prefix))
    };

    if let Some(resolve) = resolver(body) {
        if let Some(declarations) = resolve(&UtilityValue::new("DEFAULT", negative, theme)) {
            return Some(declarations);
        }
    }

    // Dashes inside an arbitrary value never separate prefix from value.
    let limit = body.find('[').unwrap_or(body.len());
    for (idx, _) in body[..limit].rmatch_indices('-') {
        let (prefix, value) = (&body[..idx], &body[idx + 1..]);
        if prefix.is_empty() || value.is_empty() {
            continue;
        }
        let Some(resolve) = resolver(prefix) else {
            continue;
        };
        if let Some(declarations) = resolve(&UtilityValue::new(value, negative, theme)) {
            return Some(declarations);
        }
    }

    None
}

/// `[property:value]`
fn arbitrary_property(base: &str) -> Option<Declarations> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    let valid_property = !property.is_empty()
        && property
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-');
    if !valid_property || value.is_empty() {
        return None;
    }
    let property = normalize_property(property).into_owned();
    let mut declarations = Declarations::new();
    declarations.push(Declaration::new(property, normalize_arbitrary_value(value)));
    Some(declarations)
}

/// Resolves class attributes against one theme and utility registry.
///
/// Build one per invocation; it owns its theme and registry and is not
/// shared.
#[derive(Clone, Debug)]
pub struct UtilityCompiler {
    theme: Theme,
    registry: UtilityRegistry,
    variants: VariantTable,
}

impl Default for UtilityCompiler {
    fn default() -> Self {
        Self::new(Theme::default(), UtilityRegistry::new())
    }
}

impl UtilityCompiler {
    pub fn new(theme: Theme, registry: UtilityRegistry) -> Self {
        let variants = VariantTable::new(theme.screens());
        Self {
            theme,
            registry,
            variants,
        }
    }

    /// Resolves `config` over the default theme and runs its plugins.
    pub fn from_config(config: &TailwindConfig) -> Result<Self> {
        let (theme, registry) = Theme::resolve(config)?;
        Ok(Self::new(theme, registry))
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn registry(&self) -> &UtilityRegistry {
        &self.registry
    }

    /// Tokenizes, classifies and resolves a class attribute, keeping the
    /// order tokens were written in.
    pub fn compile(&self, class_name: &str) -> Vec<ResolvedToken> {
        tokenize(class_name)
            .iter()
            .map(|token| {
                let token = self.variants.classify(token);
                let declarations = resolve_token(&token, &self.theme, &self.registry);
                ResolvedToken {
                    token,
                    declarations,
                }
            })
            .collect()
    }
}
