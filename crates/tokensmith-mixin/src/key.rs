//! Mixin key and property name derivation.
//!
//! A mixin key is projected from a fixed, ordered subset of the token's
//! attributes. The base key is the same projection without `variant`, so a
//! hover variant `color-background-primary-hover` points back at
//! `color-background-primary`.

use tokensmith_tree::Token;

/// Attributes consulted for mixin keys, in priority order. The first entry is
/// the domain slot and may be replaced by `typography` (see [`domain`]).
pub const KEY_ATTRIBUTES: [&str; 6] = ["folder", "kind", "item", "style", "meaning", "variant"];

/// The keys a token contributes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixinKeys {
    pub mixin: String,
    pub base: String,
}

impl MixinKeys {
    pub fn is_variant(&self) -> bool {
        self.mixin != self.base
    }
}

/// Derive the mixin key and its variant-free base key.
pub fn derive_keys(token: &Token) -> MixinKeys {
    let mut parts = vec![domain(token)];
    parts.extend(KEY_ATTRIBUTES[1..].iter().map(|name| token.attr(name)));

    let base: Vec<&str> = parts[..parts.len() - 1].iter().flatten().copied().collect();
    let all: Vec<&str> = parts.iter().flatten().copied().collect();

    MixinKeys {
        mixin: kebab_join(&all),
        base: kebab_join(&base),
    }
}

/// The domain slot: usually `folder`, but text colors (`folder = color`,
/// `type = typography`) are grouped with typography.
fn domain(token: &Token) -> Option<&str> {
    match (token.attr("folder"), token.attr("type")) {
        (Some("color"), Some(kind @ "typography")) => Some(kind),
        (folder, _) => folder,
    }
}

/// Lowercase and join, collapsing every run of characters outside
/// `[a-z0-9]` into a single `-`.
pub fn kebab_join(parts: &[&str]) -> String {
    let joined = parts.join(" ").to_lowercase();
    let mut out = String::with_capacity(joined.len());
    let mut in_separator = false;
    for c in joined.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            in_separator = false;
        } else if !in_separator {
            out.push('-');
            in_separator = true;
        }
    }
    out
}

/// `fontSize` → `font-size`. A leading capital is kept as is.
pub fn camel_to_kebab(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut in_run = false;
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            if !in_run {
                out.push('-');
                in_run = true;
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// The CSS property a token declares.
///
/// An explicit `attribute` tag wins (suffixed with `value` when present).
/// Otherwise text colors become `color`, background colors
/// `background-color`, and anything else is named after its last path
/// segment.
pub fn property_name(token: &Token) -> String {
    if let Some(attribute) = token.attr("attribute") {
        return match token.attr("value") {
            Some(value) => format!("{attribute}-{value}"),
            None => attribute.to_string(),
        };
    }
    match (token.attr("folder"), token.attr("type")) {
        (Some("color"), Some("typography")) => "color".to_string(),
        (Some("color"), Some("background")) => "background-color".to_string(),
        _ => camel_to_kebab(token.name()),
    }
}
