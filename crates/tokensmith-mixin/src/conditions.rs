//! Conditional contexts: media conditions and state selectors.
//!
//! These tables are part of the generated stylesheet's contract with the
//! component library. Breakpoints reference the semantic size map emitted
//! by the variables file.

use tokensmith_tree::Token;

/// Breakpoint comparison for a `screen` attribute value.
pub fn screen_condition(screen: &str) -> Option<&'static str> {
    let condition = match screen {
        "extra small" => {
            r#"(max-width: $map.get($lovely-ui-semantic, "size", "semantic", "screen", "extra small"))"#
        }
        "small" => {
            r#"(max-width: $map.get($lovely-ui-semantic, "size", "semantic", "screen", "small"))"#
        }
        "medium" => {
            r#"(max-width: $map.get($lovely-ui-semantic, "size", "semantic", "screen", "medium"))"#
        }
        "large" => {
            r#"(min-width: $map.get($lovely-ui-semantic, "size", "semantic", "screen", "large"))"#
        }
        "extra large" => {
            r#"(min-width: $map.get($lovely-ui-semantic, "size", "semantic", "screen", "extra large"))"#
        }
        _ => return None,
    };
    Some(condition)
}

/// Color scheme preference for a `theme` attribute value.
pub fn theme_condition(theme: &str) -> Option<&'static str> {
    match theme {
        "light" => Some("(prefers-color-scheme: light)"),
        "dark" => Some("(prefers-color-scheme: dark)"),
        _ => None,
    }
}

/// Data-attribute selector for a `state` attribute value.
pub fn state_selector(state: &str) -> Option<&'static str> {
    match state {
        "hover" => Some("&[data-hovered]"),
        "focus" => Some("&[data-focus-visible]"),
        "active" => Some("&[data-active], &[data-pressed], &[data-open]"),
        "selected" => Some("&[data-selected]"),
        "disabled" => Some("&[data-disabled]"),
        "invalid" => Some("&[data-invalid]"),
        _ => None,
    }
}

/// The combined media condition of a token, without the `@media` keyword.
pub fn media_condition(token: &Token) -> Option<String> {
    let conditions: Vec<&str> = [
        token.attr("screen").and_then(screen_condition),
        token.attr("theme").and_then(theme_condition),
    ]
    .into_iter()
    .flatten()
    .collect();

    if conditions.is_empty() {
        None
    } else {
        Some(conditions.join(" and "))
    }
}

/// The state selector of a token.
pub fn selector(token: &Token) -> Option<String> {
    token
        .attr("state")
        .and_then(state_selector)
        .map(str::to_string)
}
