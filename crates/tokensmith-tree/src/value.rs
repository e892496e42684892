//! Leaf value rendering.
//!
//! Turns a [`TokenValue`] into the text that ends up on the right-hand side of
//! a declaration. Dimensions are joined with their unit and named font
//! weights become numeric weights.

use crate::model::TokenValue;

/// `$type` of leaves whose names map to numeric weights.
pub const FONT_WEIGHT_KIND: &str = "fontWeight";

/// Render a leaf value, applying kind-specific transforms.
pub fn render(value: &TokenValue, kind: Option<&str>) -> String {
    match value {
        TokenValue::Text(text) => {
            if kind == Some(FONT_WEIGHT_KIND) {
                if let Some(weight) = font_weight(text) {
                    return weight.to_string();
                }
            }
            text.clone()
        }
        TokenValue::Number(n) => format_number(*n),
        TokenValue::Dimension { value, unit } => format!("{}{unit}", format_number(*value)),
    }
}

/// Map a font weight name to its numeric weight.
pub fn font_weight(name: &str) -> Option<u16> {
    let weight = match name.to_lowercase().as_str() {
        "hairline" | "thin" => 100,
        "extra-light" | "extra light" => 200,
        "light" => 300,
        "regular" | "normal" => 400,
        "medium" => 500,
        // Semibold maps to 500, same as medium.
        "demibold" | "demi bold" | "demi-bold" | "semibold" | "semi bold" | "semi-bold" => 500,
        "bold" => 700,
        "extra-bold" | "extra bold" => 800,
        "heavy" | "black" => 900,
        _ => return None,
    };
    Some(weight)
}

/// Format a number. Integral values print without `.0`.
pub fn format_number(n: f64) -> String {
    n.to_string()
}
