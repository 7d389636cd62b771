use csscolorparser::Color;

use crate::types::{ColorError, Rgb};

/// Parse any CSS color value to RGB channels plus optional alpha.
/// Handles: hex (3/4/6/8 digit), oklch, hsl, rgb, display-p3, named colors.
/// Keyword values that name no concrete color (`transparent`, `inherit`,
/// `currentColor`, `initial`, `unset`) are `ColorError::NonConcrete`.
pub fn to_rgba(value: &str) -> Result<(Rgb, Option<f64>), ColorError> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => {
            return Err(ColorError::NonConcrete {
                value: trimmed.to_string(),
            })
        }
        _ => {}
    }

    // Hex fast path, shared with the strict boundary parser
    if trimmed.starts_with('#') {
        return super::hex::parse_hex(trimmed);
    }

    // csscolorparser for everything else (rgb, hsl, oklch, named, etc.)
    match trimmed.parse::<Color>() {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            let alpha = (a < 255).then(|| a as f64 / 255.0);
            Ok((Rgb::new(r, g, b), alpha))
        }
        Err(_) => Err(ColorError::InvalidColorFormat {
            value: trimmed.to_string(),
        }),
    }
}
