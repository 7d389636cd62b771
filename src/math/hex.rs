use crate::types::{ColorError, Rgb};

/// Alpha at or above this is treated as fully opaque and dropped.
const OPAQUE_CUTOFF: f64 = 0.999;

/// Parse a hex color string to RGB channels plus optional alpha.
/// Accepts 3/6-digit RGB and 4/8-digit RGBA, case-insensitive, leading
/// `#` optional. Shorthand digits are doubled (`#abc` -> `#aabbcc`).
/// Malformed input is an error, never a silent black fallback.
pub fn parse_hex(input: &str) -> Result<(Rgb, Option<f64>), ColorError> {
    let raw = input.strip_prefix('#').unwrap_or(input);
    let invalid = || ColorError::InvalidColorFormat {
        value: input.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String;
    let digits = match raw.len() {
        3 | 4 => {
            expanded = raw.chars().flat_map(|c| [c, c]).collect();
            expanded.as_str()
        }
        6 | 8 => raw,
        _ => return Err(invalid()),
    };

    let byte = |i: usize| u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).map_err(|_| invalid());

    let rgb = Rgb::new(byte(0)?, byte(1)?, byte(2)?);
    let alpha = if digits.len() == 8 {
        let a = byte(3)? as f64 / 255.0;
        (a < OPAQUE_CUTOFF).then_some(a)
    } else {
        None
    };

    Ok((rgb, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex("#ff0000"), Ok((Rgb::new(255, 0, 0), None)));
        assert_eq!(parse_hex("#00ff00"), Ok((Rgb::new(0, 255, 0), None)));
        assert_eq!(parse_hex("#1e293b"), Ok((Rgb::new(30, 41, 59), None)));
    }

    #[test]
    fn parse_3digit_shorthand() {
        assert_eq!(parse_hex("#abc"), Ok((Rgb::new(0xaa, 0xbb, 0xcc), None)));
        assert_eq!(parse_hex("#f00"), Ok((Rgb::new(255, 0, 0), None)));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(parse_hex("1e293b"), Ok((Rgb::new(30, 41, 59), None)));
        assert_eq!(parse_hex("abc"), Ok((Rgb::new(0xaa, 0xbb, 0xcc), None)));
    }

    #[test]
    fn parse_uppercase() {
        assert_eq!(parse_hex("#AABBCC"), Ok((Rgb::new(0xaa, 0xbb, 0xcc), None)));
        assert_eq!(parse_hex("#ABC"), Ok((Rgb::new(0xaa, 0xbb, 0xcc), None)));
    }

    #[test]
    fn parse_8digit_alpha() {
        let (rgb, alpha) = parse_hex("#ff000080").unwrap();
        assert_eq!(rgb, Rgb::new(255, 0, 0));
        let a = alpha.unwrap();
        assert!((a - 0.502).abs() < 0.01, "got {a}"); // 128/255 ~ 0.502
    }

    #[test]
    fn parse_4digit_alpha_shorthand() {
        // #f008 -> #ff000088
        let (rgb, alpha) = parse_hex("#f008").unwrap();
        assert_eq!(rgb, Rgb::new(255, 0, 0));
        let a = alpha.unwrap();
        assert!((a - 0.533).abs() < 0.01, "got {a}"); // 136/255 ~ 0.533
    }

    #[test]
    fn fully_opaque_alpha_dropped() {
        assert_eq!(parse_hex("#ff0000ff"), Ok((Rgb::new(255, 0, 0), None)));
    }

    #[test]
    fn malformed_is_error() {
        for bad in ["not-a-color", "#xyz", "#12345", "#1234567", "", "#", "#ggg"] {
            let err = parse_hex(bad).unwrap_err();
            assert!(
                matches!(err, ColorError::InvalidColorFormat { .. }),
                "expected InvalidColorFormat for {bad:?}"
            );
        }
    }

    #[test]
    fn error_carries_original_input() {
        let err = parse_hex("#zz0000").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorFormat {
                value: "#zz0000".to_string()
            }
        );
    }
}
