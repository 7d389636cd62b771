use std::collections::HashMap;

use crate::types::{AuditEntry, ColorError, ContrastResult, Rgb, TokenPair};

/// Round for the stored record; pass/fail checks always use raw values.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Measure an opaque background/foreground pair. Both engines consume the
/// same parsed channels, so ratio and Lc can never drift apart.
pub fn contrast_of(bg: Rgb, fg: Rgb) -> ContrastResult {
    let ratio_raw = super::wcag::contrast_ratio(bg, fg);
    let lc_raw = super::apca::apca_contrast(bg, fg);

    ContrastResult {
        ratio: round2(ratio_raw),
        aa: ratio_raw >= super::wcag::AA_NORMAL,
        aaa: ratio_raw >= super::wcag::AAA_NORMAL,
        apca: round2(lc_raw),
        apca_level: super::apca::apca_level(lc_raw),
    }
}

/// Measure a background/foreground pair given as hex strings.
/// Fails fast with `InvalidColorFormat` if either string is malformed.
///
/// The background is treated as opaque (its alpha byte, if any, is
/// dropped); a foreground alpha byte is composited over the background
/// before measuring.
pub fn get_contrast_result(bg: &str, fg: &str) -> Result<ContrastResult, ColorError> {
    let (bg_rgb, _) = super::hex::parse_hex(bg)?;
    let (fg_rgb, fg_alpha) = super::hex::parse_hex(fg)?;

    let effective_fg = match fg_alpha {
        Some(a) => super::composite::composite_over(fg_rgb, bg_rgb, a),
        None => fg_rgb,
    };

    Ok(contrast_of(bg_rgb, effective_fg))
}

/// Pick the override bound to `var`, falling back to the pair's own value.
fn resolve<'a>(base: &'a str, var: Option<&str>, overrides: &'a HashMap<String, String>) -> &'a str {
    var.and_then(|v| overrides.get(v))
        .map(String::as_str)
        .unwrap_or(base)
}

/// Check one palette pair against a page background.
/// Resolves overrides, accepts any CSS color value, then composites:
/// a semi-transparent background over the page, a semi-transparent
/// foreground over the effective background.
pub fn check_pair(
    pair: &TokenPair,
    page_bg: Rgb,
    overrides: &HashMap<String, String>,
) -> Result<AuditEntry, ColorError> {
    let bg_value = resolve(&pair.bg, pair.bg_var.as_deref(), overrides);
    let fg_value = resolve(&pair.fg, pair.fg_var.as_deref(), overrides);

    let (bg_rgb, bg_alpha) = super::color_parse::to_rgba(bg_value)?;
    let (fg_rgb, fg_alpha) = super::color_parse::to_rgba(fg_value)?;

    let effective_bg = match bg_alpha {
        Some(a) => super::composite::composite_over(bg_rgb, page_bg, a),
        None => bg_rgb,
    };
    let effective_fg = match fg_alpha {
        Some(a) => super::composite::composite_over(fg_rgb, effective_bg, a),
        None => fg_rgb,
    };

    let ratio_raw = super::wcag::contrast_ratio(effective_bg, effective_fg);

    Ok(AuditEntry {
        name: pair.name.clone(),
        bg_hex: effective_bg.to_hex(),
        fg_hex: effective_fg.to_hex(),
        is_large_text: pair.is_large_text,
        role: pair.role,
        wcag: super::wcag::check_wcag_thresholds(ratio_raw),
        result: contrast_of(effective_bg, effective_fg),
    })
}
