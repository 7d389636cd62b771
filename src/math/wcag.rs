use serde::Serialize;

use crate::types::Rgb;

/// WCAG 2.1 minimum contrast (SC 1.4.3 / 1.4.6) thresholds.
pub const AA_NORMAL: f64 = 4.5;
pub const AA_LARGE: f64 = 3.0;
pub const AAA_NORMAL: f64 = 7.0;
pub const AAA_LARGE: f64 = 4.5;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.04045: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(c: Rgb) -> f64 {
    0.2126 * srgb_to_linear(c.r) + 0.7152 * srgb_to_linear(c.g) + 0.0722 * srgb_to_linear(c.b)
}

/// Calculate WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(c1: Rgb, c2: Rgb) -> f64 {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Determine pass/fail against all four WCAG thresholds. Each field means
/// exactly its named threshold; the caller picks which one applies to its
/// text size or role.
pub fn check_wcag_thresholds(ratio: f64) -> WcagThresholds {
    WcagThresholds {
        pass_aa: ratio >= AA_NORMAL,
        pass_aa_large: ratio >= AA_LARGE,
        pass_aaa: ratio >= AAA_NORMAL,
        pass_aaa_large: ratio >= AAA_LARGE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagThresholds {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(BLACK, WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn white_on_white_is_1() {
        let ratio = contrast_ratio(WHITE, WHITE);
        assert!((ratio - 1.0).abs() < 0.01);
    }

    #[test]
    fn gray_on_white() {
        // colord: 4.54
        let ratio = contrast_ratio(Rgb::new(0x76, 0x76, 0x76), WHITE);
        assert!((ratio - 4.54).abs() < 0.1);
    }

    #[test]
    fn order_independent() {
        let red = Rgb::new(255, 0, 0);
        let r1 = contrast_ratio(red, WHITE);
        let r2 = contrast_ratio(WHITE, red);
        assert!((r1 - r2).abs() < 0.001);
    }

    #[test]
    fn red_on_white() {
        // colord: 3.99
        let ratio = contrast_ratio(Rgb::new(255, 0, 0), WHITE);
        assert!((ratio - 3.99).abs() < 0.1);
    }

    #[test]
    fn slate_on_white() {
        // colord: 14.62
        let ratio = contrast_ratio(Rgb::new(0x1e, 0x29, 0x3b), WHITE);
        assert!((ratio - 14.62).abs() < 0.1);
    }

    #[test]
    fn zinc_950_on_white() {
        // colord: 19.89
        let ratio = contrast_ratio(Rgb::new(0x09, 0x09, 0x0b), WHITE);
        assert!((ratio - 19.89).abs() < 0.1);
    }

    #[test]
    fn zinc_400_on_zinc_950() {
        // colord: 7.76
        let ratio = contrast_ratio(Rgb::new(0xa1, 0xa1, 0xaa), Rgb::new(0x09, 0x09, 0x0b));
        assert!((ratio - 7.76).abs() < 0.1);
    }

    #[test]
    fn luminance_extremes() {
        assert!(relative_luminance(BLACK).abs() < 1e-9);
        assert!((relative_luminance(WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn aa_boundary_is_inclusive() {
        assert!(check_wcag_thresholds(4.5).pass_aa);
        assert!(!check_wcag_thresholds(4.49999).pass_aa);
    }

    #[test]
    fn aa_normal_requires_4_5() {
        let t = check_wcag_thresholds(4.5);
        assert!(t.pass_aa);
        assert!(!t.pass_aaa);
        assert!(t.pass_aaa_large); // AAA large = 4.5:1
    }

    #[test]
    fn aa_large_requires_3() {
        let t = check_wcag_thresholds(3.0);
        assert!(t.pass_aa_large);
        assert!(!t.pass_aa);
        assert!(!t.pass_aaa_large);
    }

    #[test]
    fn aaa_normal_requires_7() {
        let t = check_wcag_thresholds(7.0);
        assert!(t.pass_aa);
        assert!(t.pass_aaa);
    }
}
