use crate::types::{ApcaLevel, Rgb};

// Constants from the apca-w3 0.1.9 SA98G table.
const MAIN_TRC: f64 = 2.4;
const S_RCO: f64 = 0.2126729;
const S_GCO: f64 = 0.7151522;
const S_BCO: f64 = 0.0721750;

const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_BG: f64 = 0.65;
const REV_TXT: f64 = 0.62;

const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;

const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_BOW_OFFSET: f64 = 0.027;
const LO_WOB_OFFSET: f64 = 0.027;
const DELTA_Y_MIN: f64 = 0.0005;
const LO_CLIP: f64 = 0.1;

/// Minimum |Lc| for a body-text-grade pass ("AAA" bucket).
pub const LC_AAA: f64 = 75.0;
/// Minimum |Lc| for content text, buttons, large text ("AA" bucket).
pub const LC_AA: f64 = 60.0;
/// Minimum |Lc| for headline/large-text-only legibility ("AA Large" bucket).
pub const LC_AA_LARGE: f64 = 45.0;

/// APCA screen luminance Y: simple power curve with the SA98G
/// coefficients, NOT the WCAG piecewise function.
fn screen_luminance(c: Rgb) -> f64 {
    let linearize = |channel: u8| -> f64 { (channel as f64 / 255.0).powf(MAIN_TRC) };
    S_RCO * linearize(c.r) + S_GCO * linearize(c.g) + S_BCO * linearize(c.b)
}

/// Black soft clamp: lifts very dark Y values to model flare.
fn soft_clamp(y: f64) -> f64 {
    if y > BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// Calculate the APCA Lightness Contrast (Lc) of text on a background.
/// Positive Lc = dark text on light bg.
/// Negative Lc = light text on dark bg.
/// Swapping the arguments flips the sign and, because the polarity
/// branches use different exponents, changes the magnitude.
///
/// Port of: apca-w3 npm library (v0.1.9) -> APCAcontrast() + sRGBtoY()
pub fn apca_contrast(bg: Rgb, fg: Rgb) -> f64 {
    let bg_y = soft_clamp(screen_luminance(bg));
    let txt_y = soft_clamp(screen_luminance(fg));

    // Early return for extremely low delta Y
    if (bg_y - txt_y).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    let output_contrast = if bg_y > txt_y {
        // Normal polarity: dark text on light bg (BoW) -> positive Lc
        let sapc = (bg_y.powf(NORM_BG) - txt_y.powf(NORM_TXT)) * SCALE_BOW;
        if sapc < LO_CLIP {
            0.0
        } else {
            sapc - LO_BOW_OFFSET
        }
    } else {
        // Reverse polarity: light text on dark bg (WoB) -> negative Lc
        let sapc = (bg_y.powf(REV_BG) - txt_y.powf(REV_TXT)) * SCALE_WOB;
        if sapc > -LO_CLIP {
            0.0
        } else {
            sapc + LO_WOB_OFFSET
        }
    };

    output_contrast * 100.0
}

/// Bucket an Lc score by magnitude against the named thresholds.
pub fn apca_level(lc: f64) -> ApcaLevel {
    let magnitude = lc.abs();
    if magnitude >= LC_AAA {
        ApcaLevel::Aaa
    } else if magnitude >= LC_AA {
        ApcaLevel::Aa
    } else if magnitude >= LC_AA_LARGE {
        ApcaLevel::AaLarge
    } else {
        ApcaLevel::Fail
    }
}
