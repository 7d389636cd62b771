use crate::types::Rgb;

/// Alpha-composite a foreground color over an opaque background.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
pub fn composite_over(fg: Rgb, bg: Rgb, alpha: f64) -> Rgb {
    let blend = |f: u8, b: u8| -> u8 {
        let result = f as f64 * alpha + b as f64 * (1.0 - alpha);
        result.round() as u8
    };

    Rgb::new(blend(fg.r, bg.r), blend(fg.g, bg.g), blend(fg.b, bg.b))
}
