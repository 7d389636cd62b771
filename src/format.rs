//! Display formatting for contrast scores. Purely presentational; the
//! numeric values in [`crate::types::ContrastResult`] are never touched.

/// Render a WCAG ratio at one decimal place, e.g. `4.5:1`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.1}:1")
}

/// Render an APCA score as its integer-rounded magnitude with the `Lc`
/// label, e.g. `Lc 72`. Polarity is a property of the pair, not of the
/// displayed strength.
pub fn format_apca(score: f64) -> String {
    format!("Lc {}", score.abs().round() as i64)
}
