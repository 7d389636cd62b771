//! Contrast computation core for theme and design-token tooling.
//!
//! Given color pairs from a palette (layer surfaces, variant columns,
//! button fills), this crate measures text legibility two ways:
//!
//! - WCAG 2.1 contrast ratio with AA/AAA conformance booleans
//! - APCA Lc (signed, polarity-aware) with a qualitative level bucket
//!
//! The boundary surface is small: [`get_contrast_result`] measures one
//! hex pair, [`format_ratio`]/[`format_apca`] render scores for a badge,
//! and [`audit_palette`] fans out over a whole palette in parallel.
//! Everything is pure and synchronous; callers need no coordination.

pub mod engine;
pub mod format;
pub mod math;
pub mod types;

pub use engine::audit_palette;
pub use format::{format_apca, format_ratio};
pub use math::apca::{apca_contrast, apca_level, LC_AA, LC_AAA, LC_AA_LARGE};
pub use math::checker::get_contrast_result;
pub use math::color_parse::to_rgba;
pub use math::hex::parse_hex;
pub use math::wcag::{contrast_ratio, relative_luminance};
pub use types::{
    ApcaLevel, AuditEntry, AuditOptions, BadgeStatus, ColorError, Conformance, ContrastResult,
    PairRole, PaletteReport, Rgb, SkippedPair, TokenPair,
};
