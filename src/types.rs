use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::apca::{LC_AA, LC_AAA};

/// An opaque sRGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase 6-digit hex, e.g. `#1e293b`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Failure to turn a color string into channel values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The string matches no supported color syntax.
    #[error("invalid color format: `{value}`")]
    InvalidColorFormat { value: String },

    /// A keyword like `transparent` or `currentColor` that names no
    /// measurable color on its own.
    #[error("`{value}` does not resolve to a concrete color")]
    NonConcrete { value: String },
}

/// Qualitative bucket for an APCA Lc magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApcaLevel {
    #[serde(rename = "Fail")]
    Fail,
    /// Readable only at large-text sizes (|Lc| >= 45).
    #[serde(rename = "AA Large")]
    AaLarge,
    /// Acceptable for content text, buttons, large text (|Lc| >= 60).
    #[serde(rename = "AA")]
    Aa,
    /// Strong pass, body-text grade (|Lc| >= 75).
    #[serde(rename = "AAA")]
    Aaa,
}

impl fmt::Display for ApcaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApcaLevel::Fail => "Fail",
            ApcaLevel::AaLarge => "AA Large",
            ApcaLevel::Aa => "AA",
            ApcaLevel::Aaa => "AAA",
        })
    }
}

/// Verdict a contrast badge renders for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeStatus {
    Fail,
    Pass,
    Strong,
}

/// One measured (background, foreground) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// WCAG 2.1 contrast ratio, 1.0..=21.0, rounded to 2 decimals.
    pub ratio: f64,
    /// WCAG AA for normal text (ratio >= 4.5).
    pub aa: bool,
    /// WCAG AAA for normal text (ratio >= 7.0).
    pub aaa: bool,
    /// Signed APCA Lc, rounded to 2 decimals. Positive = dark text on
    /// light background, negative = light text on dark background.
    pub apca: f64,
    pub apca_level: ApcaLevel,
}

impl ContrastResult {
    /// Badge verdict: strong needs AAA or |Lc| >= 75, pass needs AA or
    /// |Lc| >= 60 (large text / button context). The thresholds live here
    /// so renderers never re-derive them.
    pub fn badge_status(&self) -> BadgeStatus {
        let lc = self.apca.abs();
        if self.aaa || lc >= LC_AAA {
            BadgeStatus::Strong
        } else if self.aa || lc >= LC_AA {
            BadgeStatus::Pass
        } else {
            BadgeStatus::Fail
        }
    }
}

/// What a token pair colors. Non-text roles are judged at the WCAG
/// large-text thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairRole {
    Text,
    Border,
    Ring,
    Outline,
}

impl Default for PairRole {
    fn default() -> Self {
        PairRole::Text
    }
}

impl PairRole {
    pub fn is_text(self) -> bool {
        matches!(self, PairRole::Text)
    }
}

/// A named background/foreground pair from a theme palette.
///
/// `bg` and `fg` accept any CSS color value. `bg_var`/`fg_var` are the
/// CSS variable names the pair is published under; when set, entries in
/// [`AuditOptions::overrides`] keyed by those names replace the base values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub name: String,
    pub bg: String,
    pub fg: String,
    #[serde(default)]
    pub bg_var: Option<String>,
    #[serde(default)]
    pub fg_var: Option<String>,
    #[serde(default)]
    pub is_large_text: bool,
    #[serde(default)]
    pub role: PairRole,
}

impl TokenPair {
    /// Normal-text pair with no variable bindings.
    pub fn new(name: impl Into<String>, bg: impl Into<String>, fg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bg: bg.into(),
            fg: fg.into(),
            bg_var: None,
            fg_var: None,
            is_large_text: false,
            role: PairRole::Text,
        }
    }
}

/// WCAG conformance level an audit judges against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conformance {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

/// Settings for a palette audit.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub conformance: Conformance,
    /// Page background semi-transparent pair backgrounds composite against.
    pub page_bg: String,
    /// Live color overrides keyed by CSS variable name.
    pub overrides: HashMap<String, String>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            conformance: Conformance::Aa,
            page_bg: "#ffffff".to_string(),
            overrides: HashMap::new(),
        }
    }
}

/// One audited pair with its effective (post-override, post-compositing)
/// colors and measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub name: String,
    pub bg_hex: String,
    pub fg_hex: String,
    pub is_large_text: bool,
    pub role: PairRole,
    pub wcag: crate::math::wcag::WcagThresholds,
    pub result: ContrastResult,
}

/// A pair the audit could not measure, with the parse failure rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPair {
    pub name: String,
    pub reason: String,
}

/// Outcome of auditing a whole palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteReport {
    pub violations: Vec<AuditEntry>,
    pub passed: Vec<AuditEntry>,
    pub skipped: Vec<SkippedPair>,
}

impl PaletteReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
