use rayon::prelude::*;

use crate::math::{checker, hex};
use crate::types::{
    AuditEntry, AuditOptions, ColorError, Conformance, PaletteReport, SkippedPair, TokenPair,
};

/// Decide violation by conformance level and pair context.
/// Non-text roles (border, ring, outline) and large text use the
/// large-text thresholds.
fn is_violation(entry: &AuditEntry, conformance: Conformance) -> bool {
    let uses_large_threshold = entry.is_large_text || !entry.role.is_text();

    match conformance {
        Conformance::Aaa => {
            if uses_large_threshold {
                !entry.wcag.pass_aaa_large
            } else {
                !entry.wcag.pass_aaa
            }
        }
        Conformance::Aa => {
            if uses_large_threshold {
                !entry.wcag.pass_aa_large
            } else {
                !entry.wcag.pass_aa
            }
        }
    }
}

/// Audit every pair of a palette in parallel and categorize the results.
///
/// Uses Rayon's `par_iter()`; each pair is measured independently with no
/// shared mutable state, and the report keeps the input order.
///
/// Pairs whose colors cannot be resolved to a concrete value are skipped,
/// never reported as violations. Fails only if `options.page_bg` itself is
/// malformed.
pub fn audit_palette(
    pairs: &[TokenPair],
    options: &AuditOptions,
) -> Result<PaletteReport, ColorError> {
    let (page_bg, _) = hex::parse_hex(&options.page_bg)?;

    let outcomes: Vec<Result<AuditEntry, SkippedPair>> = pairs
        .par_iter()
        .map(|pair| {
            checker::check_pair(pair, page_bg, &options.overrides).map_err(|err| SkippedPair {
                name: pair.name.clone(),
                reason: err.to_string(),
            })
        })
        .collect();

    let mut report = PaletteReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(entry) => {
                if is_violation(&entry, options.conformance) {
                    report.violations.push(entry);
                } else {
                    report.passed.push(entry);
                }
            }
            Err(skipped) => report.skipped.push(skipped),
        }
    }

    Ok(report)
}
