//! Header canonicalization and legacy-alias resolution.

/// Documented legacy header variants, canonicalized form -> target name.
///
/// Upstream column labels are inconsistent across source-file revisions, so
/// the renames are table-driven rather than inferred. The one known variant
/// is the currency column: `Purchase Amount (USD)` canonicalizes to
/// `purchase_amount_usd_` (the trailing parenthesis becomes a trailing
/// underscore) and must land on `purchase_amount_usd`.
pub const HEADER_ALIASES: &[(&str, &str)] = &[("purchase_amount_usd_", "purchase_amount_usd")];

/// Lowercases a field name and collapses every maximal run of characters
/// outside `[a-z0-9_]` into a single `_`.
///
/// Idempotent: the output only contains `[a-z0-9_]`, so a second pass is a
/// no-op.
pub fn canonical_field_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut canonical = String::with_capacity(lowered.len());
    let mut in_run = false;
    for ch in lowered.chars() {
        if matches!(ch, 'a'..='z' | '0'..='9' | '_') {
            canonical.push(ch);
            in_run = false;
        } else if !in_run {
            canonical.push('_');
            in_run = true;
        }
    }
    canonical
}

/// Canonicalizes a header and resolves known legacy variants.
pub fn canonical_header(raw: &str) -> String {
    let canonical = canonical_field_name(raw);
    for (legacy, target) in HEADER_ALIASES {
        if canonical == *legacy {
            return (*target).to_string();
        }
    }
    canonical
}
