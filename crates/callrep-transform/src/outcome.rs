//! Call outcome classification.
//!
//! The outcome column is free text typed by whoever made the call, so the
//! same result appears under several spellings. Classification runs the
//! rule table top to bottom on normalized text: exact variants first, then
//! the one substring rule, then a verbatim fallback.

use callrep_model::OutcomeCategory;

use crate::text::normalize_text;

/// Spelling variants for each closed category, as they occur in the sheets.
/// Order matters: earlier rules win.
const EXACT_RULES: &[(&[&str], OutcomeCategory)] = &[
    (
        &["não atende", "nao atende", "não atend", "n atend"],
        OutcomeCategory::NotReached,
    ),
    (
        &["não acatou", "nao acatou", "n acatou"],
        OutcomeCategory::RejectedProposal,
    ),
    (
        &[
            "número incorreto",
            "numero incorreto",
            "tel errado",
            "telefone incorreto",
        ],
        OutcomeCategory::InvalidNumber,
    ),
    (
        &["baixada", "empresa baixada"],
        OutcomeCategory::CompanyClosed,
    ),
];

/// Substring that marks a callback request wherever it appears.
pub const CALLBACK_MARKER: &str = "retornar";

/// The exact-variant table, category first, for listings. The callback
/// substring rule and the `NotInformed`/`Other` fallbacks are not part
/// of it.
pub fn exact_variants() -> impl Iterator<Item = (OutcomeCategory, &'static [&'static str])> {
    EXACT_RULES
        .iter()
        .map(|(variants, category)| (category.clone(), *variants))
}

/// Classifies raw outcome text into canonical categories.
///
/// The variant tables are normalized once at construction, so matching is
/// insensitive to case and accents on both sides.
#[derive(Debug, Clone)]
pub struct OutcomeClassifier {
    rules: Vec<(Vec<String>, OutcomeCategory)>,
}

impl Default for OutcomeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeClassifier {
    pub fn new() -> Self {
        let rules = EXACT_RULES
            .iter()
            .map(|(variants, category)| {
                let normalized = variants
                    .iter()
                    .map(|variant| normalize_text(variant))
                    .collect();
                (normalized, category.clone())
            })
            .collect();
        Self { rules }
    }

    /// Classify one outcome cell. Absent or blank text is `NotInformed`;
    /// unrecognized text is preserved in `Other`.
    pub fn classify(&self, raw: Option<&str>) -> OutcomeCategory {
        let Some(raw) = raw else {
            return OutcomeCategory::NotInformed;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return OutcomeCategory::NotInformed;
        }

        let normalized = normalize_text(trimmed);
        for (variants, category) in &self.rules {
            if variants.iter().any(|variant| *variant == normalized) {
                return category.clone();
            }
        }
        if normalized.contains(CALLBACK_MARKER) {
            return OutcomeCategory::CallbackRequested;
        }
        OutcomeCategory::Other(trimmed.to_string())
    }
}
