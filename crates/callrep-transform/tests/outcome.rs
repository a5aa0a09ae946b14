//! Tests for outcome classification.

use callrep_model::OutcomeCategory;
use callrep_transform::OutcomeClassifier;

fn classify(raw: &str) -> OutcomeCategory {
    OutcomeClassifier::new().classify(Some(raw))
}

// =========================================================================
// Canonical variants
// =========================================================================

#[test]
fn not_reached_variants() {
    for raw in ["não atende", "nao atende", "não atend", "n atend"] {
        assert_eq!(classify(raw), OutcomeCategory::NotReached, "raw: {raw}");
    }
}

#[test]
fn rejected_proposal_variants() {
    for raw in ["não acatou", "nao acatou", "n acatou"] {
        assert_eq!(
            classify(raw),
            OutcomeCategory::RejectedProposal,
            "raw: {raw}"
        );
    }
}

#[test]
fn invalid_number_variants() {
    for raw in [
        "número incorreto",
        "numero incorreto",
        "tel errado",
        "telefone incorreto",
    ] {
        assert_eq!(classify(raw), OutcomeCategory::InvalidNumber, "raw: {raw}");
    }
}

#[test]
fn company_closed_variants() {
    for raw in ["baixada", "empresa baixada"] {
        assert_eq!(classify(raw), OutcomeCategory::CompanyClosed, "raw: {raw}");
    }
}

// =========================================================================
// Case and accent insensitivity
// =========================================================================

#[test]
fn matching_ignores_case() {
    assert_eq!(classify("NÃO ATENDE"), OutcomeCategory::NotReached);
    assert_eq!(classify("Tel Errado"), OutcomeCategory::InvalidNumber);
}

#[test]
fn matching_ignores_accents() {
    assert_eq!(classify("NAO ATENDE"), OutcomeCategory::NotReached);
    assert_eq!(classify("Numero Incorreto"), OutcomeCategory::InvalidNumber);
}

#[test]
fn matching_ignores_surrounding_whitespace() {
    assert_eq!(classify("   baixada  "), OutcomeCategory::CompanyClosed);
}

// =========================================================================
// Substring rule and fallbacks
// =========================================================================

#[test]
fn callback_requested_by_substring() {
    assert_eq!(classify("retornar"), OutcomeCategory::CallbackRequested);
    assert_eq!(
        classify("Retornar em horário comercial"),
        OutcomeCategory::CallbackRequested
    );
    assert_eq!(
        classify("cliente pediu p/ retornar"),
        OutcomeCategory::CallbackRequested
    );
}

#[test]
fn absent_or_blank_is_not_informed() {
    let classifier = OutcomeClassifier::new();
    assert_eq!(classifier.classify(None), OutcomeCategory::NotInformed);
    assert_eq!(classifier.classify(Some("")), OutcomeCategory::NotInformed);
    assert_eq!(
        classifier.classify(Some("   ")),
        OutcomeCategory::NotInformed
    );
}

#[test]
fn unrecognized_text_keeps_original_spelling() {
    assert_eq!(
        classify(" Ligação caiu "),
        OutcomeCategory::Other("Ligação caiu".to_string())
    );
}

#[test]
fn other_label_displays_the_preserved_text() {
    let category = classify("Linha ocupada");
    assert_eq!(category.label(), "Linha ocupada");
}
