//! Tests for column resolution.

use callrep_map::resolve_columns;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

// =========================================================================
// Exact alias pass
// =========================================================================

#[test]
fn resolves_the_canonical_header_set() {
    let map = resolve_columns(&headers(&[
        "CNPJ",
        "RAZÃO SOCIAL",
        "TEL 1",
        "TEL 2",
        "E-MAIL",
        "SITUAÇÃO",
        "OBSERVAÇÃO",
    ]));

    assert_eq!(map.company_id.as_deref(), Some("CNPJ"));
    assert_eq!(map.company_name.as_deref(), Some("RAZÃO SOCIAL"));
    assert_eq!(map.phone1.as_deref(), Some("TEL 1"));
    assert_eq!(map.phone2.as_deref(), Some("TEL 2"));
    assert_eq!(map.email.as_deref(), Some("E-MAIL"));
    assert_eq!(map.outcome.as_deref(), Some("SITUAÇÃO"));
    assert_eq!(map.note.as_deref(), Some("OBSERVAÇÃO"));
    assert!(map.timestamps.is_empty());
}

#[test]
fn resolves_compact_and_unaccented_variants() {
    let map = resolve_columns(&headers(&["TEL1", "TEL2", "EMAIL", "SITUACAO", "OBSERVACAO"]));

    assert_eq!(map.phone1.as_deref(), Some("TEL1"));
    assert_eq!(map.phone2.as_deref(), Some("TEL2"));
    assert_eq!(map.email.as_deref(), Some("EMAIL"));
    assert_eq!(map.outcome.as_deref(), Some("SITUACAO"));
    assert_eq!(map.note.as_deref(), Some("OBSERVACAO"));
}

#[test]
fn exact_matching_is_case_sensitive() {
    let map = resolve_columns(&headers(&["cnpj", "tel 1"]));
    assert_eq!(map.company_id, None);
    assert_eq!(map.phone1, None);
}

#[test]
fn first_listed_alias_wins_when_both_are_present() {
    let map = resolve_columns(&headers(&["TEL1", "TEL 1"]));
    assert_eq!(map.phone1.as_deref(), Some("TEL 1"));
}

// =========================================================================
// Timestamp slots
// =========================================================================

#[test]
fn resolves_numbered_timestamp_headers_in_slot_order() {
    let map = resolve_columns(&headers(&[
        "Data / Hora 1",
        "Data_Hora_2",
        "Data Hora 3",
        "SITUAÇÃO",
    ]));

    assert_eq!(
        map.timestamps,
        vec![
            "Data / Hora 1".to_string(),
            "Data_Hora_2".to_string(),
            "Data Hora 3".to_string(),
        ]
    );
}

#[test]
fn missing_slots_are_skipped_without_gaps() {
    let map = resolve_columns(&headers(&["Data_Hora 2"]));
    assert_eq!(map.timestamps, vec!["Data_Hora 2".to_string()]);
}

// =========================================================================
// Lenient passes
// =========================================================================

#[test]
fn outcome_and_note_fall_back_to_substring_scan() {
    let map = resolve_columns(&headers(&[
        "Situação da Ligação",
        "Observação Final",
    ]));

    assert_eq!(map.outcome.as_deref(), Some("Situação da Ligação"));
    assert_eq!(map.note.as_deref(), Some("Observação Final"));
}

#[test]
fn substring_scan_ignores_case_and_accents() {
    let map = resolve_columns(&headers(&["SITUACAO ATUAL"]));
    assert_eq!(map.outcome.as_deref(), Some("SITUACAO ATUAL"));
}

#[test]
fn timestamp_scan_collects_date_like_headers_in_order() {
    let map = resolve_columns(&headers(&["Hora da Ligação", "Data Retorno", "CNPJ"]));
    assert_eq!(
        map.timestamps,
        vec!["Hora da Ligação".to_string(), "Data Retorno".to_string()]
    );
}

#[test]
fn timestamp_scan_only_runs_when_no_numbered_slot_matched() {
    let map = resolve_columns(&headers(&["Data / Hora 1", "Data Retorno"]));
    assert_eq!(map.timestamps, vec!["Data / Hora 1".to_string()]);
}

#[test]
fn each_header_is_assigned_at_most_once() {
    // One header carries both markers; the outcome pass takes it and the
    // note pass must not claim it a second time.
    let map = resolve_columns(&headers(&["Situação / Observação"]));
    assert_eq!(map.outcome.as_deref(), Some("Situação / Observação"));
    assert_eq!(map.note, None);
}

// =========================================================================
// Absent columns
// =========================================================================

#[test]
fn unknown_headers_resolve_to_an_empty_map() {
    let map = resolve_columns(&headers(&["Coluna A", "Coluna B"]));
    assert!(map.is_empty());
}

#[test]
fn no_headers_resolve_to_an_empty_map() {
    let map = resolve_columns(&[]);
    assert!(map.is_empty());
    assert!(map.timestamps.is_empty());
}
