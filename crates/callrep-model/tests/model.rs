//! Tests for callrep-model types.

use std::collections::BTreeMap;

use callrep_model::{
    CallTimestamp, CellValue, CleanRecord, FieldMap, OutcomeCategory, RawSheet, SemanticField,
    Workbook,
};
use chrono::NaiveDate;

fn sample_datetime() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 3)
        .expect("valid date")
        .and_hms_opt(9, 31, 55)
        .expect("valid time")
}

#[test]
fn cell_value_payload_accessors() {
    let text = CellValue::Text("TEL 1".to_string());
    assert_eq!(text.as_text(), Some("TEL 1"));
    assert!(!text.is_missing());

    let missing = CellValue::Missing;
    assert!(missing.is_missing());
    assert_eq!(missing.as_text(), None);
    assert_eq!(CellValue::Number(42.0).as_text(), None);
}

#[test]
fn cell_value_serializes_with_kind_tag() {
    let json = serde_json::to_value(CellValue::Text("abc".to_string())).expect("serialize");
    assert_eq!(json["kind"], "Text");
    assert_eq!(json["value"], "abc");

    let round: CellValue =
        serde_json::from_value(serde_json::to_value(CellValue::DateTime(sample_datetime()))
            .expect("serialize datetime"))
        .expect("deserialize datetime");
    assert_eq!(round, CellValue::DateTime(sample_datetime()));
}

#[test]
fn workbook_lookup_and_counts() {
    let mut sheet = RawSheet::new("Campanha", vec!["CNPJ".to_string()]);
    let mut record = BTreeMap::new();
    record.insert(
        "CNPJ".to_string(),
        CellValue::Text("12345678000199".to_string()),
    );
    sheet.push_record(record);

    let workbook = Workbook {
        name: "relatorio".to_string(),
        sheets: vec![sheet, RawSheet::new("Outubro", Vec::new())],
    };

    assert_eq!(workbook.record_count(), 1);
    assert!(workbook.sheet("Campanha").is_some());
    assert!(workbook.sheet("Novembro").is_none());
}

#[test]
fn field_map_header_lookup() {
    let map = FieldMap {
        outcome: Some("SITUAÇÃO".to_string()),
        timestamps: vec!["Data / Hora 1".to_string(), "Data / Hora 2".to_string()],
        ..FieldMap::default()
    };

    assert_eq!(map.header(SemanticField::Outcome), Some("SITUAÇÃO"));
    assert_eq!(map.header(SemanticField::Phone1), None);
    assert_eq!(map.header(SemanticField::Timestamp(1)), Some("Data / Hora 2"));
    assert_eq!(map.header(SemanticField::Timestamp(2)), None);
    assert!(!map.is_empty());
    assert!(FieldMap::default().is_empty());
}

#[test]
fn semantic_field_display_is_one_based_for_timestamps() {
    assert_eq!(SemanticField::Timestamp(0).to_string(), "timestamp 1");
    assert_eq!(SemanticField::CompanyName.to_string(), "company name");
}

#[test]
fn call_timestamp_hour_at_both_precisions() {
    let full = CallTimestamp::Full(sample_datetime());
    assert_eq!(full.hour(), 9);
    assert_eq!(full.as_full(), Some(sample_datetime()));

    let hour_only = CallTimestamp::HourOnly(15);
    assert_eq!(hour_only.hour(), 15);
    assert_eq!(hour_only.as_full(), None);
}

#[test]
fn call_timestamp_display() {
    assert_eq!(
        CallTimestamp::Full(sample_datetime()).to_string(),
        "03/09/2025 09:31"
    );
    assert_eq!(CallTimestamp::HourOnly(7).to_string(), "07:00");
}

#[test]
fn clean_record_phone_and_timestamp_helpers() {
    let record = CleanRecord {
        sheet: "Campanha".to_string(),
        company_id: None,
        company_name: Some("ACME LTDA".to_string()),
        phone1: None,
        phone2: Some("5531999998888".to_string()),
        email: None,
        outcome: OutcomeCategory::CallbackRequested,
        outcome_raw: Some("Retornar em horário comercial".to_string()),
        note: None,
        timestamps: vec![
            Some(CallTimestamp::HourOnly(15)),
            None,
            Some(CallTimestamp::Full(sample_datetime())),
        ],
    };

    assert!(record.has_any_phone());
    assert!(record.outcome.is_notable());
    let hours: Vec<u32> = record.parsed_timestamps().map(|ts| ts.hour()).collect();
    assert_eq!(hours, vec![15, 9]);
}

#[test]
fn not_reached_is_the_only_unremarkable_outcome() {
    assert!(!OutcomeCategory::NotReached.is_notable());
    assert!(OutcomeCategory::NotInformed.is_notable());
    assert!(OutcomeCategory::Other("Sem contato".to_string()).is_notable());
}
