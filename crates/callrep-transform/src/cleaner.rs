//! Record cleaning: raw sheet rows to normalized contact records.

use tracing::debug;

use callrep_model::{CallTimestamp, CellValue, CleanRecord, FieldMap, RawRecord, RawSheet};

use crate::datetime::parse_timestamp;
use crate::outcome::OutcomeClassifier;
use crate::value::{phone_value, text_value};

/// Turns raw sheet rows into [`CleanRecord`]s.
///
/// Cleaning is a pure per-record pass: rows keep their sheet order, fields
/// the map did not resolve come out absent, and running the pass twice over
/// the same input yields identical records.
#[derive(Debug, Clone, Default)]
pub struct RecordCleaner {
    classifier: OutcomeClassifier,
}

impl RecordCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clean_sheet(&self, sheet: &RawSheet, map: &FieldMap) -> Vec<CleanRecord> {
        sheet
            .records
            .iter()
            .map(|record| self.clean_record(&sheet.name, record, map))
            .collect()
    }

    fn clean_record(&self, sheet: &str, record: &RawRecord, map: &FieldMap) -> CleanRecord {
        let outcome_raw = lookup(record, map.outcome.as_deref()).and_then(text_value);
        let outcome = self.classifier.classify(outcome_raw.as_deref());

        let timestamps: Vec<Option<CallTimestamp>> = map
            .timestamps
            .iter()
            .map(|header| {
                let cell = record.get(header);
                let parsed = cell.and_then(parse_timestamp);
                if parsed.is_none() && cell.is_some_and(|cell| !cell.is_missing()) {
                    debug!(sheet, header = %header, "timestamp cell did not parse");
                }
                parsed
            })
            .collect();

        CleanRecord {
            sheet: sheet.to_string(),
            company_id: lookup(record, map.company_id.as_deref()).and_then(text_value),
            company_name: lookup(record, map.company_name.as_deref()).and_then(text_value),
            phone1: lookup(record, map.phone1.as_deref()).and_then(phone_value),
            phone2: lookup(record, map.phone2.as_deref()).and_then(phone_value),
            email: lookup(record, map.email.as_deref()).and_then(text_value),
            outcome,
            outcome_raw,
            note: lookup(record, map.note.as_deref()).and_then(text_value),
            timestamps,
        }
    }
}

fn lookup<'a>(record: &'a RawRecord, header: Option<&str>) -> Option<&'a CellValue> {
    header.and_then(|header| record.get(header))
}
