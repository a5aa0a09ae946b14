#![deny(unsafe_code)]

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

/// A single spreadsheet cell, typed at the ingestion boundary.
///
/// Everything downstream of ingestion matches on the tag instead of
/// re-guessing what a string "really" is.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Borrow the text payload, if this cell holds one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// One raw row, keyed by the sheet's original column headers.
pub type RawRecord = BTreeMap<String, CellValue>;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RawSheet {
    pub name: String,
    /// Headers in original column order.
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: RawRecord) {
        self.records.push(record);
    }
}

/// A loaded workbook: every sheet, in discovery order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Workbook {
    pub name: String,
    pub sheets: Vec<RawSheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&RawSheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn record_count(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.records.len()).sum()
    }
}
