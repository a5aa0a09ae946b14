//! CSV sheet reading: header-row detection and cell typing.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use tracing::{debug, warn};

use callrep_model::{CellValue, RawRecord, RawSheet};

use crate::discovery::sheet_name;
use crate::error::{IngestError, Result};

/// Strips surrounding whitespace and stray BOM characters in one pass, so
/// a BOM followed by a space (or the reverse) still cleans up.
fn clean_edges(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn normalize_header(raw: &str) -> String {
    clean_edges(raw)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_cell(raw: &str) -> String {
    clean_edges(raw).to_string()
}

/// Shape of one raw row, used to tell banner lines and header rows apart
/// from data.
#[derive(Debug, Clone, Copy)]
struct RowProfile {
    filled: usize,
    fill_ratio: f64,
    alpha_ratio: f64,
    numeric_ratio: f64,
}

impl RowProfile {
    fn of(row: &[String]) -> Self {
        let width = row.len();
        let mut filled = 0usize;
        let mut alphabetic = 0usize;
        let mut numeric = 0usize;
        for cell in row {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            filled += 1;
            if cell.parse::<f64>().is_ok() {
                numeric += 1;
            }
            if cell.chars().any(char::is_alphabetic) {
                alphabetic += 1;
            }
        }
        let share = |count: usize| {
            if width == 0 {
                0.0
            } else {
                count as f64 / width as f64
            }
        };
        RowProfile {
            filled,
            fill_ratio: share(filled),
            alpha_ratio: share(alphabetic),
            numeric_ratio: share(numeric),
        }
    }

    /// A title or padding line: at most two filled cells covering at most
    /// half the row. The legacy exports render merged title cells this way.
    fn is_banner(&self) -> bool {
        self.filled <= 2 && self.fill_ratio <= 0.5
    }

    /// A plausible header row: dense, mostly alphabetic, almost no bare
    /// numbers.
    fn is_header(&self) -> bool {
        self.fill_ratio >= 0.8 && self.alpha_ratio >= 0.5 && self.numeric_ratio <= 0.1
    }
}

/// Picks the header row among the first few rows.
///
/// Skips leading banner lines, then takes the first header-like row. Falls
/// back to the first non-banner row so a sheet without a recognizable
/// header still loads (its columns just resolve to nothing downstream).
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    let profiles: Vec<RowProfile> = rows
        .iter()
        .take(5)
        .map(|row| RowProfile::of(row))
        .collect();
    let first_content = profiles
        .iter()
        .position(|profile| !profile.is_banner())
        .unwrap_or(0);
    profiles[first_content..]
        .iter()
        .position(RowProfile::is_header)
        .map_or(first_content, |offset| first_content + offset)
}

/// Types one cell. Empty cells are `Missing`; the ISO datetime shape that
/// spreadsheet exports emit for true datetime cells becomes `DateTime`;
/// finite numeric text becomes `Number`. Everything else stays `Text`,
/// including "nan"-style placeholders, which are filtered later.
fn parse_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Missing;
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(datetime);
    }
    if let Ok(number) = raw.parse::<f64>()
        && number.is_finite()
    {
        return CellValue::Number(number);
    }
    CellValue::Text(raw.to_string())
}

/// Duplicate headers get a counted suffix so every column keeps its cells
/// in the record map.
fn unique_headers(raw: &[String]) -> Vec<String> {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    let mut headers = Vec::with_capacity(raw.len());
    for value in raw {
        let base = normalize_header(value);
        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            headers.push(base);
        } else {
            headers.push(format!("{base} ({count})"));
        }
    }
    headers
}

/// Reads one sheet file into a typed [`RawSheet`].
///
/// Rows that are entirely empty are dropped. Short rows are padded with
/// `Missing` cells so every record carries an entry for every header.
pub fn read_sheet(path: &Path) -> Result<RawSheet> {
    let name = sheet_name(path);
    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(parse_error)?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let row: Vec<String> = record.map_err(parse_error)?.iter().map(normalize_cell).collect();
        if row.iter().any(|value| !value.is_empty()) {
            raw_rows.push(row);
        }
    }

    if raw_rows.is_empty() {
        warn!(sheet = %name, "sheet file has no usable rows");
        return Ok(RawSheet::new(name, Vec::new()));
    }

    let header_index = detect_header_row(&raw_rows);
    if header_index > 0 {
        debug!(
            sheet = %name,
            skipped = header_index,
            "skipped banner rows above the header"
        );
    }
    let headers = unique_headers(&raw_rows[header_index]);

    let mut sheet = RawSheet::new(name, headers);
    for row in raw_rows.iter().skip(header_index + 1) {
        let mut record = RawRecord::new();
        for (idx, header) in sheet.headers.iter().enumerate() {
            let value = row.get(idx).map(String::as_str).unwrap_or("");
            record.insert(header.clone(), parse_cell(value));
        }
        sheet.push_record(record);
    }
    Ok(sheet)
}
