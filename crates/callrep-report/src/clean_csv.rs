//! Cleaned-record CSV exports.

use std::path::{Path, PathBuf};

use tracing::info;

use callrep_core::{CONSOLIDATED_NAME, ProcessedWorkbook};
use callrep_model::CleanRecord;

use crate::error::{ReportError, Result};

/// Canonical export columns, in output order.
pub const CANONICAL_COLUMNS: [&str; 7] = [
    "CNPJ",
    "RAZÃO SOCIAL",
    "TEL 1",
    "TEL 2",
    "E-MAIL",
    "SITUAÇÃO",
    "OBSERVAÇÃO",
];

/// Column tagging each consolidated row with its source sheet.
pub const ORIGIN_COLUMN: &str = "ORIGEM";

fn canonical_values(record: &CleanRecord) -> Vec<String> {
    vec![
        record.company_id.clone().unwrap_or_default(),
        record.company_name.clone().unwrap_or_default(),
        record.phone1.clone().unwrap_or_default(),
        record.phone2.clone().unwrap_or_default(),
        record.email.clone().unwrap_or_default(),
        record.outcome.label().to_string(),
        record.note.clone().unwrap_or_default(),
    ]
}

fn csv_error(path: &Path, source: csv::Error) -> ReportError {
    ReportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes one CSV per sheet plus the consolidated file, returning the
/// written paths.
///
/// Every file carries exactly the canonical columns; the consolidated file
/// appends [`ORIGIN_COLUMN`]. Absent fields export as empty cells, and the
/// outcome column always holds the normalized label.
pub fn write_clean_csv(output_dir: &Path, processed: &ProcessedWorkbook) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|e| ReportError::Create {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut written = Vec::with_capacity(processed.sheets.len() + 1);
    for sheet in &processed.sheets {
        let path = output_dir.join(format!("{}.csv", sheet.name));
        let mut writer = csv::Writer::from_path(&path).map_err(|e| csv_error(&path, e))?;

        writer
            .write_record(CANONICAL_COLUMNS)
            .map_err(|e| csv_error(&path, e))?;
        for record in &sheet.records {
            writer
                .write_record(canonical_values(record))
                .map_err(|e| csv_error(&path, e))?;
        }
        writer.flush().map_err(|e| ReportError::Write {
            path: path.clone(),
            source: e,
        })?;
        info!(path = %path.display(), records = sheet.records.len(), "wrote sheet CSV");
        written.push(path);
    }

    let path = output_dir.join(format!("{CONSOLIDATED_NAME}.csv"));
    let mut writer = csv::Writer::from_path(&path).map_err(|e| csv_error(&path, e))?;
    writer
        .write_record(CANONICAL_COLUMNS.iter().copied().chain([ORIGIN_COLUMN]))
        .map_err(|e| csv_error(&path, e))?;
    for record in processed.consolidate() {
        let mut row = canonical_values(&record);
        row.push(record.sheet.clone());
        writer.write_record(&row).map_err(|e| csv_error(&path, e))?;
    }
    writer.flush().map_err(|e| ReportError::Write {
        path: path.clone(),
        source: e,
    })?;
    info!(path = %path.display(), "wrote consolidated CSV");
    written.push(path);

    Ok(written)
}
