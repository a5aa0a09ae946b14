//! Workbook loading and content fingerprinting.

use std::path::Path;

use sha2::Digest;
use tracing::info;

use callrep_model::Workbook;

use crate::csv_sheet::read_sheet;
use crate::discovery::list_sheet_files;
use crate::error::{IngestError, Result};

/// Loads every sheet in the workbook directory, in filename order.
///
/// A directory with no sheet files at all is the one unrecoverable input
/// fault; everything else loads, possibly as an empty sheet.
pub fn load_workbook(dir: &Path) -> Result<Workbook> {
    let files = list_sheet_files(dir)?;
    if files.is_empty() {
        return Err(IngestError::NoSheets {
            path: dir.to_path_buf(),
        });
    }

    let name = workbook_name(dir);
    let mut sheets = Vec::with_capacity(files.len());
    for file in &files {
        sheets.push(read_sheet(file)?);
    }
    info!(workbook = %name, sheets = sheets.len(), "loaded workbook");
    Ok(Workbook { name, sheets })
}

fn workbook_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(|v| v.to_str())
        .unwrap_or("workbook")
        .to_string()
}

/// SHA-256 over sheet file names and bytes, hex encoded.
///
/// Any rename, addition, or edit under the directory changes the digest,
/// which is what keys the [`crate::WorkbookCache`].
pub fn fingerprint(dir: &Path) -> Result<String> {
    let files = list_sheet_files(dir)?;
    let mut hasher = sha2::Sha256::new();
    for file in &files {
        if let Some(file_name) = file.file_name().and_then(|v| v.to_str()) {
            hasher.update(file_name.as_bytes());
        }
        let bytes = std::fs::read(file).map_err(|e| IngestError::FileRead {
            path: file.clone(),
            source: e,
        })?;
        hasher.update(&bytes);
    }
    Ok(hex::encode(hasher.finalize()))
}
