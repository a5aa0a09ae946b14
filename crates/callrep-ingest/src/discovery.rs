//! Sheet file discovery.
//!
//! A workbook on disk is a directory of CSV files, one per sheet. The file
//! stem is the sheet name, so `CARGAS NITEROI.csv` becomes the sheet
//! `CARGAS NITEROI`.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all CSV sheet files in a workbook directory.
///
/// Returns files sorted by filename so sheet order is stable across runs.
/// The extension match is case-insensitive; anything else in the directory
/// is ignored.
pub fn list_sheet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let read_error = |e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && has_csv_extension(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Derives the sheet name from a sheet file path.
///
/// The stem is kept verbatim; sheet names in the legacy workbooks carry
/// spaces and accents.
pub fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("")
        .to_string()
}
