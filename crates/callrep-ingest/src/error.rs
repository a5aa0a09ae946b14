//! Error types for workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a workbook from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The workbook path does not exist or is not a directory.
    #[error("workbook directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Listing the workbook directory failed partway through.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sheet file could not be read into memory.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sheet file was read but could not be parsed as CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The workbook directory holds no CSV files at all.
    #[error("no sheet files found in {path}")]
    NoSheets { path: PathBuf },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DirectoryNotFound {
            path: PathBuf::from("/data/workbook"),
        };
        assert_eq!(
            err.to_string(),
            "workbook directory not found: /data/workbook"
        );
    }

    #[test]
    fn test_no_sheets_display() {
        let err = IngestError::NoSheets {
            path: PathBuf::from("/data/empty"),
        };
        assert_eq!(err.to_string(), "no sheet files found in /data/empty");
    }
}
