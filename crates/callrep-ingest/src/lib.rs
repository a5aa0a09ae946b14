//! Workbook ingestion.
//!
//! A workbook on disk is a directory of CSV files, one per sheet. This
//! crate discovers the sheet files, detects the real header row beneath any
//! banner lines, types every cell, and hands back a
//! [`callrep_model::Workbook`]. A content fingerprint keys the optional
//! [`WorkbookCache`].

pub mod cache;
pub mod csv_sheet;
pub mod discovery;
pub mod error;
pub mod workbook;

pub use cache::WorkbookCache;
pub use csv_sheet::read_sheet;
pub use discovery::{list_sheet_files, sheet_name};
pub use error::{IngestError, Result};
pub use workbook::{fingerprint, load_workbook};
