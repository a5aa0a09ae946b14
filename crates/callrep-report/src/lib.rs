//! Report generation for processed call workbooks.
//!
//! Three export surfaces: cleaned per-sheet CSVs (plus the consolidated
//! sheet), a machine-readable JSON summary, and a standalone HTML report
//! with inline styling.

mod common;

pub mod clean_csv;
pub mod error;
pub mod html_report;
pub mod summary_json;

pub use clean_csv::{CANONICAL_COLUMNS, ORIGIN_COLUMN, write_clean_csv};
pub use error::{ReportError, Result};
pub use html_report::{render_html, write_html_report};
pub use summary_json::{ReportSummary, summary_document, write_summary_json};
