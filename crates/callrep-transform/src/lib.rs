//! Field-level normalization for contact report records.
//!
//! This crate turns the raw cells a workbook sheet delivers into clean,
//! comparable values:
//!
//! - **text**: case and accent folding for comparisons
//! - **outcome**: free-text call outcomes to canonical categories
//! - **datetime**: ad-hoc timestamp formats to [`callrep_model::CallTimestamp`]
//! - **value**: placeholder handling and number-to-text rendering
//! - **cleaner**: the per-sheet pass producing [`callrep_model::CleanRecord`]s

pub mod cleaner;
pub mod datetime;
pub mod outcome;
pub mod text;
pub mod value;

// Re-export the pieces callers use directly
pub use cleaner::RecordCleaner;
pub use datetime::{parse_timestamp, parse_timestamp_text};
pub use outcome::{CALLBACK_MARKER, OutcomeClassifier, exact_variants};
pub use text::normalize_text;
pub use value::{format_number, is_placeholder, phone_value, text_value};
