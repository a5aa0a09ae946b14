//! Column resolution for contact report sheets.
//!
//! Sheets name the same column in several ways ("TEL 1" vs "TEL1",
//! "SITUAÇÃO" vs "SITUACAO"). This crate maps raw headers to the semantic
//! fields in [`callrep_model::FieldMap`] using fixed alias tables, falling
//! back to substring scans for sheets that strayed further.

pub mod patterns;
pub mod resolver;

pub use resolver::resolve_columns;
