//! Contact report processing.
//!
//! Ties the resolver, cleaner, and aggregation together: a loaded workbook
//! goes in, per-sheet cleaned records plus summaries come out. Aggregation
//! functions also work standalone over any record slice.

pub mod aggregate;
pub mod pipeline;

pub use aggregate::{
    ImportantObservations, hourly_call_volume, important_observations, outcome_distribution,
    summarize,
};
pub use pipeline::{CONSOLIDATED_NAME, ProcessedSheet, ProcessedWorkbook, process_workbook};
