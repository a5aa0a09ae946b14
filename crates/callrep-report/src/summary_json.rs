//! Machine-readable run summary.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use callrep_core::{
    CONSOLIDATED_NAME, ProcessedWorkbook, hourly_call_volume, important_observations, summarize,
};
use callrep_model::SheetSummary;

use crate::common::ensure_parent_dir;
use crate::error::{ReportError, Result};

/// Everything one run produced, in a single JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub workbook: String,
    pub generated_at: String,
    pub sheets: Vec<SheetSummary>,
    pub consolidated: SheetSummary,
    pub important_observations: usize,
    pub important_percent: f64,
    /// Calls per hour of day across every sheet.
    pub hourly_volume: BTreeMap<u32, usize>,
}

/// Builds the summary document without touching the filesystem.
pub fn summary_document(
    processed: &ProcessedWorkbook,
    generated_at: impl Into<String>,
) -> ReportSummary {
    let consolidated_records = processed.consolidate();
    let observations = important_observations(&consolidated_records);
    ReportSummary {
        workbook: processed.name.clone(),
        generated_at: generated_at.into(),
        sheets: processed
            .sheets
            .iter()
            .map(|sheet| sheet.summary.clone())
            .collect(),
        consolidated: summarize(CONSOLIDATED_NAME, &consolidated_records),
        important_observations: observations.count(),
        important_percent: observations.percent,
        hourly_volume: hourly_call_volume(&consolidated_records),
    }
}

pub fn write_summary_json(path: &Path, processed: &ProcessedWorkbook) -> Result<()> {
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let document = summary_document(processed, generated_at);
    let json = serde_json::to_vec_pretty(&document).map_err(|e| ReportError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    ensure_parent_dir(path)?;
    std::fs::write(path, json).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "wrote summary JSON");
    Ok(())
}
