//! Per-sheet processing pipeline.
//!
//! Each sheet goes through the same three stages: resolve headers to
//! semantic fields, clean every record, summarize. Sheets never influence
//! each other; the consolidated views are plain concatenations afterwards.

use serde::Serialize;
use tracing::{info, info_span, warn};

use callrep_map::resolve_columns;
use callrep_model::{CleanRecord, FieldMap, SheetSummary, Workbook};
use callrep_transform::RecordCleaner;

use crate::aggregate::summarize;

/// Sheet name used for the concatenated cross-sheet views.
pub const CONSOLIDATED_NAME: &str = "Consolidado";

/// One sheet after resolution, cleaning, and summarization.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedSheet {
    pub name: String,
    pub field_map: FieldMap,
    pub records: Vec<CleanRecord>,
    pub summary: SheetSummary,
}

/// A whole workbook after processing, sheets in workbook order.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedWorkbook {
    pub name: String,
    pub sheets: Vec<ProcessedSheet>,
}

impl ProcessedWorkbook {
    /// Every record of every sheet, in sheet order then record order. The
    /// records already carry their sheet tag.
    pub fn consolidate(&self) -> Vec<CleanRecord> {
        self.sheets
            .iter()
            .flat_map(|sheet| sheet.records.iter().cloned())
            .collect()
    }

    /// Summary of the concatenated records under [`CONSOLIDATED_NAME`].
    pub fn consolidated_summary(&self) -> SheetSummary {
        summarize(CONSOLIDATED_NAME, &self.consolidate())
    }

    pub fn record_count(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.records.len()).sum()
    }
}

/// Runs resolution, cleaning, and summarization over every sheet.
pub fn process_workbook(workbook: &Workbook) -> ProcessedWorkbook {
    let cleaner = RecordCleaner::new();
    let mut sheets = Vec::with_capacity(workbook.sheets.len());
    for sheet in &workbook.sheets {
        let sheet_span = info_span!("sheet", name = %sheet.name);
        let _sheet_guard = sheet_span.enter();

        let field_map = resolve_columns(&sheet.headers);
        if field_map.is_empty() && !sheet.records.is_empty() {
            warn!("no columns resolved; records will carry no fields");
        }
        let records = cleaner.clean_sheet(sheet, &field_map);
        let summary = summarize(&sheet.name, &records);
        info!(
            records = records.len(),
            distinct_outcomes = summary.distinct_outcomes,
            "sheet processed"
        );
        sheets.push(ProcessedSheet {
            name: sheet.name.clone(),
            field_map,
            records,
            summary,
        });
    }
    ProcessedWorkbook {
        name: workbook.name.clone(),
        sheets,
    }
}
