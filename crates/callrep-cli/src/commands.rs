//! Command implementations.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use callrep_core::{ProcessedWorkbook, process_workbook};
use callrep_ingest::load_workbook;
use callrep_model::OutcomeCategory;
use callrep_report::{write_clean_csv, write_html_report, write_summary_json};
use callrep_transform::{CALLBACK_MARKER, exact_variants};

use crate::cli::ReportArgs;
use crate::summary::{apply_table_style, header_cell};

/// Directory under the output dir holding the cleaned per-sheet CSVs.
pub const CLEAN_DIR: &str = "dados_limpos";
/// File name of the JSON run summary.
pub const SUMMARY_FILE: &str = "resumo.json";
/// File name of the HTML report.
pub const REPORT_FILE: &str = "relatorio.html";

/// Everything one `report` run produced.
#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub processed: ProcessedWorkbook,
    /// Paths written, in write order.
    pub artifacts: Vec<PathBuf>,
}

pub fn run_report(args: &ReportArgs) -> Result<RunResult> {
    let workbook_dir = &args.workbook_dir;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| workbook_dir.join("output"));

    // =========================================================================
    // Stage 1: Load - Read every sheet of the workbook
    // =========================================================================
    let load_span = info_span!("load", workbook = %workbook_dir.display());
    let load_start = Instant::now();
    let mut workbook = load_span
        .in_scope(|| load_workbook(workbook_dir))
        .context("load workbook")?;
    info!(
        workbook = %workbook.name,
        sheets = workbook.sheets.len(),
        records = workbook.record_count(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    if !args.sheets.is_empty() {
        filter_sheets(&mut workbook.sheets, &args.sheets)?;
        info!(sheets = workbook.sheets.len(), "sheet filter applied");
    }

    // =========================================================================
    // Stage 2: Process - Resolve columns, clean records, summarize
    // =========================================================================
    let process_span = info_span!("process", workbook = %workbook.name);
    let process_start = Instant::now();
    let processed = process_span.in_scope(|| process_workbook(&workbook));
    info!(
        records = processed.record_count(),
        duration_ms = process_start.elapsed().as_millis(),
        "processing complete"
    );

    // =========================================================================
    // Stage 3: Export - Cleaned CSVs, JSON summary, HTML report
    // =========================================================================
    let export_span = info_span!("export", output_dir = %output_dir.display());
    let _export_guard = export_span.enter();
    let mut artifacts = Vec::new();
    if !args.no_export {
        let clean_dir = output_dir.join(CLEAN_DIR);
        let written =
            write_clean_csv(&clean_dir, &processed).context("write cleaned CSV exports")?;
        artifacts.extend(written);
    }
    let summary_path = output_dir.join(SUMMARY_FILE);
    write_summary_json(&summary_path, &processed).context("write JSON summary")?;
    artifacts.push(summary_path);
    if !args.no_html {
        let report_path = output_dir.join(REPORT_FILE);
        write_html_report(&report_path, &processed).context("write HTML report")?;
        artifacts.push(report_path);
    }

    Ok(RunResult {
        output_dir,
        processed,
        artifacts,
    })
}

/// Keeps only the requested sheets, in workbook order. Requesting a sheet
/// the workbook does not have is an input mistake and aborts the run.
fn filter_sheets(sheets: &mut Vec<callrep_model::RawSheet>, requested: &[String]) -> Result<()> {
    let available: BTreeSet<&str> = sheets.iter().map(|sheet| sheet.name.as_str()).collect();
    for name in requested {
        if !available.contains(name.as_str()) {
            bail!(
                "sheet '{}' not found in workbook (available: {})",
                name,
                available.into_iter().collect::<Vec<_>>().join(", ")
            );
        }
    }
    sheets.retain(|sheet| requested.iter().any(|name| name == &sheet.name));
    Ok(())
}

pub fn run_outcomes() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Matches")]);
    apply_table_style(&mut table);
    for (category, variants) in exact_variants() {
        table.add_row(vec![category.label().to_string(), variants.join(", ")]);
    }
    table.add_row(vec![
        OutcomeCategory::CallbackRequested.label().to_string(),
        format!("any text containing '{CALLBACK_MARKER}'"),
    ]);
    table.add_row(vec![
        OutcomeCategory::NotInformed.label().to_string(),
        "blank or missing outcome cell".to_string(),
    ]);
    table.add_row(vec![
        "(other)".to_string(),
        "anything else, kept verbatim".to_string(),
    ]);
    println!("{table}");
    Ok(())
}
