//! End-to-end runs of the report command against a temporary workbook.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use callrep_cli::cli::ReportArgs;
use callrep_cli::commands::{CLEAN_DIR, REPORT_FILE, SUMMARY_FILE, run_report};

fn write_workbook(dir: &Path) {
    fs::write(
        dir.join("CARGAS NITEROI.csv"),
        "CNPJ,RAZÃO SOCIAL,TEL 1,SITUAÇÃO,Data / Hora 1\n\
         27865757000102,TRANSPORTES ALFA LTDA,5531999998888,NÃO ATENDE,2025-10-02 15:33:00\n\
         12345678000199,BETA SA,5521977776666,Retornar amanhã,2025-10-02 09:10:00\n",
    )
    .unwrap();
    fs::write(
        dir.join("BITREM.csv"),
        "CNPJ,SITUAÇÃO\n98765432000155,baixada\n",
    )
    .unwrap();
}

fn args(workbook_dir: &Path, output_dir: &Path) -> ReportArgs {
    ReportArgs {
        workbook_dir: workbook_dir.to_path_buf(),
        output_dir: Some(output_dir.to_path_buf()),
        sheets: Vec::new(),
        no_export: false,
        no_html: false,
    }
}

#[test]
fn test_report_writes_all_artifacts() {
    let workbook = TempDir::new().unwrap();
    write_workbook(workbook.path());
    let out = TempDir::new().unwrap();

    let result = run_report(&args(workbook.path(), out.path())).unwrap();

    assert_eq!(result.processed.record_count(), 3);
    assert_eq!(result.processed.sheets.len(), 2);
    let clean = out.path().join(CLEAN_DIR);
    assert!(clean.join("BITREM.csv").exists());
    assert!(clean.join("CARGAS NITEROI.csv").exists());
    assert!(clean.join("Consolidado.csv").exists());
    assert!(out.path().join(SUMMARY_FILE).exists());
    assert!(out.path().join(REPORT_FILE).exists());
    assert_eq!(result.artifacts.len(), 5);

    let summary = fs::read_to_string(out.path().join(SUMMARY_FILE)).unwrap();
    assert!(summary.contains("\"Consolidado\""));
    assert!(summary.contains("\"Retornar em horário\""));
}

#[test]
fn test_sheet_filter_limits_the_run() {
    let workbook = TempDir::new().unwrap();
    write_workbook(workbook.path());
    let out = TempDir::new().unwrap();
    let mut args = args(workbook.path(), out.path());
    args.sheets = vec!["BITREM".to_string()];

    let result = run_report(&args).unwrap();

    assert_eq!(result.processed.sheets.len(), 1);
    assert_eq!(result.processed.record_count(), 1);
    let clean = out.path().join(CLEAN_DIR);
    assert!(clean.join("BITREM.csv").exists());
    assert!(!clean.join("CARGAS NITEROI.csv").exists());
    assert!(clean.join("Consolidado.csv").exists());
}

#[test]
fn test_unknown_sheet_name_is_rejected() {
    let workbook = TempDir::new().unwrap();
    write_workbook(workbook.path());
    let out = TempDir::new().unwrap();
    let mut args = args(workbook.path(), out.path());
    args.sheets = vec!["TRUCK".to_string()];

    let error = run_report(&args).unwrap_err();

    assert!(format!("{error:#}").contains("'TRUCK' not found"));
    assert!(!out.path().join(SUMMARY_FILE).exists());
}

#[test]
fn test_no_export_and_no_html_still_write_the_summary() {
    let workbook = TempDir::new().unwrap();
    write_workbook(workbook.path());
    let out = TempDir::new().unwrap();
    let mut args = args(workbook.path(), out.path());
    args.no_export = true;
    args.no_html = true;

    let result = run_report(&args).unwrap();

    assert_eq!(result.artifacts, vec![out.path().join(SUMMARY_FILE)]);
    assert!(!out.path().join(CLEAN_DIR).exists());
    assert!(!out.path().join(REPORT_FILE).exists());
}

#[test]
fn test_default_output_dir_lives_under_the_workbook() {
    let workbook = TempDir::new().unwrap();
    write_workbook(workbook.path());
    let mut args = args(workbook.path(), workbook.path());
    args.output_dir = None;

    let result = run_report(&args).unwrap();

    assert_eq!(result.output_dir, workbook.path().join("output"));
    assert!(workbook.path().join("output").join(SUMMARY_FILE).exists());
}

#[test]
fn test_missing_workbook_dir_is_an_error() {
    let out = TempDir::new().unwrap();
    let error = run_report(&args(Path::new("/nonexistent/workbook"), out.path())).unwrap_err();
    assert!(format!("{error:#}").contains("load workbook"));
}
