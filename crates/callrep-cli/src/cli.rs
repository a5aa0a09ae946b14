//! CLI argument definitions for the call report pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "callrep",
    version,
    about = "Clean outbound-call contact sheets and build reports",
    long_about = "Clean a workbook of outbound-call contact sheets and build reports.\n\n\
                  Reads every CSV sheet in a workbook directory, normalizes call\n\
                  outcomes, phone numbers, and timestamps, and writes cleaned CSVs\n\
                  plus JSON and HTML summaries."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// ANSI color handling for console output.
    #[command(flatten)]
    pub color: Color,

    /// Set an explicit log level, overriding -v and -q.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log format: pretty and compact for people, json for machines.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Send log output to a file rather than stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a workbook directory and generate cleaned data and reports.
    Report(ReportArgs),

    /// List the canonical outcome categories and their matched spellings.
    Outcomes,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the workbook directory containing one CSV file per sheet.
    #[arg(value_name = "WORKBOOK_DIR")]
    pub workbook_dir: PathBuf,

    /// Output directory for generated files (default: <WORKBOOK_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process only the named sheet (repeatable).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheets: Vec<String>,

    /// Skip the cleaned CSV exports.
    #[arg(long = "no-export")]
    pub no_export: bool,

    /// Skip the HTML report.
    #[arg(long = "no-html")]
    pub no_html: bool,
}

/// Accepted values for `--log-level`.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Accepted values for `--log-format`.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
