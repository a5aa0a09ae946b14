//! Logging setup over `tracing` and `tracing-subscriber`.
//!
//! Levels as used across the pipeline:
//!
//! - `error`: structural faults that abort the run
//! - `warn`: data-quality notices (unresolved sheets, skipped files)
//! - `info`: stage progress and summary counts
//! - `debug`: per-sheet and per-column resolution detail

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Configuration for the global subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to the workspace crates.
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when set; used when no explicit level flag was given.
    pub use_env_filter: bool,
    /// Include the emitting module path in output.
    pub with_target: bool,
    /// Include timestamps in pretty/compact output (JSON always has them).
    pub with_timestamps: bool,
    /// ANSI colors in output.
    pub with_ansi: bool,
    pub format: LogFormat,
    /// When set, logs go to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human output.
    #[default]
    Pretty,
    /// One event per line.
    Compact,
    /// One JSON object per line, span close events included.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            with_target: false,
            with_timestamps: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, Mutex::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Installs the subscriber with an explicit writer. Split out from
/// [`init_logging`] so the file and stderr paths share one setup.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(config.with_target)
            .with_span_events(fmt::format::FmtSpan::CLOSE)
            .boxed(),
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
    };

    tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(layer)
        .init();
}

/// Directive string holding every workspace crate at `level`; dependencies
/// stay at the same global level.
fn default_directives(level: &str) -> String {
    format!(
        "{level},callrep_cli={level},callrep_core={level},callrep_ingest={level},\
         callrep_map={level},callrep_model={level},callrep_report={level},\
         callrep_transform={level}"
    )
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let directives = default_directives(&config.level_filter.to_string());
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
    } else {
        EnvFilter::new(directives)
    }
}

#[cfg(test)]
mod tests {
    use super::default_directives;

    #[test]
    fn directives_cover_every_workspace_crate() {
        let directives = default_directives("debug");
        assert!(directives.starts_with("debug,"));
        for member in [
            "callrep_cli",
            "callrep_core",
            "callrep_ingest",
            "callrep_map",
            "callrep_model",
            "callrep_report",
            "callrep_transform",
        ] {
            assert!(directives.contains(&format!("{member}=debug")));
        }
    }

    #[test]
    fn off_filter_is_a_valid_directive_level() {
        let directives = default_directives("off");
        assert!(directives.contains("callrep_ingest=off"));
    }
}
