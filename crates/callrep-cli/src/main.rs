use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use callrep_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use callrep_cli::commands::{run_outcomes, run_report};
use callrep_cli::logging::{LogConfig, LogFormat, init_logging};
use callrep_cli::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();

    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: could not set up logging: {error}");
        std::process::exit(1);
    }

    let outcome = match cli.command {
        Command::Report(args) => run_report(&args).map(|result| print_summary(&result)),
        Command::Outcomes => run_outcomes(),
    };
    if let Err(error) = outcome {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Resolves the logging configuration from the parsed arguments.
///
/// An explicit `--log-level` wins over `-v`/`-q`; `RUST_LOG` is honored
/// only when neither was given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
        with_ansi,
        ..LogConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn default_run_keeps_env_filter_at_warn() {
        let config = log_config_from_cli(&parse(&["callrep", "outcomes"]));
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }

    #[test]
    fn verbosity_flags_disable_the_env_filter() {
        let config = log_config_from_cli(&parse(&["callrep", "-vv", "outcomes"]));
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn explicit_log_level_overrides_verbosity() {
        let config =
            log_config_from_cli(&parse(&["callrep", "-v", "--log-level", "trace", "outcomes"]));
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn json_log_format_is_wired_through() {
        let config = log_config_from_cli(&parse(&["callrep", "--log-format", "json", "outcomes"]));
        assert_eq!(config.format, LogFormat::Json);
    }
}
