//! Command-line entry point: load a ledger file, compute the report, print it.

pub mod output;

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::{
    analytics::FinancialReport,
    config::Config,
    errors::{AnalyticsError, LedgerError},
    storage::{JsonFileSource, LedgerSource},
    utils::build_info,
};

pub const USAGE: &str = "\
Usage: ledger_analytics_cli [OPTIONS] [DATA_FILE]

Computes revenue, expenses and the headline ratios of a JSON ledger
shaped as { \"data\": [ ... ] }.

Arguments:
  [DATA_FILE]          Ledger file (default: $LEDGER_ANALYTICS_DATA or ./data.json)

Options:
  -c, --config <FILE>  JSON config file (data_path, currency_symbol)
  -h, --help           Print this help
  -V, --version        Print version and build information";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0} (see --help)")]
    Usage(String),
}

impl From<AnalyticsError> for CliError {
    fn from(err: AnalyticsError) -> Self {
        CliError::Ledger(LedgerError::from(err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Report {
        data_path: Option<PathBuf>,
        config_path: Option<PathBuf>,
    },
    Help,
    Version,
}

/// Parses arguments, program name excluded.
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut data_path = None;
    let mut config_path = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "-c" | "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("`{arg}` expects a file path")))?;
                config_path = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(CliError::Usage(format!("unknown option `{flag}`")));
            }
            _ if data_path.is_some() => {
                return Err(CliError::Usage(format!("unexpected argument `{arg}`")));
            }
            _ => data_path = Some(PathBuf::from(&arg)),
        }
    }

    Ok(CliCommand::Report {
        data_path,
        config_path,
    })
}

/// Resolves the effective config: file (or defaults), then env, then CLI path.
pub fn resolve_config(
    data_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<Config, CliError> {
    let base = match config_path {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    let config = base.apply_env();
    Ok(match data_path {
        Some(path) => config.with_data_path(path),
        None => config,
    })
}

pub fn run_cli() -> Result<(), CliError> {
    run_with_args(std::env::args().skip(1))
}

pub fn run_with_args<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    match parse_args(args)? {
        CliCommand::Help => output::plain(USAGE),
        CliCommand::Version => output::plain(build_info::current()),
        CliCommand::Report {
            data_path,
            config_path,
        } => {
            let config = resolve_config(data_path, config_path)?;
            debug!(path = %config.data_path.display(), "loading ledger");
            let document = JsonFileSource::new(&config.data_path).load()?;
            let report = FinancialReport::compute(document.entries())?;

            output::section("Financial Report");
            for line in report.lines_with_symbol(&config.currency_symbol) {
                output::report_line(&line);
            }
        }
    }
    Ok(())
}
