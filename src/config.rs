//! Environment configuration and logger setup for the binary.
use std::env;

use crate::error::{CliError, CliResult, ErrorKind};

pub const LOG_ENV: &str = "CMDARGS_LOG";
pub const FORMAT_ENV: &str = "CMDARGS_FORMAT";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn parse_output_format(value: &str) -> CliResult<OutputFormat> {
    let value = value.trim();
    match value.to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(CliError::new(
            ErrorKind::Config,
            format!("Invalid {FORMAT_ENV} value: {value}"),
        )
        .with_context("Valid values: text, json")),
    }
}

/// Output format from the environment; unset or empty means text.
pub fn load_output_format() -> CliResult<OutputFormat> {
    match env::var(FORMAT_ENV) {
        Ok(value) if value.trim().is_empty() => Ok(OutputFormat::Text),
        Ok(value) => parse_output_format(&value),
        Err(env::VarError::NotPresent) => Ok(OutputFormat::Text),
        Err(env::VarError::NotUnicode(_)) => Err(CliError::new(
            ErrorKind::Config,
            format!("{FORMAT_ENV} is not valid unicode"),
        )),
    }
}

pub fn init_logging() {
    let env = env_logger::Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
