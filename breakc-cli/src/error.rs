//! Error handling for the CLI application

use std::fmt;

/// Failures that originate in the CLI rather than in the compiler
#[derive(Debug)]
pub enum CliError {
    /// No rule file matched the given patterns
    NoFilesMatched(Vec<String>),
    /// A glob pattern could not be parsed
    InvalidPattern(String),
    /// The configuration file is not valid TOML or has bad values
    ConfigError(String),
    /// The output file exists and overwriting was not requested
    OutputExists(String),
    /// Some rule files failed `check`
    CheckFailed { failed: usize, total: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoFilesMatched(patterns) => {
                write!(f, "No rule files match: {}", patterns.join(" "))
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputExists(path) => {
                write!(f, "{path} already exists (use --force to overwrite)")
            }
            CliError::CheckFailed { failed, total } => {
                write!(f, "{failed} of {total} rule files failed")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
