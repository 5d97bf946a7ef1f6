//! Configuration file support
//!
//! A TOML file with two optional tables:
//!
//! ```toml
//! [diagnostics]
//! undeclared_rhs = "warn"   # ignore | warn | deny
//! missing_start = "deny"
//!
//! [output]
//! format = "header"         # header | json
//! table_name = "UAX14"
//! state_prefix = "STATE_"
//! pretty_json = true
//! ```
//!
//! Missing tables and keys take their defaults. Command-line flags override
//! whatever the file says.

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;
use anyhow::Result;
use breakc_core::CompileOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Diagnostic policies passed to the compiler
    pub diagnostics: CompileOptions,

    /// Output configuration
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Table name; derived from the file names when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    /// Prefix of every state enumerator
    pub state_prefix: String,

    /// Indent JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Header,
            table_name: None,
            state_prefix: "STATE_".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = FileReader::read_text(path)?;
        let config = toml::from_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
