//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

const TEMPLATE: &str = r#"# breakc configuration
#
# Pass with `breakc compile --config <FILE>`; command-line flags win over
# the values below.

[diagnostics]
# Policies are "ignore", "warn" or "deny".

# A break rule matched but its right-hand side is not a declared token.
undeclared_rhs = "warn"

# The rule file has no `-> <start>` line. The table is then built from the
# empty state.
missing_start = "warn"

[output]
# "header" or "json"
format = "header"

# Name of the table array. Defaults to the output file name without its
# extension, upper-cased, or the input file name when writing to stdout.
# table_name = "BREAK_TABLE"

# Prefix of every state enumerator in the header.
state_prefix = "STATE_"

# Indent JSON output.
pretty_json = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::OutputExists(self.output.display().to_string()).into());
        }

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!(
            "Use it with: breakc compile --config {} <INPUT> [OUTPUT]",
            self.output.display()
        );
        Ok(())
    }
}
