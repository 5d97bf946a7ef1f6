//! Output selection and writing

use anyhow::{Context, Result};
use breakc_core::emit::{Emitter, HeaderEmitter, HeaderOptions, JsonEmitter};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Supported output formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// C header with a state enum and an action table
    #[default]
    Header,
    /// JSON document of the minimized machine
    Json,
}

/// Emitter for a format
pub fn emitter(format: OutputFormat, header: HeaderOptions, pretty_json: bool) -> Box<dyn Emitter> {
    match format {
        OutputFormat::Header => Box::new(HeaderEmitter::new(header)),
        OutputFormat::Json => Box::new(JsonEmitter::new(pretty_json)),
    }
}

/// Table name derived from the output file stem, else the input file stem
pub fn default_table_name(input: &Path, output: Option<&Path>) -> String {
    output
        .and_then(Path::file_stem)
        .or_else(|| input.file_stem())
        .map(|stem| stem.to_string_lossy().to_uppercase())
        .unwrap_or_else(|| HeaderOptions::default().table_name)
}

/// Write rendered output to a file, or to stdout when no path is given.
///
/// A file is written to a temporary sibling and renamed into place, so the
/// path holds either its previous content or the complete output.
pub fn write_output(bytes: &[u8], path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => replace_file(path, bytes)
            .with_context(|| format!("Failed to write to {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")
        }
    }
}

fn replace_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.persist(path)?;
    Ok(())
}
