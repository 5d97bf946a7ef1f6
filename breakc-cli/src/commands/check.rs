//! Check command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use breakc_core::{compile, CompileOptions};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Rule files or patterns (supports glob)
    #[arg(value_name = "FILE/PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Treat every warning as an error
    #[arg(long)]
    pub deny_warnings: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What compiling one rule file produced
#[derive(Debug)]
struct FileReport {
    raw_states: usize,
    states: usize,
    warnings: usize,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let config = CliConfig::load(self.config.as_deref())?;
        let options = if self.deny_warnings {
            config.diagnostics.deny_warnings()
        } else {
            config.diagnostics
        };

        let files = resolve_patterns(&self.patterns)?;
        log::info!("Checking {} rule files", files.len());

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let mut results = Vec::with_capacity(files.len());
        for path in &files {
            results.push(check_file(path, &options));
            progress.file_completed(&FileReader::display_name(path));
        }
        progress.finish();

        let mut failed = 0;
        for (path, result) in files.iter().zip(&results) {
            match result {
                Ok(report) => println!(
                    "ok    {}: {} states ({} before merging), {} warnings",
                    path.display(),
                    report.states,
                    report.raw_states,
                    report.warnings
                ),
                Err(err) => {
                    failed += 1;
                    println!("FAIL  {}: {err:#}", path.display());
                }
            }
        }

        if failed > 0 {
            return Err(CliError::CheckFailed {
                failed,
                total: files.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn check_file(path: &Path, options: &CompileOptions) -> Result<FileReport> {
    let source = FileReader::read_text(path)?;
    let compilation =
        compile(&source, options).with_context(|| format!("Failed to compile {}", path.display()))?;

    for diagnostic in &compilation.diagnostics {
        log::warn!("{}: {diagnostic}", path.display());
    }
    Ok(FileReport {
        raw_states: compilation.raw_states,
        states: compilation.machine.states.len(),
        warnings: compilation.diagnostics.len(),
    })
}
