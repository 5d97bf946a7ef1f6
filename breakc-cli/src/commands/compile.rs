//! Compile command implementation

use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use breakc_core::emit::HeaderOptions;
use breakc_core::{compile, CompileOptions, Compilation};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the compile command
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Rule file to compile
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format [default: header]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Name of the table array (default: output or input file stem, upper-cased)
    #[arg(short, long, value_name = "NAME")]
    pub table_name: Option<String>,

    /// Prefix of every state enumerator [default: STATE_]
    #[arg(long, value_name = "PREFIX")]
    pub state_prefix: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Treat every warning as an error
    #[arg(long)]
    pub deny_warnings: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CompileArgs {
    /// Execute the compile command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let source = FileReader::read_text(&self.input)?;
        let compilation = compile(&source, &self.compile_options(&config))
            .with_context(|| format!("Failed to compile {}", self.input.display()))?;

        for diagnostic in &compilation.diagnostics {
            log::warn!("{}: {diagnostic}", self.input.display());
        }

        // Rendered in full before anything is written.
        let bytes = self.render(&config, &compilation)?;
        output::write_output(&bytes, self.output.as_deref())?;

        if let Some(path) = &self.output {
            if !self.quiet {
                eprintln!(
                    "{} -> {}: {} states ({} before merging)",
                    self.input.display(),
                    path.display(),
                    compilation.machine.states.len(),
                    compilation.raw_states
                );
            }
        }
        Ok(())
    }

    fn compile_options(&self, config: &CliConfig) -> CompileOptions {
        if self.deny_warnings {
            config.diagnostics.deny_warnings()
        } else {
            config.diagnostics
        }
    }

    fn header_options(&self, config: &CliConfig) -> HeaderOptions {
        let table_name = self
            .table_name
            .clone()
            .or_else(|| config.output.table_name.clone())
            .unwrap_or_else(|| output::default_table_name(&self.input, self.output.as_deref()));

        HeaderOptions {
            table_name,
            state_prefix: self
                .state_prefix
                .clone()
                .unwrap_or_else(|| config.output.state_prefix.clone()),
            source_name: Some(FileReader::display_name(&self.input)),
            header_name: self.output.as_deref().map(FileReader::display_name),
        }
    }

    fn render(&self, config: &CliConfig, compilation: &Compilation) -> Result<Vec<u8>> {
        let format = self.format.unwrap_or(config.output.format);
        let emitter = output::emitter(format, self.header_options(config), config.output.pretty_json);
        emitter
            .render(&compilation.machine)
            .context("Failed to render output")
    }
}
