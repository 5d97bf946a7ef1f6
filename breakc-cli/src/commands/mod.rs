//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod compile;
pub mod generate_config;

/// Compile break rule files into state machine tables
#[derive(Debug, Parser)]
#[command(name = "breakc", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile a rule file into a C header or JSON table
    Compile(compile::CompileArgs),

    /// Compile rule files without writing output and report on each
    Check(check::CheckArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Compile(args) => args.execute(),
            Commands::Check(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` takes precedence
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    // A second initialization only happens in tests and is harmless.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("breakc").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_compile_arguments() {
        let command = parse(&[
            "compile",
            "uax14.rules",
            "uax14.h",
            "--format",
            "json",
            "--table-name",
            "LB",
            "--deny-warnings",
            "-vv",
        ]);
        let Commands::Compile(args) = command else {
            panic!("expected compile");
        };
        assert_eq!(args.input, PathBuf::from("uax14.rules"));
        assert_eq!(args.output, Some(PathBuf::from("uax14.h")));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.table_name.as_deref(), Some("LB"));
        assert!(args.deny_warnings);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_compile_output_is_optional() {
        let Commands::Compile(args) = parse(&["compile", "uax14.rules"]) else {
            panic!("expected compile");
        };
        assert_eq!(args.output, None);
        assert_eq!(args.format, None);
        assert_eq!(args.state_prefix, None);
    }

    #[test]
    fn test_check_requires_a_pattern() {
        assert!(Cli::try_parse_from(["breakc", "check"]).is_err());

        let Commands::Check(args) = parse(&["check", "a.rules", "rules/*.rules", "-q"]) else {
            panic!("expected check");
        };
        assert_eq!(args.patterns, vec!["a.rules", "rules/*.rules"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_generate_config_arguments() {
        let Commands::GenerateConfig(args) = parse(&["generate-config", "breakc.toml"]) else {
            panic!("expected generate-config");
        };
        assert_eq!(args.output, PathBuf::from("breakc.toml"));
        assert!(!args.force);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["breakc", "compile", "a.rules", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
