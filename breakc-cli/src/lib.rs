//! breakc CLI library
//!
//! Command definitions and the file handling around
//! [`breakc_core::compile`] used by the `breakc` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
