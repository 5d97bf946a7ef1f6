//! Serialization of a compiled machine
//!
//! The C header is the artifact consumed by the segmentation engine; JSON is
//! provided for tooling that wants to inspect the table.

use crate::machine::Machine;
use std::io::{self, Write};

pub mod header;
pub mod json;

pub use header::{HeaderEmitter, HeaderOptions};
pub use json::JsonEmitter;

/// Something that can write a machine to a byte sink
pub trait Emitter {
    /// Write `machine` to `writer`
    fn emit(&self, machine: &Machine, writer: &mut dyn Write) -> io::Result<()>;

    /// Render `machine` into memory, so nothing is written on failure
    fn render(&self, machine: &Machine) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.emit(machine, &mut buffer)?;
        Ok(buffer)
    }
}
