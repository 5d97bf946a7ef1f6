//! JSON machine output

use super::Emitter;
use crate::machine::Machine;
use std::io::{self, Write};

/// Writes the canonical machine as a JSON document
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter {
    pretty: bool,
}

impl JsonEmitter {
    /// Create a JSON emitter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Emitter for JsonEmitter {
    fn emit(&self, machine: &Machine, mut writer: &mut dyn Write) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, machine)?;
        } else {
            serde_json::to_writer(&mut writer, machine)?;
        }
        writeln!(writer)?;
        writer.flush()
    }
}
