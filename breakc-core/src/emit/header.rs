//! C header output
//!
//! The header declares an anonymous `enum` of state identifiers followed by
//! a `[state][token]` table of `BREAK( next )` / `NO_BREAK( next )` cells.
//! The including file defines `ACTION`, `BREAK` and `NO_BREAK`.

use super::Emitter;
use crate::machine::Machine;
use crate::rules::BreakAction;
use std::collections::HashSet;
use std::io::{self, Write};

/// Naming options for the generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Name of the table array
    pub table_name: String,
    /// Prefix of every state enumerator
    pub state_prefix: String,
    /// File name of the rule source, for the banner
    pub source_name: Option<String>,
    /// File name of the header itself, for the banner
    pub header_name: Option<String>,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            table_name: "BREAK_TABLE".to_string(),
            state_prefix: "STATE_".to_string(),
            source_name: None,
            header_name: None,
        }
    }
}

/// Writes a machine as a C header
#[derive(Debug, Clone, Default)]
pub struct HeaderEmitter {
    options: HeaderOptions,
}

impl HeaderEmitter {
    /// Create a header emitter
    pub fn new(options: HeaderOptions) -> Self {
        Self { options }
    }

    /// Enumerator for every canonical state, unique within the machine
    pub fn state_identifiers(&self, machine: &Machine) -> Vec<String> {
        let mut used = HashSet::new();
        machine
            .states
            .iter()
            .map(|state| {
                let base = identifier(&format!("{}{}", self.options.state_prefix, state.name()));
                let mut ident = base.clone();
                let mut suffix = state.index;
                while !used.insert(ident.clone()) {
                    ident = format!("{base}_{suffix}");
                    suffix += 1;
                }
                ident
            })
            .collect()
    }

    fn banner(&self, machine: &Machine, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "//")?;
        if let Some(name) = &self.options.header_name {
            writeln!(writer, "//  {name}")?;
            writeln!(writer, "//")?;
        }
        match &self.options.source_name {
            Some(source) => writeln!(writer, "//  Generated by breakc from {source}. Do not edit.")?,
            None => writeln!(writer, "//  Generated by breakc. Do not edit.")?,
        }
        writeln!(writer, "//")?;
        writeln!(
            writer,
            "//  {} tokens, {} states.",
            machine.tokens.len(),
            machine.states.len()
        )?;
        writeln!(writer, "//")?;
        writeln!(writer)
    }
}

impl Emitter for HeaderEmitter {
    fn emit(&self, machine: &Machine, writer: &mut dyn Write) -> io::Result<()> {
        let idents = self.state_identifiers(machine);
        self.banner(machine, writer)?;

        writeln!(writer, "enum")?;
        writeln!(writer, "{{")?;
        for (ident, state) in idents.iter().zip(&machine.states) {
            writeln!(writer, "    {ident} = {},", state.index)?;
        }
        writeln!(writer, "}};")?;
        writeln!(writer)?;

        let width = idents.iter().map(|i| i.len()).max().unwrap_or(0) + "NO_BREAK(  ),".len();
        let table = identifier(&self.options.table_name);
        writeln!(
            writer,
            "static const ACTION {table}[][ {} ] =",
            machine.tokens.len()
        )?;
        writeln!(writer, "{{")?;
        for state in &machine.states {
            let start = if state.index == machine.start { " (start)" } else { "" };
            writeln!(writer, "    // {}{start}", state.labels.join(" "))?;
            writeln!(writer, "    {{")?;
            for (cell, token) in state.row.iter().zip(&machine.tokens) {
                let macro_name = match cell.action {
                    BreakAction::Break => "BREAK",
                    BreakAction::NoBreak => "NO_BREAK",
                };
                let text = format!("{macro_name}( {} ),", idents[cell.next]);
                writeln!(writer, "        {text:<width$} // {token}")?;
            }
            writeln!(writer, "    }},")?;
        }
        writeln!(writer, "}};")?;
        writer.flush()
    }
}

/// Replace everything a C identifier cannot contain with `_`
fn identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Action, CanonicalState};

    fn machine() -> Machine {
        Machine {
            tokens: vec!["A".into(), "B".into()],
            start: 0,
            states: vec![
                CanonicalState {
                    index: 0,
                    labels: vec!["S0".into()],
                    row: vec![
                        Action {
                            action: BreakAction::Break,
                            next: 1,
                        },
                        Action {
                            action: BreakAction::NoBreak,
                            next: 1,
                        },
                    ],
                },
                CanonicalState {
                    index: 1,
                    labels: vec!["B".into(), "A".into()],
                    row: vec![
                        Action {
                            action: BreakAction::NoBreak,
                            next: 0,
                        },
                        Action {
                            action: BreakAction::NoBreak,
                            next: 1,
                        },
                    ],
                },
            ],
        }
    }

    fn render(options: HeaderOptions) -> String {
        let bytes = HeaderEmitter::new(options).render(&machine()).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_full_header() {
        let output = render(HeaderOptions {
            table_name: "UAX_TEST".into(),
            source_name: Some("test.rules".into()),
            header_name: Some("test.h".into()),
            ..HeaderOptions::default()
        });
        let expected = "\
//
//  test.h
//
//  Generated by breakc from test.rules. Do not edit.
//
//  2 tokens, 2 states.
//

enum
{
    STATE_S0 = 0,
    STATE_B_A = 1,
};

static const ACTION UAX_TEST[][ 2 ] =
{
    // S0 (start)
    {
        BREAK( STATE_B_A ),    // A
        NO_BREAK( STATE_B_A ), // B
    },
    // B A
    {
        NO_BREAK( STATE_S0 ),  // A
        NO_BREAK( STATE_B_A ), // B
    },
};
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_identifiers_are_sanitized() {
        assert_eq!(identifier("STATE_a.b-c"), "STATE_a_b_c");
        assert_eq!(identifier("9lives"), "_9lives");
        assert_eq!(identifier(""), "_");
    }

    #[test]
    fn test_colliding_identifiers_get_index_suffix() {
        let mut m = machine();
        m.states[0].labels = vec!["B_A".into()];
        let idents = HeaderEmitter::default().state_identifiers(&m);
        assert_eq!(idents, vec!["STATE_B_A", "STATE_B_A_1"]);
    }

    #[test]
    fn test_suffixed_identifier_skips_names_already_taken() {
        let state = |index: usize, label: &str| CanonicalState {
            index,
            labels: vec![label.into()],
            row: Vec::new(),
        };
        let m = Machine {
            tokens: Vec::new(),
            start: 0,
            states: vec![state(0, "S"), state(1, "P_y_3"), state(2, "P.y"), state(3, "P-y")],
        };

        let idents = HeaderEmitter::default().state_identifiers(&m);
        assert_eq!(idents, vec!["STATE_S", "STATE_P_y_3", "STATE_P_y", "STATE_P_y_4"]);
        let unique: HashSet<_> = idents.iter().collect();
        assert_eq!(unique.len(), idents.len());
    }

    #[test]
    fn test_empty_prefix() {
        let idents = HeaderEmitter::new(HeaderOptions {
            state_prefix: String::new(),
            ..HeaderOptions::default()
        })
        .state_identifiers(&machine());
        assert_eq!(idents, vec!["S0", "B_A"]);
    }
}
