//! Compiler from break rules to a minimized state machine table
//!
//! A rule file describes when a text boundary (a line break opportunity, a
//! grapheme cluster boundary, ...) is allowed between two character classes.
//! This crate turns it into a table indexed by `[state][token]` that a
//! segmentation engine can walk one character class at a time.
//!
//! # Pipeline
//!
//! - [`rules::parse`] reads the rule language into a [`RuleSet`];
//! - [`matcher::evaluate`] computes one table cell by scanning every rule;
//! - [`builder::StateBuilder`] explores the states reachable from the start;
//! - [`minimize::minimize`] merges states with identical rows;
//! - [`emit`] writes the result as a C header or JSON.
//!
//! # Example
//!
//! ```rust
//! use breakc_core::{compile, BreakAction, CompileOptions};
//!
//! let source = "\
//! A
//! B
//! -> S0
//! S0 - A
//! S0 x B
//! x
//! ";
//!
//! let compilation = compile(source, &CompileOptions::default()).unwrap();
//! let machine = &compilation.machine;
//!
//! // A and B end up with identical rows and share a canonical state.
//! assert_eq!(machine.states.len(), 2);
//! assert_eq!(machine.run(["A", "B"]).unwrap(), vec![BreakAction::Break, BreakAction::NoBreak]);
//! ```

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod machine;
pub mod matcher;
pub mod minimize;
pub mod rules;

pub use config::{CompileOptions, Policy};
pub use diagnostics::Diagnostic;
pub use error::{CompileError, ParseError, ParseErrorKind, Result};
pub use machine::{Action, CanonicalState, Machine};
pub use rules::{BreakAction, Pattern, Rule, RuleKind, RuleSet};

use builder::StateBuilder;

/// Everything produced by a successful compilation
#[derive(Debug, Clone)]
pub struct Compilation {
    /// The parsed rules
    pub rules: RuleSet,
    /// The minimized machine
    pub machine: Machine,
    /// Number of raw states before merging
    pub raw_states: usize,
    /// Diagnostics whose policy is `warn`, in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile rule source into a minimized machine.
///
/// Diagnostics are filtered through `options`: ignored ones are dropped,
/// denied ones abort with [`CompileError::Denied`].
pub fn compile(source: &str, options: &CompileOptions) -> Result<Compilation> {
    let rules = rules::parse(source)?;
    if rules.tokens().is_empty() {
        return Err(CompileError::NoTokens);
    }
    log::info!(
        "parsed {} tokens and {} rules",
        rules.tokens().len(),
        rules.rules().len()
    );

    // A denied missing start must win over anything the build would report.
    let mut diagnostics = Vec::new();
    if rules.start().is_none() {
        apply_policy(options, Diagnostic::MissingStart, &mut diagnostics)?;
    }

    let raw = StateBuilder::new(&rules).build(rules.start().unwrap_or_default())?;
    let raw_states = raw.order.len();
    for diagnostic in raw.diagnostics.iter().cloned() {
        apply_policy(options, diagnostic, &mut diagnostics)?;
    }

    let machine = minimize::minimize(raw, rules.tokens());
    Ok(Compilation {
        rules,
        machine,
        raw_states,
        diagnostics,
    })
}

/// Drop, keep or escalate one diagnostic according to its policy
fn apply_policy(
    options: &CompileOptions,
    diagnostic: Diagnostic,
    kept: &mut Vec<Diagnostic>,
) -> Result<()> {
    match options.policy_for(&diagnostic) {
        Policy::Ignore => Ok(()),
        Policy::Warn => {
            kept.push(diagnostic);
            Ok(())
        }
        Policy::Deny => Err(CompileError::Denied(diagnostic)),
    }
}
