//! Compilation options

use crate::diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};

/// How a diagnostic is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Drop the diagnostic silently
    Ignore,
    /// Report the diagnostic and continue
    #[default]
    Warn,
    /// Abort compilation
    Deny,
}

/// Options controlling how findings in a rule file are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileOptions {
    /// A matched break rule whose right-hand side is not a declared token
    pub undeclared_rhs: Policy,
    /// No `-> start` directive in the rule file
    pub missing_start: Policy,
}

impl CompileOptions {
    /// Every diagnostic is fatal
    pub fn strict() -> Self {
        Self {
            undeclared_rhs: Policy::Deny,
            missing_start: Policy::Deny,
        }
    }

    /// Upgrade every `warn` policy to `deny`, leaving `ignore` alone
    pub fn deny_warnings(mut self) -> Self {
        for policy in [&mut self.undeclared_rhs, &mut self.missing_start] {
            if *policy == Policy::Warn {
                *policy = Policy::Deny;
            }
        }
        self
    }

    /// Policy governing a particular diagnostic
    pub fn policy_for(&self, diagnostic: &Diagnostic) -> Policy {
        match diagnostic {
            Diagnostic::UndeclaredRhs { .. } => self.undeclared_rhs,
            Diagnostic::MissingStart => self.missing_start,
        }
    }
}
