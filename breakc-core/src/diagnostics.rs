//! Non-fatal findings reported during compilation

use serde::Serialize;
use std::fmt;

/// Something suspicious about a rule file that does not stop compilation
/// unless its policy is `deny`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// A break rule matched while its concrete right-hand side is not a
    /// declared token
    UndeclaredRhs {
        /// Source line of the rule
        line: usize,
        /// Rule-group label of the rule
        group: Option<String>,
        /// The undeclared right-hand side
        rhs: String,
        /// Raw state in which the rule first matched
        state: String,
        /// Token on which the rule first matched
        token: String,
    },

    /// The rule file has no `-> start` directive; the machine is built from
    /// the empty state label
    MissingStart,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UndeclaredRhs {
                line,
                group,
                rhs,
                state,
                token,
            } => {
                write!(f, "line {line}")?;
                if let Some(group) = group {
                    write!(f, " ({group})")?;
                }
                write!(
                    f,
                    ": break rule matched `{state}` on `{token}` but its right-hand side `{rhs}` is not a declared token"
                )
            }
            Diagnostic::MissingStart => {
                write!(f, "no start state declared, building from the empty state")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_rhs_display() {
        let diagnostic = Diagnostic::UndeclaredRhs {
            line: 4,
            group: Some("LB9".into()),
            rhs: "XX".into(),
            state: "AL".into(),
            token: "CM".into(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "line 4 (LB9): break rule matched `AL` on `CM` but its right-hand side `XX` is not a declared token"
        );
    }

    #[test]
    fn test_missing_start_display() {
        assert!(Diagnostic::MissingStart
            .to_string()
            .starts_with("no start state declared"));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_string(&Diagnostic::MissingStart).unwrap();
        assert_eq!(json, r#"{"kind":"missing-start"}"#);
    }
}
