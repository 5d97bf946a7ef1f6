//! Error types for rule compilation

use crate::diagnostics::Diagnostic;
use thiserror::Error;

/// Reason a rule line could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An arrow appears with the wrong word count or in the wrong position
    #[error("malformed arrow rule, expected `A -> B`, `A token -> C` or `-> start`")]
    MalformedArrow,

    /// The action word of a break rule is neither `-` nor `x`
    #[error("invalid break action `{0}`, expected `-` or `x`")]
    InvalidAction(String),

    /// A break rule with more than `lhs action rhs`
    #[error("too many words for a break rule")]
    TooManyWords,

    /// A reserved symbol used where a token or state name is expected
    #[error("reserved symbol `{0}` cannot be used as a name")]
    ReservedSymbol(String),

    /// The wildcard used where a concrete name is required
    #[error("wildcard `.` is not allowed here")]
    MisplacedWildcard,

    /// A rule-group label line with nothing before the colon
    #[error("empty rule-group label")]
    EmptyLabel,
}

/// A fatal error in the rule source, tied to the offending line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}: `{text}`")]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    /// The line as written, comment included
    pub text: String,
    /// What was wrong with it
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, text: &str, kind: ParseErrorKind) -> Self {
        Self {
            line,
            text: text.trim_end().to_string(),
            kind,
        }
    }
}

/// Errors that abort compilation before any output is produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Malformed rule source
    #[error("parse error at {0}")]
    Parse(#[from] ParseError),

    /// The rule file declares no tokens, so there is no table to build
    #[error("rule source declares no tokens")]
    NoTokens,

    /// No break rule matched a reachable (state, token) pair
    #[error("no break rule matches state `{state}` on token `{token}`")]
    UndecidedBreak {
        /// Raw state label being built
        state: String,
        /// Token of the undecided column
        token: String,
    },

    /// A diagnostic whose policy is `deny`
    #[error("denied: {0}")]
    Denied(Diagnostic),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
