//! Rule language model
//!
//! A rule file declares an ordered token alphabet, a start state and an
//! ordered list of rules. Rule order is precedence: break rules are decided
//! by the first match, transition rules by the last, and alias rules rewrite
//! names only for the rules that follow them.

mod parser;

pub use parser::parse;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Comment marker; everything after it on a line is ignored
pub const COMMENT: &str = "--";

/// Arrow used by alias, transition and start-state lines
pub const ARROW: &str = "->";

/// Wildcard written explicitly on either side of a rule
pub const WILDCARD: &str = ".";

/// Suffix marking a rule-group label line
pub const LABEL_MARKER: char = ':';

/// Break verdict attached to a (state, token) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakAction {
    /// A boundary is allowed before the token (`-`)
    Break,
    /// A boundary is prohibited before the token (`x`)
    NoBreak,
}

impl BreakAction {
    /// Parse a rule-language action symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(BreakAction::Break),
            "x" => Some(BreakAction::NoBreak),
            _ => None,
        }
    }

    /// The rule-language symbol for this action
    pub fn symbol(self) -> &'static str {
        match self {
            BreakAction::Break => "-",
            BreakAction::NoBreak => "x",
        }
    }
}

/// One side of a rule: either a concrete name or the wildcard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Matches every state or token
    Any,
    /// Matches exactly this name
    Name(String),
}

impl Pattern {
    /// Whether the pattern accepts `name`
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Name(n) => n == name,
        }
    }

    /// The concrete name, if this is not the wildcard
    pub fn name(&self) -> Option<&str> {
        match self {
            Pattern::Any => None,
            Pattern::Name(n) => Some(n),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Any => f.write_str(WILDCARD),
            Pattern::Name(n) => f.write_str(n),
        }
    }
}

/// The three rule shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// `source -> target`
    Alias { source: String, target: String },
    /// `lhs token -> next`
    Transition {
        lhs: Pattern,
        token: Pattern,
        next: String,
    },
    /// `lhs action rhs`
    Break {
        lhs: Pattern,
        action: BreakAction,
        rhs: Pattern,
    },
}

/// A parsed rule with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// What the rule does
    pub kind: RuleKind,
    /// Rule-group label in effect when the rule was declared
    pub group: Option<String>,
    /// 1-based source line
    pub line: usize,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Alias { source, target } => write!(f, "{source} {ARROW} {target}"),
            RuleKind::Transition { lhs, token, next } => {
                write!(f, "{lhs} {token} {ARROW} {next}")
            }
            RuleKind::Break { lhs, action, rhs } => {
                write!(f, "{lhs} {} {rhs}", action.symbol())
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.group {
            Some(group) => write!(f, "line {} ({group}): {}", self.line, self.kind),
            None => write!(f, "line {}: {}", self.line, self.kind),
        }
    }
}

/// Immutable result of parsing a rule file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    tokens: Vec<String>,
    token_set: HashSet<String>,
    rules: Vec<Rule>,
    start: Option<String>,
}

impl RuleSet {
    /// Assemble a rule set. Duplicate tokens keep their first position.
    pub fn new(tokens: Vec<String>, rules: Vec<Rule>, start: Option<String>) -> Self {
        let mut token_set = HashSet::with_capacity(tokens.len());
        let tokens = tokens
            .into_iter()
            .filter(|t| token_set.insert(t.clone()))
            .collect();
        Self {
            tokens,
            token_set,
            rules,
            start,
        }
    }

    /// Token alphabet in declaration order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Declared start state, if any
    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    /// Whether `name` is a declared token
    #[inline]
    pub fn is_token(&self, name: &str) -> bool {
        self.token_set.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_action_symbols() {
        assert_eq!(BreakAction::from_symbol("-"), Some(BreakAction::Break));
        assert_eq!(BreakAction::from_symbol("x"), Some(BreakAction::NoBreak));
        assert_eq!(BreakAction::from_symbol("X"), None);
        assert_eq!(BreakAction::Break.symbol(), "-");
        assert_eq!(BreakAction::NoBreak.symbol(), "x");
    }

    #[test]
    fn test_pattern_matching() {
        assert!(Pattern::Any.matches("AL"));
        assert!(Pattern::Name("AL".into()).matches("AL"));
        assert!(!Pattern::Name("AL".into()).matches("NU"));
        assert_eq!(Pattern::Any.name(), None);
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule {
            kind: RuleKind::Break {
                lhs: Pattern::Any,
                action: BreakAction::NoBreak,
                rhs: Pattern::Name("ZWJ".into()),
            },
            group: Some("GB9".into()),
            line: 12,
        };
        assert_eq!(rule.to_string(), "line 12 (GB9): . x ZWJ");
    }

    #[test]
    fn test_rule_set_deduplicates_tokens() {
        let set = RuleSet::new(
            vec!["A".into(), "B".into(), "A".into()],
            Vec::new(),
            Some("A".into()),
        );
        assert_eq!(set.tokens(), ["A", "B"]);
        assert!(set.is_token("B"));
        assert!(!set.is_token("C"));
        assert_eq!(set.start(), Some("A"));
    }
}
