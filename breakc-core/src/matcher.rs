//! Rule evaluation for a single (state, token) pair
//!
//! Every cell of the state table is computed by one top-to-bottom scan of
//! the whole rule list:
//!
//! - alias rules rewrite the working state and token names for the rules
//!   after them in the same scan;
//! - the first matching break rule decides the break action;
//! - every matching transition rule overwrites the next state, so the last
//!   one wins.
//!
//! Absent a matching transition, the next state is the token's own name.

use crate::rules::{BreakAction, RuleKind, RuleSet};

/// Outcome of scanning the rules for one (state, token) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<'a> {
    /// Decided break action; `None` if no break rule matched
    pub action: Option<BreakAction>,
    /// Label of the successor state
    pub next: &'a str,
    /// Indices of matched break rules whose concrete right-hand side is not
    /// a declared token
    pub undeclared: Vec<usize>,
}

/// Scan `rules` for the pair (`state`, `token`).
///
/// Alias rewrites only affect this scan's working copies of the two names.
pub fn evaluate<'a>(rules: &'a RuleSet, state: &str, token: &'a str) -> Evaluation<'a> {
    let mut cur_state = state;
    let mut cur_token = token;
    let mut action = None;
    let mut next = token;
    let mut undeclared = Vec::new();

    for (index, rule) in rules.rules().iter().enumerate() {
        match &rule.kind {
            RuleKind::Alias { source, target } => {
                if cur_state == source {
                    cur_state = target.as_str();
                }
                if cur_token == source {
                    cur_token = target.as_str();
                }
            }
            RuleKind::Break {
                lhs,
                action: rule_action,
                rhs,
            } => {
                if !lhs.matches(cur_state) || !rhs.matches(cur_token) {
                    continue;
                }
                if rhs.name().is_some_and(|name| !rules.is_token(name)) {
                    undeclared.push(index);
                }
                if action.is_none() {
                    action = Some(*rule_action);
                }
            }
            RuleKind::Transition {
                lhs,
                token: on,
                next: target,
            } => {
                if lhs.matches(cur_state) && on.matches(cur_token) {
                    next = target.as_str();
                }
            }
        }
    }

    Evaluation {
        action,
        next,
        undeclared,
    }
}
