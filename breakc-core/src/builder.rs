//! Reachable state exploration
//!
//! States are discovered from the start label with a LIFO worklist. Each
//! label is interned once into an arena; rows refer to successors by arena
//! handle, so two rows are equal exactly when their actions and successor
//! labels are equal.

use crate::diagnostics::Diagnostic;
use crate::error::{CompileError, Result};
use crate::matcher::evaluate;
use crate::rules::{BreakAction, RuleKind, RuleSet};
use std::collections::{BTreeMap, HashMap};

/// Arena handle of a raw state
pub type StateId = usize;

/// One cell of a raw state row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawAction {
    /// Break verdict before the token
    pub action: BreakAction,
    /// Successor state handle
    pub next: StateId,
}

/// A state as discovered by the builder, keyed by its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawState {
    /// Label as written in the rules
    pub label: String,
    /// One action per token, in alphabet order
    pub row: Vec<RawAction>,
}

/// Every reachable raw state plus the order they were built in
#[derive(Debug, Clone)]
pub struct RawMachine {
    /// Arena of states indexed by [`StateId`]
    pub states: Vec<RawState>,
    /// Handles in build order
    pub order: Vec<StateId>,
    /// Handle of the start state
    pub start: StateId,
    /// Findings collected while building, one per offending rule
    pub diagnostics: Vec<Diagnostic>,
}

impl RawMachine {
    /// Handle of the state with this label
    pub fn find(&self, label: &str) -> Option<StateId> {
        self.states.iter().position(|s| s.label == label)
    }
}

/// Worklist-driven builder of the raw state set
pub struct StateBuilder<'a> {
    rules: &'a RuleSet,
    states: Vec<RawState>,
    ids: HashMap<&'a str, StateId>,
    built: Vec<bool>,
    order: Vec<StateId>,
    undeclared: BTreeMap<usize, Diagnostic>,
}

impl<'a> StateBuilder<'a> {
    /// Create a builder over a parsed rule set
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            states: Vec::new(),
            ids: HashMap::new(),
            built: Vec::new(),
            order: Vec::new(),
            undeclared: BTreeMap::new(),
        }
    }

    /// Explore every state reachable from `start`
    pub fn build(mut self, start: &'a str) -> Result<RawMachine> {
        let rules = self.rules;
        let start_id = self.intern(start);
        let mut worklist = vec![start_id];

        while let Some(id) = worklist.pop() {
            if self.built[id] {
                continue;
            }

            let label = self.states[id].label.clone();
            let mut row = Vec::with_capacity(rules.tokens().len());
            for token in rules.tokens() {
                let evaluation = evaluate(rules, &label, token);
                let Some(action) = evaluation.action else {
                    return Err(CompileError::UndecidedBreak {
                        state: label,
                        token: token.clone(),
                    });
                };
                for index in evaluation.undeclared {
                    self.report_undeclared(index, &label, token);
                }

                let next = self.intern(evaluation.next);
                row.push(RawAction { action, next });
                worklist.push(next);
            }

            log::debug!("{label}: {}", self.describe(&row));
            self.states[id].row = row;
            self.built[id] = true;
            self.order.push(id);
        }

        log::info!("built {} reachable states", self.order.len());
        Ok(RawMachine {
            states: self.states,
            order: self.order,
            start: start_id,
            diagnostics: self.undeclared.into_values().collect(),
        })
    }

    fn intern(&mut self, label: &'a str) -> StateId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.states.len();
        self.states.push(RawState {
            label: label.to_string(),
            row: Vec::new(),
        });
        self.built.push(false);
        self.ids.insert(label, id);
        id
    }

    fn report_undeclared(&mut self, index: usize, state: &str, token: &str) {
        let rule = &self.rules.rules()[index];
        let RuleKind::Break { rhs, .. } = &rule.kind else {
            return;
        };
        self.undeclared
            .entry(index)
            .or_insert_with(|| Diagnostic::UndeclaredRhs {
                line: rule.line,
                group: rule.group.clone(),
                rhs: rhs.to_string(),
                state: state.to_string(),
                token: token.to_string(),
            });
    }

    /// `(- B) (x A) ...` for the debug dump
    fn describe(&self, row: &[RawAction]) -> String {
        row.iter()
            .map(|cell| format!("({} {})", cell.action.symbol(), self.states[cell.next].label))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
