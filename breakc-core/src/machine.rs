//! The minimized state machine

use crate::rules::BreakAction;
use serde::Serialize;

/// One cell of a canonical state row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Action {
    /// Break verdict before the token
    pub action: BreakAction,
    /// Canonical index of the successor state
    pub next: usize,
}

/// A state after minimization, standing for one or more raw states
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalState {
    /// Position in [`Machine::states`]
    pub index: usize,
    /// Raw state labels merged into this state, in encounter order
    pub labels: Vec<String>,
    /// One action per token, in alphabet order
    pub row: Vec<Action>,
}

impl CanonicalState {
    /// Canonical name: the merged labels joined by `_`
    pub fn name(&self) -> String {
        self.labels.join("_")
    }
}

/// Token alphabet, start state and canonical states
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Machine {
    /// Token alphabet in declaration order; fixes column order
    pub tokens: Vec<String>,
    /// Canonical index of the start state
    pub start: usize,
    /// Canonical states in index order
    pub states: Vec<CanonicalState>,
}

impl Machine {
    /// Column index of a token
    pub fn token_index(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    /// Canonical index of the group containing a raw state label
    pub fn state_of(&self, label: &str) -> Option<usize> {
        self.states
            .iter()
            .find(|s| s.labels.iter().any(|l| l == label))
            .map(|s| s.index)
    }

    /// The action for a canonical state and a token, both by name
    pub fn action(&self, label: &str, token: &str) -> Option<Action> {
        let state = self.state_of(label)?;
        let column = self.token_index(token)?;
        self.states[state].row.get(column).copied()
    }

    /// Follow `tokens` from the start state, returning the break verdict
    /// before each one
    pub fn run<'t>(
        &self,
        tokens: impl IntoIterator<Item = &'t str>,
    ) -> Option<Vec<BreakAction>> {
        let mut state = self.start;
        let mut actions = Vec::new();
        for token in tokens {
            let cell = self.states[state].row[self.token_index(token)?];
            actions.push(cell.action);
            state = cell.next;
        }
        Some(actions)
    }
}
