//! Merging of raw states with identical rows
//!
//! Two raw states share a canonical state when their rows are element-wise
//! identical: same break action and same successor *label* in every column.
//! This is a single pass over the raw states, not partition refinement.
//! States whose successors differ in label but would themselves merge are
//! kept apart, and downstream tables depend on that coarser partition.

use crate::builder::{RawMachine, StateId};
use crate::machine::{Action, CanonicalState, Machine};

/// Collapse `raw` into canonical states, indexed in build order
pub fn minimize(raw: RawMachine, tokens: &[String]) -> Machine {
    let mut group_of: Vec<Option<usize>> = vec![None; raw.states.len()];
    let mut groups: Vec<Vec<StateId>> = Vec::new();

    for (position, &id) in raw.order.iter().enumerate() {
        if group_of[id].is_some() {
            continue;
        }
        let group = groups.len();
        let mut members = vec![id];
        group_of[id] = Some(group);

        for &other in &raw.order[position + 1..] {
            if group_of[other].is_none() && raw.states[other].row == raw.states[id].row {
                group_of[other] = Some(group);
                members.push(other);
            }
        }
        groups.push(members);
    }

    let canonical = |id: StateId| group_of[id].unwrap_or_default();

    let states: Vec<CanonicalState> = groups
        .iter()
        .enumerate()
        .map(|(index, members)| {
            let first = &raw.states[members[0]];
            CanonicalState {
                index,
                labels: members
                    .iter()
                    .map(|&id| raw.states[id].label.clone())
                    .collect(),
                row: first
                    .row
                    .iter()
                    .map(|cell| Action {
                        action: cell.action,
                        next: canonical(cell.next),
                    })
                    .collect(),
            }
        })
        .collect();

    log::info!(
        "merged {} raw states into {} canonical states",
        raw.order.len(),
        states.len()
    );

    Machine {
        tokens: tokens.to_vec(),
        start: canonical(raw.start),
        states,
    }
}
