//! Property tests over generated rule files

use breakc_core::builder::StateBuilder;
use breakc_core::emit::{Emitter, HeaderEmitter};
use breakc_core::minimize::minimize;
use breakc_core::rules::parse;
use breakc_core::{compile, CompileOptions};
use proptest::prelude::*;

const TOKENS: [&str; 4] = ["A", "B", "C", "D"];
const NAMES: [&str; 7] = ["A", "B", "C", "D", "S0", "S1", "X"];

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES.to_vec()).prop_map(str::to_string)
}

fn side() -> impl Strategy<Value = String> {
    prop_oneof![Just(".".to_string()), name()]
}

fn action() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["-", "x"])
}

fn rule_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (name(), name()).prop_map(|(a, b)| format!("{a} -> {b}")),
        (side(), side(), name()).prop_map(|(l, t, n)| format!("{l} {t} -> {n}")),
        (side(), action(), side()).prop_map(|(l, a, r)| format!("{l} {a} {r}")),
    ]
}

/// A rule file that always decides every cell through a trailing catch-all
fn rule_source() -> impl Strategy<Value = String> {
    (prop::collection::vec(rule_line(), 0..12), name(), action()).prop_map(
        |(rules, start, fallback)| {
            let mut source = TOKENS.join("\n");
            source.push_str(&format!("\n-> {start}\n"));
            for rule in rules {
                source.push_str(&rule);
                source.push('\n');
            }
            source.push_str(fallback);
            source.push('\n');
            source
        },
    )
}

proptest! {
    #[test]
    fn prop_rows_are_total(source in rule_source()) {
        let compilation = compile(&source, &CompileOptions::default()).unwrap();
        let machine = &compilation.machine;
        prop_assert_eq!(machine.tokens.len(), TOKENS.len());
        for state in &machine.states {
            prop_assert_eq!(state.row.len(), TOKENS.len());
            for cell in &state.row {
                prop_assert!(cell.next < machine.states.len());
            }
        }
    }

    #[test]
    fn prop_compilation_is_deterministic(source in rule_source()) {
        let first = compile(&source, &CompileOptions::default()).unwrap();
        let second = compile(&source, &CompileOptions::default()).unwrap();
        prop_assert_eq!(&first.machine, &second.machine);

        let emitter = HeaderEmitter::default();
        prop_assert_eq!(
            emitter.render(&first.machine).unwrap(),
            emitter.render(&second.machine).unwrap()
        );
    }

    #[test]
    fn prop_groups_are_exactly_the_distinct_rows(source in rule_source()) {
        let rules = parse(&source).unwrap();
        let raw = StateBuilder::new(&rules)
            .build(rules.start().unwrap())
            .unwrap();

        let mut distinct = Vec::new();
        for state in &raw.states {
            if !distinct.contains(&state.row) {
                distinct.push(state.row.clone());
            }
        }

        let machine = minimize(raw.clone(), rules.tokens());
        prop_assert_eq!(machine.states.len(), distinct.len());

        // Raw states land in the same group exactly when their rows match.
        for a in &raw.states {
            for b in &raw.states {
                let same_group = machine.state_of(&a.label) == machine.state_of(&b.label);
                prop_assert_eq!(same_group, a.row == b.row);
            }
        }
    }

    #[test]
    fn prop_canonical_rows_follow_raw_rows(source in rule_source()) {
        let rules = parse(&source).unwrap();
        let raw = StateBuilder::new(&rules)
            .build(rules.start().unwrap())
            .unwrap();
        let machine = minimize(raw.clone(), rules.tokens());

        for state in &raw.states {
            let group = machine.state_of(&state.label).unwrap();
            for (cell, canonical) in state.row.iter().zip(&machine.states[group].row) {
                prop_assert_eq!(cell.action, canonical.action);
                let successor = &raw.states[cell.next].label;
                prop_assert_eq!(machine.state_of(successor), Some(canonical.next));
            }
        }
    }
}
