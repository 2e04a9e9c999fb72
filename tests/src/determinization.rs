use std::collections::HashSet;

use fa_regex_compiler::*;

use crate::strings_up_to;

const PATTERNS: [&str; 14] = [
    "a",
    "ab",
    "a|b",
    "a*",
    "a+",
    "(a|b)c",
    "a|bc",
    "((a))",
    "(a|b)*abb",
    "a*|b(c*|a*)",
    "(abc)+",
    "(a+b*)+|c",
    "(a|b)*a(a|b)(a|b)",
    "(a*)*",
];

fn alphabet_of(nfa: &Automaton) -> Vec<char> {
    nfa.alphabet()
        .iter()
        .filter_map(|symbol| symbol.as_str())
        .flat_map(str::chars)
        .collect()
}

#[test]
fn should_preserve_language_through_determinization() {
    for pattern in PATTERNS {
        let nfa = create_nfa(pattern).unwrap();
        let dfa = nfa.to_dfa();

        for input in strings_up_to(&alphabet_of(&nfa), 6) {
            assert_eq!(
                (pattern, input.as_str(), nfa.accepts(&input)),
                (pattern, input.as_str(), dfa.accepts(&input))
            );
        }
    }
}

#[test]
fn should_emit_at_most_one_edge_per_state_and_symbol() {
    for pattern in PATTERNS {
        let dfa = create_nfa(pattern).unwrap().to_dfa();
        let mut seen = HashSet::new();

        for transition in dfa.transitions() {
            assert!(!transition.is_epsilon(), "{}", pattern);
            assert!(
                seen.insert((transition.from(), transition.symbol().clone())),
                "{}: duplicate edge from {}",
                pattern,
                transition.from()
            );
        }
        assert!(dfa.is_deterministic(), "{}", pattern);
        assert_eq!(1, dfa.start_states().len(), "{}", pattern);
    }
}

#[test]
fn should_bound_state_count_by_powerset() {
    for pattern in PATTERNS {
        let nfa = create_nfa(pattern).unwrap();
        let dfa = nfa.to_dfa();

        let bound = u32::try_from(nfa.state_count())
            .ok()
            .and_then(|n| 1u128.checked_shl(n));
        if let Some(bound) = bound {
            assert!((dfa.state_count() as u128) <= bound, "{}", pattern);
        }
    }
}

#[test]
fn should_flag_states_by_their_source_subsets() {
    for pattern in PATTERNS {
        let nfa = create_nfa(pattern).unwrap();
        let dfa = nfa.to_dfa();

        for (idx, state) in dfa.states().iter().enumerate() {
            let subset = dfa.source_subset(state.id()).unwrap();
            let meets_end = subset.iter().any(|&id| nfa.end_states().contains(id));

            assert_eq!((pattern, idx, meets_end), (pattern, idx, state.is_end()));
            assert_eq!((pattern, idx, idx == 0), (pattern, idx, state.is_start()));
        }
    }
}

#[test]
fn should_leave_source_automaton_untouched() {
    let nfa = create_nfa("(a|b)*abb").unwrap();
    let listing = nfa.to_string();

    let dfa = nfa.to_dfa();

    assert_eq!(listing, nfa.to_string());
    assert!(nfa.has_epsilon_transitions());
    assert!(!dfa.has_epsilon_transitions());
    let dfa_start = dfa.states()[0].id();
    let nfa_start = nfa.states()[0].id();
    assert!(dfa.source_subset(dfa_start).is_some());
    assert!(nfa.source_subset(nfa_start).is_none());
    // handles of one automaton never resolve in another.
    assert!(dfa.source_subset(nfa_start).is_none());
}

#[test]
fn should_preserve_language_when_determinizing_a_dfa() {
    for pattern in PATTERNS {
        let dfa = create_nfa(pattern).unwrap().to_dfa();
        let again = dfa.to_dfa();

        assert!(again.is_deterministic());
        for input in strings_up_to(&alphabet_of(&dfa), 5) {
            assert_eq!(
                (pattern, input.as_str(), dfa.accepts(&input)),
                (pattern, input.as_str(), again.accepts(&input))
            );
        }
    }
}

#[test]
fn should_determinize_textbook_example_to_known_size() {
    // (a|b)*abb yields the classic five state automaton.
    let dfa = create_nfa("(a|b)*abb").unwrap().to_dfa();

    assert_eq!(5, dfa.state_count());
    assert_eq!(1, dfa.end_states().len());
}
