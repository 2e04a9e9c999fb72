//! Subset construction, converting an automaton with epsilon edges and
//! non-deterministic choices into an equivalent deterministic one.

use indexmap::IndexMap;
use std::collections::VecDeque;

use crate::automaton::{Automaton, AutomatonBuilder};
use crate::closure::{epsilon_closure, move_on_symbol};
use crate::state::{StateId, StateSet};

/// Converts `nfa` into an equivalent deterministic automaton.
///
/// Each produced state corresponds to one subset of `nfa`'s states that is
/// simultaneously reachable on some input. Subsets that are empty are never
/// materialized, so the result may be partial: a missing edge rejects.
///
/// At most `2^n` subsets exist for an `n` state input and each one is
/// enqueued once, which bounds the worklist.
///
/// # Example
///
/// ```
/// use finite_automata::{AutomatonBuilder, Symbol};
///
/// let mut builder = AutomatonBuilder::new();
/// let s = builder.add_state("s");
/// let left = builder.add_state("l");
/// let right = builder.add_state("r");
/// builder.mark_start(s);
/// builder.mark_end(right);
/// builder.add_transition(s, Symbol::from('a'), left);
/// builder.add_transition(s, Symbol::from('a'), right);
///
/// let dfa = builder.build().to_dfa();
/// assert!(dfa.is_deterministic());
/// assert_eq!(2, dfa.state_count());
/// assert!(dfa.accepts("a"));
/// ```
pub fn subset_construction(nfa: &Automaton) -> Automaton {
    let initial = epsilon_closure(nfa, nfa.start_states());
    if initial.is_empty() {
        return AutomatonBuilder::new().build();
    }

    let mut dfa = AutomatonBuilder::new();
    // keyed by the canonical sorted member list of each discovered subset.
    let mut discovered: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut worklist: VecDeque<StateSet> = VecDeque::new();

    let initial_state = add_subset_state(nfa, &mut dfa, &mut discovered, &initial);
    dfa.mark_start(initial_state);
    worklist.push_back(initial);

    while let Some(current) = worklist.pop_front() {
        let source = discovered[&current.to_vec()];

        for symbol in nfa.alphabet() {
            let target = epsilon_closure(nfa, &move_on_symbol(nfa, &current, symbol));
            if target.is_empty() {
                continue;
            }

            let destination = match discovered.get(&target.to_vec()) {
                Some(&existing) => existing,
                None => {
                    let state = add_subset_state(nfa, &mut dfa, &mut discovered, &target);
                    worklist.push_back(target);
                    state
                }
            };

            dfa.add_transition(source, symbol.clone(), destination);
        }
    }

    // discovery order matches allocation order.
    let subsets = discovered.into_keys().collect();
    let dfa = dfa.build().with_subsets(subsets);
    debug_assert!(dfa.is_deterministic());

    dfa
}

fn add_subset_state(
    nfa: &Automaton,
    dfa: &mut AutomatonBuilder,
    discovered: &mut IndexMap<Vec<StateId>, StateId>,
    subset: &StateSet,
) -> StateId {
    let members = subset.to_vec();
    let name = subset_name(nfa, &members);
    let state = dfa.add_state(name);

    if subset.intersects(nfa.end_states()) {
        dfa.mark_end(state);
    }

    discovered.insert(members, state);
    state
}

fn subset_name(nfa: &Automaton, members: &[StateId]) -> String {
    let names = members
        .iter()
        .map(|&id| match nfa.state(id) {
            Some(state) => state.name().to_string(),
            None => id.to_string(),
        })
        .collect::<Vec<_>>();

    format!("{{{}}}", names.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    /// (abc)*a*b* with hand-numbered states q0..q11.
    fn hand_built_nfa() -> Automaton {
        let mut builder = AutomatonBuilder::new();
        let q: Vec<_> = (0..12)
            .map(|i| builder.add_state(format!("q{}", i)))
            .collect();
        builder.mark_start(q[0]);
        builder.mark_end(q[11]);

        let (a, b, c) = (Symbol::from('a'), Symbol::from('b'), Symbol::from('c'));
        for (from, to) in [
            (0, 1),
            (0, 5),
            (4, 5),
            (4, 1),
            (5, 6),
            (5, 8),
            (7, 8),
            (7, 6),
            (8, 11),
            (8, 9),
            (10, 9),
            (10, 11),
        ] {
            builder.add_epsilon_transition(q[from], q[to]);
        }
        builder.add_transition(q[1], a.clone(), q[2]);
        builder.add_transition(q[2], b.clone(), q[3]);
        builder.add_transition(q[3], c, q[4]);
        builder.add_transition(q[6], a, q[7]);
        builder.add_transition(q[9], b, q[10]);

        builder.build()
    }

    #[test]
    fn should_produce_deterministic_automaton() {
        let nfa = hand_built_nfa();
        let dfa = subset_construction(&nfa);

        assert!(dfa.is_deterministic());
        assert!(!dfa.has_epsilon_transitions());
        assert_eq!(nfa.alphabet(), dfa.alphabet());
        assert_eq!(1, dfa.start_states().len());
    }

    #[test]
    fn should_preserve_language_of_hand_built_automaton() {
        let nfa = hand_built_nfa();
        let dfa = subset_construction(&nfa);

        for input in ["", "abc", "abcabc", "a", "aab", "abcaabb", "bbb", "ab"] {
            assert_eq!((input, true), (input, nfa.accepts(input)));
            assert_eq!((input, true), (input, dfa.accepts(input)));
        }

        for input in ["c", "ba", "abca c", "abcb a", "cab", "bc"] {
            assert_eq!((input, false), (input, nfa.accepts(input)));
            assert_eq!((input, false), (input, dfa.accepts(input)));
        }
    }

    #[test]
    fn should_seed_with_closure_of_start_state() {
        let nfa = hand_built_nfa();
        let dfa = subset_construction(&nfa);

        let start = dfa.start_states().iter().next().unwrap();
        let subset: Vec<_> = dfa
            .source_subset(start)
            .unwrap()
            .iter()
            .map(|id| id.as_u32())
            .collect();

        assert_eq!(vec![0, 1, 5, 6, 8, 9, 11], subset);
        assert_eq!("{q0,q1,q5,q6,q8,q9,q11}", dfa.state(start).unwrap().name());
        assert!(dfa.end_states().contains(start));
    }

    #[test]
    fn should_fold_multiple_start_states_into_one() {
        // s1 -a-> e, s2 -b-> e
        let mut builder = AutomatonBuilder::new();
        let s1 = builder.add_state("s1");
        let s2 = builder.add_state("s2");
        let e = builder.add_state("e");
        builder.mark_start(s1);
        builder.mark_start(s2);
        builder.mark_end(e);
        builder.add_transition(s1, Symbol::from('a'), e);
        builder.add_transition(s2, Symbol::from('b'), e);
        let nfa = builder.build();

        let dfa = subset_construction(&nfa);
        let start = dfa.start_states().iter().next().unwrap();

        assert_eq!(2, nfa.start_states().len());
        assert_eq!(1, dfa.start_states().len());
        assert!(dfa.is_deterministic());
        assert_eq!(Some(&[s1, s2][..]), dfa.source_subset(start));
        assert!(dfa.accepts("a"));
        assert!(dfa.accepts("b"));
        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("ab"));
    }

    #[test]
    fn should_not_materialize_dead_state() {
        let mut builder = AutomatonBuilder::new();
        let s = builder.add_state("s");
        let e = builder.add_state("e");
        builder.mark_start(s);
        builder.mark_end(e);
        builder.add_transition(s, Symbol::from('a'), e);
        builder.add_transition(s, Symbol::from('b'), e);

        let dfa = subset_construction(&builder.build());

        assert_eq!(2, dfa.state_count());
        assert_eq!(2, dfa.transitions().len());
        assert!(!dfa.accepts("ab"));
    }

    #[test]
    fn should_return_empty_automaton_without_start_state() {
        let mut builder = AutomatonBuilder::new();
        let s = builder.add_state("s");
        builder.mark_end(s);

        let dfa = subset_construction(&builder.build());

        assert_eq!(0, dfa.state_count());
        assert!(!dfa.accepts(""));
    }

    #[test]
    fn should_determinize_idempotently() {
        let dfa = subset_construction(&hand_built_nfa());
        let again = subset_construction(&dfa);

        assert!(again.is_deterministic());
        assert_eq!(dfa.state_count(), again.state_count());
        for input in ["", "abc", "aab", "ba", "abcb"] {
            assert_eq!(dfa.accepts(input), again.accepts(input));
        }
    }
}
