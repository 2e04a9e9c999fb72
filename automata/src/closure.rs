//! Epsilon-closure and symbol moves over an automaton's transition relation.

use crate::automaton::Automaton;
use crate::state::StateSet;
use crate::symbol::{Symbol, EPSILON};

/// Returns the smallest superset of `states` that is closed under epsilon
/// transitions.
pub fn epsilon_closure(automaton: &Automaton, states: &StateSet) -> StateSet {
    let mut closure = StateSet::with_capacity(automaton.state_count());
    let mut worklist: Vec<_> = states.iter().collect();

    while let Some(state) = worklist.pop() {
        if !closure.insert(state) {
            continue;
        }

        if let Some(targets) = automaton.successors(state, &EPSILON) {
            worklist.extend(targets.iter().filter(|target| !closure.contains(*target)));
        }
    }

    closure
}

/// Returns the states reachable from any member of `states` over exactly one
/// edge labeled `symbol`. No epsilon-closure is applied to the result.
///
/// # Panics
/// Panics if `symbol` is epsilon.
pub fn move_on_symbol(automaton: &Automaton, states: &StateSet, symbol: &Symbol) -> StateSet {
    assert!(!symbol.is_epsilon(), "use epsilon_closure for epsilon moves");

    let mut reached = StateSet::with_capacity(automaton.state_count());
    for state in states.iter() {
        if let Some(targets) = automaton.successors(state, symbol) {
            reached.union_with(targets);
        }
    }

    reached
}
