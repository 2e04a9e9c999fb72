//! The automaton aggregate and the builder that assembles it.

use indexmap::IndexSet;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::closure::{epsilon_closure, move_on_symbol};
use crate::state::{State, StateId, StateSet};
use crate::symbol::{Symbol, EPSILON};
use crate::transition::Transition;

/// Incrementally assembles an [Automaton], handing out a fresh [StateId] for
/// each added state.
///
/// # Example
///
/// ```
/// use finite_automata::{AutomatonBuilder, Symbol};
///
/// let mut builder = AutomatonBuilder::new();
/// let s = builder.add_state("s");
/// let e = builder.add_state("e");
/// builder.mark_start(s);
/// builder.mark_end(e);
/// builder.add_transition(s, Symbol::from('x'), e);
///
/// let nfa = builder.build();
/// assert!(nfa.accepts("x"));
/// assert!(!nfa.accepts("xx"));
/// ```
#[derive(Debug)]
pub struct AutomatonBuilder {
    /// Tag stamped into every handle this builder allocates.
    owner: u32,
    states: Vec<State>,
    transitions: IndexSet<Transition>,
}

/// Source of builder tags. Tags are unique per builder and never zero.
static NEXT_OWNER: AtomicU32 = AtomicU32::new(1);

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            states: Vec::new(),
            transitions: IndexSet::new(),
        }
    }
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new state carrying a diagnostic name.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateId {
        let id = StateId::new(self.owner, self.states.len() as u32);
        self.states.push(State::new(id, name.into()));
        id
    }

    /// Flags a state as a start state.
    ///
    /// # Panics
    /// Panics if the state was not allocated by this builder.
    pub fn mark_start(&mut self, state: StateId) {
        self.state_mut(state).with_start_mut()
    }

    /// Flags a state as an accepting state.
    ///
    /// # Panics
    /// Panics if the state was not allocated by this builder.
    pub fn mark_end(&mut self, state: StateId) {
        self.state_mut(state).with_end_mut()
    }

    /// Adds an edge labeled `symbol`. Adding an identical edge twice has no
    /// effect.
    ///
    /// # Panics
    /// Panics if either endpoint was not allocated by this builder.
    pub fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        assert!(
            self.owns(from) && self.owns(to),
            "transition {} --{}--> {} references a state outside of this automaton",
            from,
            symbol,
            to
        );

        self.transitions.insert(Transition::new(from, symbol, to));
    }

    pub fn add_epsilon_transition(&mut self, from: StateId, to: StateId) {
        self.add_transition(from, EPSILON, to)
    }

    fn owns(&self, state: StateId) -> bool {
        state.owner() == self.owner && state.as_usize() < self.states.len()
    }

    fn state_mut(&mut self, state: StateId) -> &mut State {
        assert!(
            self.owns(state),
            "state {} was not allocated by this builder",
            state
        );

        &mut self.states[state.as_usize()]
    }

    /// Finalizes the graph, deriving the alphabet and lookup tables.
    pub fn build(self) -> Automaton {
        let capacity = self.states.len();

        let mut start_states = StateSet::with_capacity(capacity);
        let mut end_states = StateSet::with_capacity(capacity);
        for state in self.states.iter() {
            if state.is_start() {
                start_states.insert(state.id());
            }
            if state.is_end() {
                end_states.insert(state.id());
            }
        }

        let mut alphabet = BTreeSet::new();
        let mut adjacency: HashMap<StateId, HashMap<Symbol, StateSet>> = HashMap::new();
        for transition in self.transitions.iter() {
            if !transition.is_epsilon() {
                alphabet.insert(transition.symbol().clone());
            }

            adjacency
                .entry(transition.from())
                .or_default()
                .entry(transition.symbol().clone())
                .or_insert_with(|| StateSet::with_capacity(capacity))
                .insert(transition.to());
        }

        Automaton {
            states: self.states,
            transitions: self.transitions.into_iter().collect(),
            alphabet,
            start_states,
            end_states,
            adjacency,
            subsets: None,
        }
    }
}

/// A closed graph of states and labeled transitions.
///
/// Every transition references states of this automaton and the alphabet is
/// exactly the set of non-epsilon labels in use. An automaton is never
/// modified once built.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    transitions: Vec<Transition>,
    alphabet: BTreeSet<Symbol>,
    start_states: StateSet,
    end_states: StateSet,
    /// Outgoing edges per state, grouped by label.
    adjacency: HashMap<StateId, HashMap<Symbol, StateSet>>,
    /// For a determinized automaton, the source states each state stands for.
    subsets: Option<Vec<Vec<StateId>>>,
}

impl Automaton {
    pub(crate) fn with_subsets(mut self, subsets: Vec<Vec<StateId>>) -> Self {
        self.subsets = Some(subsets);
        self
    }

    /// Returns all states in handle order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the state behind `id`, or `None` if the handle belongs to
    /// another automaton.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states
            .get(id.as_usize())
            .filter(|state| state.id() == id)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns all transitions in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the non-epsilon symbols used by the automaton's transitions.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    pub fn start_states(&self) -> &StateSet {
        &self.start_states
    }

    pub fn end_states(&self) -> &StateSet {
        &self.end_states
    }

    /// Returns the states directly reachable from `state` over one edge
    /// labeled `symbol`.
    pub fn successors(&self, state: StateId, symbol: &Symbol) -> Option<&StateSet> {
        self.adjacency.get(&state)?.get(symbol)
    }

    pub fn has_epsilon_transitions(&self) -> bool {
        self.transitions.iter().any(Transition::is_epsilon)
    }

    /// Returns `true` if the automaton has a single start state, no epsilon
    /// edges and at most one outgoing edge per state and symbol.
    pub fn is_deterministic(&self) -> bool {
        self.start_states.len() == 1
            && !self.has_epsilon_transitions()
            && self
                .adjacency
                .values()
                .flat_map(HashMap::values)
                .all(|targets| targets.len() <= 1)
    }

    /// For an automaton produced by subset construction, returns the states
    /// of the source automaton that `state` represents.
    pub fn source_subset(&self, state: StateId) -> Option<&[StateId]> {
        let state = self.state(state)?;

        self.subsets
            .as_ref()?
            .get(state.id().as_usize())
            .map(Vec::as_slice)
    }

    /// Returns an equivalent deterministic automaton.
    pub fn to_dfa(&self) -> Automaton {
        crate::subset::subset_construction(self)
    }

    /// Returns `true` if the automaton accepts the sequence of symbols.
    pub fn accepts_symbols<'s>(&self, input: impl IntoIterator<Item = &'s Symbol>) -> bool {
        let mut current = epsilon_closure(self, &self.start_states);

        for symbol in input {
            if current.is_empty() {
                return false;
            }

            current = epsilon_closure(self, &move_on_symbol(self, &current, symbol));
        }

        current.intersects(&self.end_states)
    }

    /// Returns `true` if the automaton accepts `input`, treating every
    /// character as one literal symbol.
    pub fn accepts(&self, input: &str) -> bool {
        let symbols: Vec<Symbol> = input.chars().map(Symbol::from).collect();
        self.accepts_symbols(&symbols)
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for state in self.states.iter() {
            let flags = match (state.is_start(), state.is_end()) {
                (true, true) => " (start, end)",
                (true, false) => " (start)",
                (false, true) => " (end)",
                (false, false) => "",
            };
            writeln!(f, "{:04}: {}{}", state.id().as_u32(), state.name(), flags)?;

            for transition in self.transitions.iter().filter(|t| t.from() == state.id()) {
                writeln!(
                    f,
                    "      {} -> {:04}",
                    transition.symbol(),
                    transition.to().as_u32()
                )?;
            }
        }

        Ok(())
    }
}
