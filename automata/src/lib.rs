//! Finite automata over string-valued symbols: the automaton graph model,
//! epsilon-closure, and subset construction of deterministic automata.
//!
//! # Example
//!
//! ```rust
//! use finite_automata::{AutomatonBuilder, Symbol};
//!
//! // (a|b) assembled by hand, joined through epsilon edges.
//! let mut builder = AutomatonBuilder::new();
//! let start = builder.add_state("start");
//! let a = builder.add_state("a");
//! let b = builder.add_state("b");
//! let end = builder.add_state("end");
//! builder.mark_start(start);
//! builder.mark_end(end);
//! builder.add_transition(start, Symbol::from('a'), a);
//! builder.add_transition(start, Symbol::from('b'), b);
//! builder.add_epsilon_transition(a, end);
//! builder.add_epsilon_transition(b, end);
//!
//! let nfa = builder.build();
//!
//! // Determinization yields an independent automaton recognizing the same
//! // language with no epsilon edges.
//! let dfa = nfa.to_dfa();
//!
//! assert!(dfa.is_deterministic());
//! for input in ["a", "b", "", "ab"] {
//!     assert_eq!(nfa.accepts(input), dfa.accepts(input));
//! }
//! ```

mod automaton;
pub mod closure;
pub mod dot;
mod state;
pub mod subset;
mod symbol;
mod transition;

pub use automaton::{Automaton, AutomatonBuilder};
pub use closure::{epsilon_closure, move_on_symbol};
pub use dot::{DotGeneratable, DotOptions, DotRepr, RankDir};
pub use state::{State, StateId, StateSet};
pub use subset::subset_construction;
pub use symbol::{Symbol, EPSILON};
pub use transition::Transition;
