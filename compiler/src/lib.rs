//! Provides for the parsing of a pattern and its compilation into a
//! non-deterministic finite automaton.
//!
//! # Example
//!
//! ```rust
//! // Parsing and compilation of a pattern into an automaton is accomplished
//! // by a single function exposed in the `fa_regex_compiler` crate.
//! use fa_regex_compiler::create_nfa;
//!
//! // A pattern using grouping, alternation and repetition.
//! let pattern = "(a|b)*c";
//!
//! let nfa = create_nfa(pattern).expect("failed to parse pattern");
//!
//! // Determinization produces an independent, equivalent automaton.
//! let dfa = nfa.to_dfa();
//!
//! assert!(dfa.is_deterministic());
//! assert!(dfa.accepts("abbac"));
//! assert!(!dfa.accepts("abba"));
//! ```

pub mod ast;
pub mod compiler;
pub mod parser;

pub use compiler::compile;
pub use finite_automata::Automaton;
pub use parser::{parse, SyntaxError, SyntaxErrorKind};

/// Parses `pattern` and builds its non-deterministic automaton, failing with
/// a positioned [SyntaxError] on malformed input.
pub fn create_nfa(pattern: &str) -> Result<Automaton, SyntaxError> {
    parse(pattern).map(|regex| compile(&regex))
}

/// The non-failing form of [create_nfa]: returns `None` instead of an error
/// so callers can retry with different input.
///
/// ```
/// use fa_regex_compiler::try_create_nfa;
///
/// assert!(try_create_nfa("a|b").is_some());
/// assert!(try_create_nfa("(a").is_none());
/// ```
pub fn try_create_nfa(pattern: &str) -> Option<Automaton> {
    create_nfa(pattern).ok()
}
