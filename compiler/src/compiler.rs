//! Thompson construction of a non-deterministic automaton from a parsed
//! pattern.
//!
//! Every syntax node yields a fragment with exactly one entry and one exit
//! state. Only the outermost fragment's entry and exit are flagged as the
//! automaton's start and end states.
//!
//! # Example
//!
//! ```
//! use fa_regex_compiler::ast::*;
//! use fa_regex_compiler::compile;
//!
//! // approximate to `ab`
//! let regex_ast = Expression(vec![Term(vec![
//!     Factor::WithoutQuantifier { atom: Atom::Char(Char('a')) },
//!     Factor::WithoutQuantifier { atom: Atom::Char(Char('b')) },
//! ])]);
//!
//! let nfa = compile(&regex_ast);
//!
//! // two literal fragments joined by an epsilon edge.
//! assert_eq!(4, nfa.state_count());
//! assert_eq!(3, nfa.transitions().len());
//! assert!(nfa.accepts("ab"));
//! ```

use finite_automata::{Automaton, AutomatonBuilder, StateId, Symbol};

use super::ast;

/// Hands out the names `q0`, `q1`, ... for the states of one compilation.
#[derive(Debug, Default)]
struct StateNames {
    next: usize,
}

impl StateNames {
    fn next_name(&mut self) -> String {
        let name = format!("q{}", self.next);
        self.next += 1;
        name
    }
}

/// A partially built automaton with a single entry and exit.
#[derive(Debug, Clone, Copy)]
struct Fragment {
    start: StateId,
    end: StateId,
}

#[derive(Debug, Default)]
struct ThompsonBuilder {
    automaton: AutomatonBuilder,
    names: StateNames,
}

impl ThompsonBuilder {
    fn fresh_state(&mut self) -> StateId {
        let name = self.names.next_name();
        self.automaton.add_state(name)
    }

    fn expression(&mut self, expression: &ast::Expression) -> Fragment {
        let alternatives = expression
            .0
            .iter()
            .map(|term| self.term(term))
            .collect::<Vec<_>>();

        match alternatives.as_slice() {
            [] => self.empty(),
            [single] => *single,
            _ => self.alternation(&alternatives),
        }
    }

    fn term(&mut self, term: &ast::Term) -> Fragment {
        let factors = term
            .0
            .iter()
            .map(|factor| self.factor(factor))
            .collect::<Vec<_>>();

        let mut factors = factors.into_iter();
        let head = match factors.next() {
            Some(head) => head,
            None => return self.empty(),
        };

        factors.fold(head, |concatenated, next| {
            self.automaton
                .add_epsilon_transition(concatenated.end, next.start);

            Fragment {
                start: concatenated.start,
                end: next.end,
            }
        })
    }

    fn factor(&mut self, factor: &ast::Factor) -> Fragment {
        match factor {
            ast::Factor::WithoutQuantifier { atom } => self.atom(atom),
            ast::Factor::WithQuantifier {
                atom,
                quantifier: ast::Quantifier::ZeroOrMore,
            } => {
                let inner = self.atom(atom);
                self.repetition(inner, true)
            }
            ast::Factor::WithQuantifier {
                atom,
                quantifier: ast::Quantifier::OneOrMore,
            } => {
                let inner = self.atom(atom);
                self.repetition(inner, false)
            }
        }
    }

    fn atom(&mut self, atom: &ast::Atom) -> Fragment {
        match atom {
            ast::Atom::Char(ast::Char(c)) => self.literal(*c),
            ast::Atom::Group(expression) => self.expression(expression),
        }
    }

    fn literal(&mut self, c: char) -> Fragment {
        let start = self.fresh_state();
        let end = self.fresh_state();
        self.automaton.add_transition(start, Symbol::from(c), end);

        Fragment { start, end }
    }

    /// Matches only the empty string.
    fn empty(&mut self) -> Fragment {
        let start = self.fresh_state();
        let end = self.fresh_state();
        self.automaton.add_epsilon_transition(start, end);

        Fragment { start, end }
    }

    fn alternation(&mut self, alternatives: &[Fragment]) -> Fragment {
        let start = self.fresh_state();
        let end = self.fresh_state();

        for alternative in alternatives {
            self.automaton
                .add_epsilon_transition(start, alternative.start);
            self.automaton.add_epsilon_transition(alternative.end, end);
        }

        Fragment { start, end }
    }

    /// `*` when `allow_empty` is set, otherwise `+`.
    fn repetition(&mut self, inner: Fragment, allow_empty: bool) -> Fragment {
        let start = self.fresh_state();
        let end = self.fresh_state();

        self.automaton.add_epsilon_transition(start, inner.start);
        self.automaton
            .add_epsilon_transition(inner.end, inner.start);
        if allow_empty {
            self.automaton.add_epsilon_transition(start, end);
        }
        self.automaton.add_epsilon_transition(inner.end, end);

        Fragment { start, end }
    }

    fn finish(mut self, root: Fragment) -> Automaton {
        self.automaton.mark_start(root.start);
        self.automaton.mark_end(root.end);
        self.automaton.build()
    }
}

/// Accepts a parsed AST and builds the corresponding non-deterministic
/// automaton. State names are local to each call.
pub fn compile(regex: &ast::Expression) -> Automaton {
    let mut builder = ThompsonBuilder::default();
    let root = builder.expression(regex);

    builder.finish(root)
}
