//! The syntax tree of a pattern.
//!
//! ```text
//! expression := term ('|' term)*
//! term       := factor+
//! factor     := atom ('*' | '+')?
//! atom       := char | '(' expression ')'
//! ```

/// One or more alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression(pub Vec<Term>);

/// A concatenation of one or more factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term(pub Vec<Factor>);

impl From<Factor> for Term {
    fn from(src: Factor) -> Self {
        Self(vec![src])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    WithQuantifier { atom: Atom, quantifier: Quantifier },
    WithoutQuantifier { atom: Atom },
}

impl Factor {
    pub fn atom(&self) -> &Atom {
        match self {
            Factor::WithQuantifier { atom, .. } | Factor::WithoutQuantifier { atom } => atom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Char(Char),
    /// A parenthesized expression. Grouping only scopes precedence.
    Group(Expression),
}

impl From<Char> for Atom {
    fn from(src: Char) -> Self {
        Self::Char(src)
    }
}

impl From<Expression> for Atom {
    fn from(src: Expression) -> Self {
        Self::Group(src)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

/// A literal, non-operator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Char(pub char);

impl Char {
    pub fn as_char(&self) -> char {
        self.0
    }
}
