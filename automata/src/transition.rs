use crate::state::StateId;
use crate::symbol::Symbol;

/// A labeled, directed edge between two states.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    from: StateId,
    symbol: Symbol,
    to: StateId,
}

impl Transition {
    pub fn new(from: StateId, symbol: Symbol, to: StateId) -> Self {
        Self { from, symbol, to }
    }

    pub fn from(&self) -> StateId {
        self.from
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn to(&self) -> StateId {
        self.to
    }

    /// Returns `true` if traversing the edge consumes no input.
    pub fn is_epsilon(&self) -> bool {
        self.symbol.is_epsilon()
    }
}
