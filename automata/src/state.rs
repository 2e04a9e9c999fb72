//! States and state sets.

use fixedbitset::FixedBitSet;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

/// An opaque handle to a state within a single automaton.
///
/// Handles carry the tag of the builder that allocated them alongside their
/// arena offset, so a handle is only meaningful for the automaton, or
/// builder, it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId {
    owner: u32,
    index: u32,
}

impl StateId {
    pub(crate) fn new(owner: u32, index: u32) -> Self {
        Self { owner, index }
    }

    pub(crate) fn owner(self) -> u32 {
        self.owner
    }

    /// The arena offset of the state within its automaton.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.index
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.index as usize
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A node in an automaton graph.
///
/// Identity is carried entirely by the `id`; the `name` is a diagnostic label
/// and two states sharing a name are still distinct.
#[derive(Debug, Clone)]
pub struct State {
    id: StateId,
    name: String,
    is_start: bool,
    is_end: bool,
}

impl State {
    pub(crate) fn new(id: StateId, name: String) -> Self {
        Self {
            id,
            name,
            is_start: false,
            is_end: false,
        }
    }

    pub(crate) fn with_start_mut(&mut self) {
        self.is_start = true;
    }

    pub(crate) fn with_end_mut(&mut self) {
        self.is_end = true;
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

/// A set of states of one automaton, backed by a growable bit set.
#[derive(Clone, Default)]
pub struct StateSet {
    /// Tag shared by every member, unset until the first insert.
    owner: Option<u32>,
    bits: FixedBitSet,
}

impl StateSet {
    /// Instantiates an empty set sized for `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            owner: None,
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Instantiates a set holding exactly one state.
    pub fn singleton(state: StateId, capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);
        set.insert(state);
        set
    }

    /// Inserts a state, returning `true` if it was not already a member.
    ///
    /// # Panics
    /// Panics if the set already holds states of another automaton.
    pub fn insert(&mut self, state: StateId) -> bool {
        self.adopt_owner(state.owner());

        let idx = state.as_usize();
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }

        !self.bits.put(idx)
    }

    fn adopt_owner(&mut self, owner: u32) {
        match self.owner {
            Some(current) => assert_eq!(
                current, owner,
                "state sets cannot mix states of different automata"
            ),
            None => self.owner = Some(owner),
        }
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.owner == Some(state.owner()) && self.bits.contains(state.as_usize())
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterates over the members in ascending handle order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        let owner = self.owner.unwrap_or_default();
        self.bits
            .ones()
            .map(move |idx| StateId::new(owner, idx as u32))
    }

    /// Adds every member of `other` to this set.
    ///
    /// # Panics
    /// Panics if the two sets hold states of different automata.
    pub fn union_with(&mut self, other: &StateSet) {
        if other.is_empty() {
            return;
        }
        if let Some(owner) = other.owner {
            self.adopt_owner(owner);
        }

        if other.bits.len() > self.bits.len() {
            self.bits.grow(other.bits.len());
        }
        self.bits.union_with(&other.bits);
    }

    pub fn intersects(&self, other: &StateSet) -> bool {
        self.owner == other.owner && self.bits.intersection(&other.bits).next().is_some()
    }

    /// Returns the canonical, sorted form of the set.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }
}

// bit sets of differing capacity can hold the same members.
impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for StateSet {}

impl Debug for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = Self::default();
        for state in iter {
            set.insert(state);
        }
        set
    }
}
