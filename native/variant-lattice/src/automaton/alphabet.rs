//! Growable, insertion-ordered alphabets.

use crate::automaton::symbol::Symbol;
use indexmap::IndexSet;

/// The set of symbols an automaton's transitions may be labelled with.
///
/// Iteration follows insertion order, which keeps every derived automaton
/// (and therefore every state numbering) deterministic. Equality ignores order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<S: Symbol> {
    symbols: IndexSet<S>,
}

impl<S: Symbol> Alphabet<S> {
    pub fn new() -> Self {
        Self {
            symbols: IndexSet::new(),
        }
    }

    /// Add a symbol, returning `true` if it was not present before.
    pub fn insert(&mut self, symbol: S) -> bool {
        self.symbols.insert(symbol)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of a symbol in insertion order.
    pub fn index_of(&self, symbol: &S) -> Option<usize> {
        self.symbols.get_index_of(symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        self.symbols.iter()
    }

    /// Grow this alphabet by every symbol of `other`.
    pub fn extend_from(&mut self, other: &Alphabet<S>) {
        self.symbols.extend(other.symbols.iter().cloned());
    }

    /// The union of two alphabets; symbols of `self` keep their positions.
    pub fn union(&self, other: &Alphabet<S>) -> Alphabet<S> {
        let mut merged = self.clone();
        merged.extend_from(other);
        merged
    }

    /// This alphabet without `symbol`, preserving the order of the rest.
    pub fn without(&self, symbol: &S) -> Alphabet<S> {
        self.symbols.iter().filter(|s| *s != symbol).cloned().collect()
    }
}

impl<S: Symbol> Default for Alphabet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<S> for Alphabet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a, S: Symbol> IntoIterator for &'a Alphabet<S> {
    type Item = &'a S;
    type IntoIter = indexmap::set::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
