//! Symbol types for automata transitions.

use std::fmt::Debug;
use std::hash::Hash;

/// An opaque input token labelling transitions.
///
/// Symbols only need to be comparable and hashable; they are typically
/// strings naming the observed calls of a traced component.
pub trait Symbol: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Symbol for T {}
