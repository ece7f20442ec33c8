//! Finite acceptors over opaque symbols.
//!
//! This module provides the state-arena representations the algebra works on:
//! - [`Dfa`]: one initial state, partial single-valued transitions
//! - [`Nfa`]: a set of initial states, set-valued transitions
//! - [`Automaton`]: either of the two behind one fixed operation set

mod alphabet;
mod dfa;
mod nfa;
mod state;
mod symbol;

pub use alphabet::Alphabet;
pub use dfa::Dfa;
pub use nfa::Nfa;
pub use state::{StateId, StateSet};
pub use symbol::Symbol;

use crate::algebra::determinize;

/// An acceptor of either kind.
#[derive(Debug, Clone)]
pub enum Automaton<S: Symbol> {
    Deterministic(Dfa<S>),
    Nondeterministic(Nfa<S>),
}

impl<S: Symbol> Automaton<S> {
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Automaton::Deterministic(_))
    }

    pub fn alphabet(&self) -> &Alphabet<S> {
        match self {
            Automaton::Deterministic(dfa) => dfa.alphabet(),
            Automaton::Nondeterministic(nfa) => nfa.alphabet(),
        }
    }

    /// Grow the alphabet by every symbol of `other`.
    pub fn extend_alphabet(&mut self, other: &Alphabet<S>) {
        match self {
            Automaton::Deterministic(dfa) => dfa.extend_alphabet(other),
            Automaton::Nondeterministic(nfa) => nfa.extend_alphabet(other),
        }
    }

    pub fn num_states(&self) -> usize {
        match self {
            Automaton::Deterministic(dfa) => dfa.num_states(),
            Automaton::Nondeterministic(nfa) => nfa.num_states(),
        }
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        match self {
            Automaton::Deterministic(dfa) => dfa.is_accepting(state),
            Automaton::Nondeterministic(nfa) => nfa.is_accepting(state),
        }
    }

    /// Check if the language is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Automaton::Deterministic(dfa) => dfa.is_empty(),
            Automaton::Nondeterministic(nfa) => nfa.is_empty(),
        }
    }

    pub fn accepts<'a, I>(&self, word: I) -> bool
    where
        S: 'a,
        I: IntoIterator<Item = &'a S>,
    {
        match self {
            Automaton::Deterministic(dfa) => dfa.accepts(word),
            Automaton::Nondeterministic(nfa) => nfa.accepts(word),
        }
    }

    pub fn to_nfa(&self) -> Nfa<S> {
        match self {
            Automaton::Deterministic(dfa) => dfa.to_nfa(),
            Automaton::Nondeterministic(nfa) => nfa.clone(),
        }
    }

    /// A deterministic acceptor of the same language; determinizes if needed.
    pub fn to_dfa(&self) -> Dfa<S> {
        match self {
            Automaton::Deterministic(dfa) => dfa.clone(),
            Automaton::Nondeterministic(nfa) => determinize(nfa),
        }
    }
}

impl<S: Symbol> From<Dfa<S>> for Automaton<S> {
    fn from(dfa: Dfa<S>) -> Self {
        Automaton::Deterministic(dfa)
    }
}

impl<S: Symbol> From<Nfa<S>> for Automaton<S> {
    fn from(nfa: Nfa<S>) -> Self {
        Automaton::Nondeterministic(nfa)
    }
}
