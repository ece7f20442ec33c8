//! Deterministic finite acceptors with partial transition functions.

use crate::automaton::alphabet::Alphabet;
use crate::automaton::nfa::Nfa;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::Symbol;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// A deterministic finite acceptor.
///
/// States are numbered densely from 0 and there is always at least one state,
/// the initial one. The transition function may be partial: a missing
/// transition rejects every word that would take it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa<S: Symbol> {
    alphabet: Alphabet<S>,
    initial: StateId,
    accepting: StateSet,
    /// Outgoing transitions, indexed by source state.
    transitions: Vec<IndexMap<S, StateId>>,
}

impl<S: Symbol> Dfa<S> {
    /// The canonical empty-language acceptor: one non-accepting initial state
    /// without transitions.
    pub fn new(alphabet: Alphabet<S>) -> Self {
        Self {
            alphabet,
            initial: 0,
            accepting: StateSet::with_capacity(1),
            transitions: vec![IndexMap::new()],
        }
    }

    /// The acceptor of `{ε}` over `alphabet`.
    pub fn epsilon(alphabet: Alphabet<S>) -> Self {
        let mut dfa = Self::new(alphabet);
        dfa.set_accepting(0, true);
        dfa
    }

    /// An acceptor of exactly the given words.
    pub fn from_words<'a, I, W>(alphabet: Alphabet<S>, words: I) -> Self
    where
        S: 'a,
        I: IntoIterator<Item = W>,
        W: IntoIterator<Item = &'a S>,
    {
        let mut dfa = Self::new(alphabet);
        for word in words {
            let mut state = dfa.initial;
            for symbol in word {
                state = match dfa.transition(state, symbol) {
                    Some(next) => next,
                    None => {
                        let next = dfa.add_state();
                        dfa.add_transition(state, symbol.clone(), next);
                        next
                    }
                };
            }
            dfa.set_accepting(state, true);
        }
        dfa
    }

    /// Add a new state and return its ID.
    pub fn add_state(&mut self) -> StateId {
        let id = self.transitions.len() as StateId;
        self.transitions.push(IndexMap::new());
        id
    }

    /// Make sure `state` exists, adding every missing state up to it.
    fn ensure_state(&mut self, state: StateId) {
        while self.transitions.len() <= state as usize {
            self.transitions.push(IndexMap::new());
        }
    }

    pub fn num_states(&self) -> usize {
        self.transitions.len()
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn set_initial(&mut self, state: StateId) {
        self.ensure_state(state);
        self.initial = state;
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state)
    }

    pub fn set_accepting(&mut self, state: StateId, accepting: bool) {
        self.ensure_state(state);
        if accepting {
            self.accepting.insert(state);
        } else {
            self.accepting.remove(state);
        }
    }

    pub fn accepting_states(&self) -> &StateSet {
        &self.accepting
    }

    /// Add a transition, growing the alphabet and the state space as needed.
    /// Returns the target previously defined for `(source, symbol)`, if any.
    pub fn add_transition(
        &mut self,
        source: StateId,
        symbol: S,
        destination: StateId,
    ) -> Option<StateId> {
        self.ensure_state(source.max(destination));
        self.alphabet.insert(symbol.clone());
        self.transitions[source as usize].insert(symbol, destination)
    }

    /// Remove the transition on `symbol` from `source`, returning its target.
    pub fn remove_transition(&mut self, source: StateId, symbol: &S) -> Option<StateId> {
        self.transitions
            .get_mut(source as usize)
            .and_then(|out| out.shift_remove(symbol))
    }

    /// Get the transition from a state on a symbol.
    pub fn transition(&self, source: StateId, symbol: &S) -> Option<StateId> {
        self.transitions
            .get(source as usize)
            .and_then(|out| out.get(symbol))
            .copied()
    }

    /// The transitions leaving `source`, in insertion order.
    pub fn outgoing(&self, source: StateId) -> impl Iterator<Item = (&S, StateId)> + '_ {
        self.transitions
            .get(source as usize)
            .into_iter()
            .flat_map(|out| out.iter().map(|(sym, &dst)| (sym, dst)))
    }

    /// All transitions as `(source, symbol, destination)`.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, &S, StateId)> + '_ {
        self.transitions.iter().enumerate().flat_map(|(src, out)| {
            out.iter()
                .map(move |(sym, &dst)| (src as StateId, sym, dst))
        })
    }

    pub fn num_transitions(&self) -> usize {
        self.transitions.iter().map(IndexMap::len).sum()
    }

    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Grow the alphabet by `symbol`. Existing transitions are unaffected.
    pub fn add_symbol(&mut self, symbol: S) -> bool {
        self.alphabet.insert(symbol)
    }

    /// Grow the alphabet by every symbol of `other`.
    pub fn extend_alphabet(&mut self, other: &Alphabet<S>) {
        self.alphabet.extend_from(other);
    }

    /// Whether every state defines a transition for every alphabet symbol.
    pub fn is_complete(&self) -> bool {
        self.transitions
            .iter()
            .all(|out| self.alphabet.iter().all(|sym| out.contains_key(sym)))
    }

    /// Run the acceptor on a word.
    pub fn accepts<'a, I>(&self, word: I) -> bool
    where
        S: 'a,
        I: IntoIterator<Item = &'a S>,
    {
        let mut state = self.initial;
        for symbol in word {
            match self.transition(state, symbol) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }

    /// Find all states reachable from the initial state.
    pub fn reachable_states(&self) -> StateSet {
        let mut reachable = StateSet::with_capacity(self.num_states());
        let mut queue = VecDeque::from([self.initial]);
        reachable.insert(self.initial);

        while let Some(state) = queue.pop_front() {
            for (_, next) in self.outgoing(state) {
                if reachable.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        reachable
    }

    /// Check if the acceptor's language is empty.
    pub fn is_empty(&self) -> bool {
        if self.accepting.is_empty() {
            return true;
        }
        !self.reachable_states().intersects(&self.accepting)
    }

    /// For every state, the states with a transition into it.
    pub fn predecessors(&self) -> Vec<Vec<StateId>> {
        let mut preds = vec![Vec::new(); self.num_states()];
        for (src, _, dst) in self.transitions() {
            preds[dst as usize].push(src);
        }
        preds
    }

    /// A copy keeping only the states in `keep`, renumbered densely in
    /// ascending order. Transitions touching a dropped state are removed.
    /// The initial state must be kept.
    pub(crate) fn retain_states(&self, keep: &StateSet) -> Dfa<S> {
        debug_assert!(keep.contains(self.initial));
        let mut mapping: Vec<Option<StateId>> = vec![None; self.num_states()];
        for (new, old) in keep.iter().enumerate() {
            mapping[old as usize] = Some(new as StateId);
        }
        self.relabel(&mapping, keep.len())
    }

    /// A copy keeping only reachable states, numbered in breadth-first order
    /// from the initial state following alphabet order. Two acceptors with the
    /// same reachable structure and alphabet order renumber identically.
    pub fn renumber_breadth_first(&self) -> Dfa<S> {
        let mut mapping: Vec<Option<StateId>> = vec![None; self.num_states()];
        let mut order = 0;
        let mut queue = VecDeque::from([self.initial]);
        mapping[self.initial as usize] = Some(0);

        while let Some(state) = queue.pop_front() {
            for symbol in &self.alphabet {
                if let Some(next) = self.transition(state, symbol) {
                    if mapping[next as usize].is_none() {
                        order += 1;
                        mapping[next as usize] = Some(order);
                        queue.push_back(next);
                    }
                }
            }
        }

        self.relabel(&mapping, order as usize + 1)
    }

    fn relabel(&self, mapping: &[Option<StateId>], num_states: usize) -> Dfa<S> {
        let mut result = Dfa::new(self.alphabet.clone());
        result.ensure_state(num_states.saturating_sub(1) as StateId);
        result.initial = mapping[self.initial as usize].unwrap_or(0);

        for (old, new) in mapping.iter().enumerate() {
            let Some(new) = *new else { continue };
            if self.is_accepting(old as StateId) {
                result.accepting.insert(new);
            }
            for symbol in &self.alphabet {
                let Some(dst) = self.transition(old as StateId, symbol) else {
                    continue;
                };
                if let Some(new_dst) = mapping[dst as usize] {
                    result.transitions[new as usize].insert(symbol.clone(), new_dst);
                }
            }
        }

        result
    }

    /// The same acceptor viewed as a nondeterministic one.
    pub fn to_nfa(&self) -> Nfa<S> {
        let mut nfa = Nfa::new(self.alphabet.clone());
        nfa.ensure_state(self.num_states() as StateId - 1);
        nfa.add_initial(self.initial);
        for state in self.accepting.iter() {
            nfa.set_accepting(state, true);
        }
        for (src, sym, dst) in self.transitions() {
            nfa.add_transition(src, sym.clone(), dst);
        }
        nfa
    }
}
