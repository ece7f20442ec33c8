//! Nondeterministic finite acceptors with set-valued transitions.

use crate::automaton::alphabet::Alphabet;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::Symbol;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// A nondeterministic finite acceptor.
///
/// Unlike [`crate::automaton::Dfa`] there may be any number of initial states
/// and several targets per `(state, symbol)`. Internal (tau) moves are ordinary
/// symbols here; [`crate::algebra::tau_eliminate`] interprets one of them as
/// unobservable.
#[derive(Debug, Clone)]
pub struct Nfa<S: Symbol> {
    alphabet: Alphabet<S>,
    num_states: StateId,
    initial: StateSet,
    accepting: StateSet,
    /// Outgoing transitions, indexed by source state.
    transitions: Vec<IndexMap<S, StateSet>>,
    /// Tau closures of every state for the symbol they were computed for.
    /// Cleared by every mutating call.
    tau_closures: Option<(S, Vec<StateSet>)>,
}

impl<S: Symbol> Nfa<S> {
    /// Create an automaton without states.
    pub fn new(alphabet: Alphabet<S>) -> Self {
        Self {
            alphabet,
            num_states: 0,
            initial: StateSet::with_capacity(16),
            accepting: StateSet::with_capacity(16),
            transitions: Vec::new(),
            tau_closures: None,
        }
    }

    /// Add a new state and return its ID.
    pub fn add_state(&mut self) -> StateId {
        let id = self.num_states;
        self.ensure_state(id);
        id
    }

    /// Ensure a state exists, expanding the state space if needed.
    pub(crate) fn ensure_state(&mut self, state: StateId) {
        if state >= self.num_states {
            self.num_states = state + 1;
            self.transitions
                .resize_with(self.num_states as usize, IndexMap::new);
            self.tau_closures = None;
        }
    }

    pub fn num_states(&self) -> usize {
        self.num_states as usize
    }

    pub fn add_initial(&mut self, state: StateId) {
        self.ensure_state(state);
        self.initial.insert(state);
        self.tau_closures = None;
    }

    pub fn initial_states(&self) -> &StateSet {
        &self.initial
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
        self.tau_closures = None;
    }

    pub fn accepting_states(&self) -> &StateSet {
        &self.accepting
    }

    /// Add a transition, returning `false` if it was already present.
    pub fn add_transition(&mut self, source: StateId, symbol: S, destination: StateId) -> bool {
        self.ensure_state(source.max(destination));
        self.alphabet.insert(symbol.clone());
        self.tau_closures = None;
        self.transitions[source as usize]
            .entry(symbol)
            .or_default()
            .insert(destination)
    }

    /// The targets of `source` on `symbol`, if any are defined.
    pub fn successors(&self, source: StateId, symbol: &S) -> Option<&StateSet> {
        self.transitions
            .get(source as usize)
            .and_then(|out| out.get(symbol))
            .filter(|targets| !targets.is_empty())
    }

    /// The transitions leaving `source`, grouped by symbol.
    pub fn outgoing(&self, source: StateId) -> impl Iterator<Item = (&S, &StateSet)> + '_ {
        self.transitions
            .get(source as usize)
            .into_iter()
            .flat_map(|out| out.iter())
    }

    /// All transitions as `(source, symbol, destination)`.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, &S, StateId)> + '_ {
        self.transitions.iter().enumerate().flat_map(|(src, out)| {
            out.iter().flat_map(move |(sym, dsts)| {
                dsts.iter().map(move |dst| (src as StateId, sym, dst))
            })
        })
    }

    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    pub fn add_symbol(&mut self, symbol: S) -> bool {
        self.tau_closures = None;
        self.alphabet.insert(symbol)
    }

    pub fn extend_alphabet(&mut self, other: &Alphabet<S>) {
        self.tau_closures = None;
        self.alphabet.extend_from(other);
    }

    /// The states reachable from `states` on `symbol`.
    pub fn step(&self, states: &StateSet, symbol: &S) -> StateSet {
        let mut reached = StateSet::with_capacity(self.num_states());
        for state in states.iter() {
            if let Some(targets) = self.successors(state, symbol) {
                reached.union_with(targets);
            }
        }
        reached
    }

    /// Run the acceptor on a word, treating every symbol as observable.
    pub fn accepts<'a, I>(&self, word: I) -> bool
    where
        S: 'a,
        I: IntoIterator<Item = &'a S>,
    {
        let mut current = self.initial.clone();
        for symbol in word {
            current = self.step(&current, symbol);
            if current.is_empty() {
                return false;
            }
        }
        current.intersects(&self.accepting)
    }

    /// Check if the acceptor's language is empty.
    pub fn is_empty(&self) -> bool {
        let mut visited = self.initial.clone();
        let mut queue: VecDeque<StateId> = self.initial.iter().collect();

        while let Some(state) = queue.pop_front() {
            if self.accepting.contains(state) {
                return false;
            }
            for (_, targets) in self.outgoing(state) {
                for next in targets.iter() {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        true
    }

    /// Compute the states reachable from `state` through zero or more `tau`
    /// transitions, breadth first.
    fn tau_closure_single(&self, state: StateId, tau: &S) -> StateSet {
        let mut closure = StateSet::singleton(state, self.num_states());
        let mut queue = VecDeque::from([state]);

        while let Some(s) = queue.pop_front() {
            if let Some(targets) = self.successors(s, tau) {
                for next in targets.iter() {
                    if closure.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        closure
    }

    /// The tau closure of every state, computed once per tau symbol and
    /// cached until the next mutation.
    pub fn tau_closures(&mut self, tau: &S) -> &[StateSet] {
        let cached = matches!(&self.tau_closures, Some((sym, _)) if sym == tau);
        if !cached {
            let closures = (0..self.num_states)
                .map(|state| self.tau_closure_single(state, tau))
                .collect();
            self.tau_closures = Some((tau.clone(), closures));
        }
        match &self.tau_closures {
            Some((_, closures)) => closures,
            None => &[],
        }
    }

    /// Replace every state `s` by `mapping[s]`, dropping states mapped to
    /// `None` together with their transitions. Targets must be dense in
    /// `0..num_states`.
    pub(crate) fn relabel(&self, mapping: &[Option<StateId>], num_states: usize) -> Nfa<S> {
        let mut result = Nfa::new(self.alphabet.clone());
        if num_states > 0 {
            result.ensure_state(num_states as StateId - 1);
        }
        for (old, new) in mapping.iter().enumerate() {
            let Some(new) = *new else { continue };
            let old = old as StateId;
            if self.initial.contains(old) {
                result.initial.insert(new);
            }
            if self.accepting.contains(old) {
                result.accepting.insert(new);
            }
            for (sym, targets) in self.outgoing(old) {
                for dst in targets.iter() {
                    if let Some(new_dst) = mapping[dst as usize] {
                        result.add_transition(new, sym.clone(), new_dst);
                    }
                }
            }
        }
        result
    }
}
