//! Totalization and complementation.

use crate::automaton::{Dfa, StateId, Symbol};

/// A copy of `dfa` in which every state has a transition on every alphabet
/// symbol. Missing transitions are redirected to one added non-accepting
/// sink; an already complete acceptor is returned unchanged.
pub fn totalize<S: Symbol>(dfa: &Dfa<S>) -> Dfa<S> {
    if dfa.is_complete() {
        return dfa.clone();
    }

    let mut total = dfa.clone();
    let sink = total.add_state();
    for state in 0..total.num_states() as StateId {
        for symbol in dfa.alphabet() {
            if total.transition(state, symbol).is_none() {
                total.add_transition(state, symbol.clone(), sink);
            }
        }
    }
    total
}

/// An acceptor of every word over the alphabet of `dfa` that `dfa` rejects.
pub fn complement<S: Symbol>(dfa: &Dfa<S>) -> Dfa<S> {
    let mut total = totalize(dfa);
    for state in 0..total.num_states() as StateId {
        let accepting = total.is_accepting(state);
        total.set_accepting(state, !accepting);
    }
    total
}
