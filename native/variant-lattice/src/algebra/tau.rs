//! Elimination of unobservable (tau) moves and weak-trace normalization.

use crate::algebra::determinize::determinize;
use crate::algebra::minimize::minimize;
use crate::automaton::{Dfa, Nfa, StateId, Symbol};
use crate::error::Result;

/// Remove every `tau` transition from `nfa` without changing its weak-trace
/// language.
///
/// The result has the same states and initial states. A state accepts iff
/// some state of its tau closure accepts, and its transitions are the non-tau
/// transitions of all members of its tau closure. `tau` is dropped from the
/// alphabet. Closures are taken from (and left in) the cache of `nfa`.
pub fn tau_eliminate<S: Symbol>(nfa: &mut Nfa<S>, tau: &S) -> Nfa<S> {
    let closures = nfa.tau_closures(tau).to_vec();
    let mut result = Nfa::new(nfa.alphabet().without(tau));
    if nfa.num_states() == 0 {
        return result;
    }
    result.ensure_state(nfa.num_states() as StateId - 1);

    for state in nfa.initial_states().iter() {
        result.add_initial(state);
    }

    for (state, closure) in closures.iter().enumerate() {
        let state = state as StateId;
        if closure.intersects(nfa.accepting_states()) {
            result.set_accepting(state, true);
        }
        for member in closure.iter() {
            for (symbol, targets) in nfa.outgoing(member) {
                if symbol == tau {
                    continue;
                }
                for target in targets.iter() {
                    result.add_transition(state, symbol.clone(), target);
                }
            }
        }
    }

    result
}

/// The minimal deterministic acceptor of the weak traces of `dfa`: tau moves
/// are eliminated, the result determinized and minimized. Acceptors with the
/// same weak-trace language normalize to the same acceptor up to alphabet
/// order, and normalizing twice changes nothing.
pub fn weak_trace_normalize<S: Symbol>(dfa: &Dfa<S>, tau: &S) -> Result<Dfa<S>> {
    let mut nfa = dfa.to_nfa();
    let eliminated = tau_eliminate(&mut nfa, tau);
    minimize(&determinize(&eliminated))
}
