//! Subset construction for converting an NFA to a DFA.

use crate::automaton::{Dfa, Nfa, StateId, StateSet, Symbol};
use indexmap::IndexMap;
use tracing::debug;

/// Convert an NFA to a DFA of the same language using the powerset
/// construction. Only subsets reachable from the initial set are built, and
/// the empty subset is never materialized, so the result stays partial.
pub fn determinize<S: Symbol>(nfa: &Nfa<S>) -> Dfa<S> {
    // Each DFA state corresponds to a set of NFA states.
    let mut state_mapping: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut dfa = Dfa::new(nfa.alphabet().clone());

    let initial_set = nfa.initial_states().clone();
    if initial_set.is_empty() {
        return dfa;
    }

    state_mapping.insert(initial_set.to_vec(), dfa.initial());
    if initial_set.intersects(nfa.accepting_states()) {
        dfa.set_accepting(dfa.initial(), true);
    }

    let mut worklist: Vec<(StateId, StateSet)> = vec![(dfa.initial(), initial_set)];

    while let Some((current, current_set)) = worklist.pop() {
        for symbol in nfa.alphabet() {
            let next_set = nfa.step(&current_set, symbol);
            if next_set.is_empty() {
                continue;
            }

            let key = next_set.to_vec();
            let next = match state_mapping.get(&key) {
                Some(&existing) => existing,
                None => {
                    let new_state = dfa.add_state();
                    state_mapping.insert(key, new_state);
                    if next_set.intersects(nfa.accepting_states()) {
                        dfa.set_accepting(new_state, true);
                    }
                    worklist.push((new_state, next_set));
                    new_state
                }
            };

            dfa.add_transition(current, symbol.clone(), next);
        }
    }

    debug!(
        nfa_states = nfa.num_states(),
        dfa_states = dfa.num_states(),
        "determinized"
    );
    dfa
}
