//! Prefix closure.

use crate::automaton::{Dfa, StateId, Symbol};
use std::collections::VecDeque;

/// Make `dfa` accept every prefix of the words it accepts.
///
/// Walks backwards from the accepting states and marks every state that can
/// reach one as accepting. Applying it twice changes nothing.
pub fn prefix_close<S: Symbol>(dfa: &mut Dfa<S>) {
    let predecessors = dfa.predecessors();
    let mut queue: VecDeque<StateId> = dfa.accepting_states().iter().collect();

    while let Some(state) = queue.pop_front() {
        for &pred in &predecessors[state as usize] {
            if !dfa.is_accepting(pred) {
                dfa.set_accepting(pred, true);
                queue.push_back(pred);
            }
        }
    }
}
