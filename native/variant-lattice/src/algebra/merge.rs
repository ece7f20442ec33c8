//! Merging two states of an automaton into one.

use crate::automaton::{Automaton, Dfa, Nfa, StateId, StateSet, Symbol};
use crate::error::{AutomatonError, Result};

fn check_range(state: StateId, num_states: usize) -> Result<()> {
    if (state as usize) < num_states {
        Ok(())
    } else {
        Err(AutomatonError::StateOutOfRange { state, num_states })
    }
}

fn check_pair(keep: StateId, drop: StateId, num_states: usize) -> Result<()> {
    check_range(keep, num_states)?;
    check_range(drop, num_states)?;
    if keep == drop {
        return Err(AutomatonError::MergeSameState { state: keep });
    }
    Ok(())
}

/// The position of `state` once `drop` has been deleted.
fn shifted(state: StateId, drop: StateId) -> StateId {
    if state > drop { state - 1 } else { state }
}

/// Merge state `drop` of a deterministic acceptor into `keep`.
///
/// Transitions into and out of `drop` are redirected to `keep`, `keep`
/// becomes initial or accepting if `drop` was, and `drop` is deleted; states
/// above it shift down by one. When both states define a transition on the
/// same symbol with different targets, `check_consistency` turns that into an
/// [`AutomatonError::InconsistentMerge`]; otherwise `keep`'s transition wins.
/// Nothing is modified when an error is returned.
pub fn merge_dfa_states<S: Symbol>(
    dfa: &mut Dfa<S>,
    keep: StateId,
    drop: StateId,
    check_consistency: bool,
) -> Result<()> {
    check_pair(keep, drop, dfa.num_states())?;
    let redirect = |state: StateId| if state == drop { keep } else { state };

    let mut adopted = Vec::new();
    for (symbol, target) in dfa.outgoing(drop) {
        let target = redirect(target);
        match dfa.transition(keep, symbol).map(redirect) {
            Some(existing) if existing != target && check_consistency => {
                return Err(AutomatonError::InconsistentMerge {
                    keep,
                    drop,
                    symbol: format!("{symbol:?}"),
                });
            }
            Some(_) => {}
            None => adopted.push((symbol.clone(), target)),
        }
    }

    let incoming: Vec<(StateId, S)> = dfa
        .transitions()
        .filter(|&(_, _, dst)| dst == drop)
        .map(|(src, sym, _)| (redirect(src), sym.clone()))
        .collect();
    for (source, symbol) in incoming {
        if source == keep && dfa.transition(keep, &symbol).is_some_and(|t| t != drop) {
            continue;
        }
        dfa.add_transition(source, symbol, keep);
    }
    for (symbol, target) in adopted {
        dfa.add_transition(keep, symbol, target);
    }

    if dfa.is_accepting(drop) {
        dfa.set_accepting(keep, true);
    }
    if dfa.initial() == drop {
        dfa.set_initial(keep);
    }

    let mut remaining: StateSet = (0..dfa.num_states() as StateId).collect();
    remaining.remove(drop);
    *dfa = dfa.retain_states(&remaining);
    Ok(())
}

/// Merge state `drop` of a nondeterministic acceptor into `keep`. Transition
/// sets are united, so the merge never conflicts.
pub fn merge_nfa_states<S: Symbol>(nfa: &mut Nfa<S>, keep: StateId, drop: StateId) -> Result<()> {
    check_pair(keep, drop, nfa.num_states())?;

    let mapping: Vec<Option<StateId>> = (0..nfa.num_states() as StateId)
        .map(|state| {
            let state = if state == drop { keep } else { state };
            Some(shifted(state, drop))
        })
        .collect();
    *nfa = nfa.relabel(&mapping, nfa.num_states() - 1);
    Ok(())
}

/// Merge state `drop` into `keep`, whichever kind of automaton this is.
/// `check_consistency` only matters for deterministic automata.
pub fn merge_states<S: Symbol>(
    automaton: &mut Automaton<S>,
    keep: StateId,
    drop: StateId,
    check_consistency: bool,
) -> Result<()> {
    match automaton {
        Automaton::Deterministic(dfa) => merge_dfa_states(dfa, keep, drop, check_consistency),
        Automaton::Nondeterministic(nfa) => merge_nfa_states(nfa, keep, drop),
    }
}
