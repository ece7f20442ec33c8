//! Alphabet substitution and synchronization.

use crate::automaton::{Alphabet, Automaton, Dfa, Nfa, Symbol};
use crate::error::{AutomatonError, Result};
use indexmap::IndexMap;

/// Substitute every symbol of `dfa` by `substitute(symbol)`.
///
/// Two symbols mapping onto the same target would make the result
/// nondeterministic, so the substitution must be injective on the alphabet.
pub fn rename_dfa<S, T, F>(dfa: &Dfa<S>, substitute: F) -> Result<Dfa<T>>
where
    S: Symbol,
    T: Symbol,
    F: Fn(&S) -> T,
{
    let mut substitution: IndexMap<&S, T> = IndexMap::new();
    let mut alphabet = Alphabet::new();
    for symbol in dfa.alphabet() {
        let target = substitute(symbol);
        if !alphabet.insert(target.clone()) {
            return Err(AutomatonError::NonInjectiveRename {
                symbol: format!("{target:?}"),
            });
        }
        substitution.insert(symbol, target);
    }

    let mut renamed = Dfa::new(alphabet);
    for _ in 1..dfa.num_states() {
        renamed.add_state();
    }
    renamed.set_initial(dfa.initial());
    for state in dfa.accepting_states().iter() {
        renamed.set_accepting(state, true);
    }
    for (src, symbol, dst) in dfa.transitions() {
        renamed.add_transition(src, substitution[symbol].clone(), dst);
    }
    Ok(renamed)
}

/// Substitute every symbol of `nfa` by `substitute(symbol)`. Symbols may be
/// collapsed; their transitions are united.
pub fn rename_nfa<S, T, F>(nfa: &Nfa<S>, substitute: F) -> Nfa<T>
where
    S: Symbol,
    T: Symbol,
    F: Fn(&S) -> T,
{
    let alphabet: Alphabet<T> = nfa.alphabet().iter().map(&substitute).collect();
    let mut renamed = Nfa::new(alphabet);
    for _ in 0..nfa.num_states() {
        renamed.add_state();
    }
    for state in nfa.initial_states().iter() {
        renamed.add_initial(state);
    }
    for state in nfa.accepting_states().iter() {
        renamed.set_accepting(state, true);
    }
    for (src, symbol, dst) in nfa.transitions() {
        renamed.add_transition(src, substitute(symbol), dst);
    }
    renamed
}

/// Substitute every symbol of `automaton` by `substitute(symbol)`. Fails if the
/// automaton is deterministic and the substitution is not injective.
pub fn rename<S, T, F>(automaton: &Automaton<S>, substitute: F) -> Result<Automaton<T>>
where
    S: Symbol,
    T: Symbol,
    F: Fn(&S) -> T,
{
    match automaton {
        Automaton::Deterministic(dfa) => rename_dfa(dfa, substitute).map(Automaton::Deterministic),
        Automaton::Nondeterministic(nfa) => {
            Ok(Automaton::Nondeterministic(rename_nfa(nfa, substitute)))
        }
    }
}

/// Grow both alphabets to their union.
pub fn synchronize_alphabets<S: Symbol>(a: &mut Automaton<S>, b: &mut Automaton<S>) {
    let union = a.alphabet().union(b.alphabet());
    a.extend_alphabet(&union);
    b.extend_alphabet(&union);
}

/// Grow the alphabets of two deterministic acceptors to their union.
pub fn synchronize_dfa_alphabets<S: Symbol>(a: &mut Dfa<S>, b: &mut Dfa<S>) {
    let union = a.alphabet().union(b.alphabet());
    a.extend_alphabet(&union);
    b.extend_alphabet(&union);
}
