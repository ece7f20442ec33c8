use {
    proptest::{
        collection::vec,
        option,
        prelude::{Strategy, any},
    },
    variant_lattice::{Alphabet, Dfa, StateId},
};

const MAX_STATES: usize = 4;
pub(crate) const MAX_WORD: usize = 8;

pub(crate) const SYMBOLS: [char; 2] = ['a', 'b'];
pub(crate) const TAU: char = 't';
pub(crate) const SYMBOLS_WITH_TAU: [char; 3] = ['a', 'b', TAU];

/// Partial deterministic acceptors over `symbols` with up to four states.
pub(crate) fn dfa_over(symbols: &'static [char]) -> impl Strategy<Value = Dfa<char>> {
    (1..=MAX_STATES)
        .prop_flat_map(move |n| {
            (
                vec(option::of(0..n as StateId), n * symbols.len()),
                vec(any::<bool>(), n),
            )
        })
        .prop_map(move |(targets, accepting)| {
            let mut dfa = Dfa::new(symbols.iter().copied().collect::<Alphabet<char>>());
            for (state, &accept) in accepting.iter().enumerate() {
                dfa.set_accepting(state as StateId, accept);
            }
            for (index, target) in targets.into_iter().enumerate() {
                if let Some(target) = target {
                    let source = (index / symbols.len()) as StateId;
                    dfa.add_transition(source, symbols[index % symbols.len()], target);
                }
            }
            dfa
        })
}

pub(crate) fn dfa_strategy() -> impl Strategy<Value = Dfa<char>> {
    dfa_over(&SYMBOLS)
}

/// Every word over `symbols` of length at most `max_len`, shortest first.
pub(crate) fn words_up_to(symbols: &[char], max_len: usize) -> Vec<Vec<char>> {
    let mut words = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|word: &Vec<char>| {
                symbols.iter().map(move |&symbol| {
                    let mut longer = word.clone();
                    longer.push(symbol);
                    longer
                })
            })
            .collect();
        words.extend(frontier.iter().cloned());
    }
    words
}

/// The words of length at most eight that `dfa` accepts. Two generated
/// automata with equal bounded languages are equivalent.
pub(crate) fn language(dfa: &Dfa<char>) -> Vec<Vec<char>> {
    words_up_to(&SYMBOLS, MAX_WORD)
        .into_iter()
        .filter(|word| dfa.accepts(word))
        .collect()
}

/// Non-initial, non-accepting states whose transitions all loop back.
pub(crate) fn sink_states(dfa: &Dfa<char>) -> Vec<StateId> {
    (0..dfa.num_states() as StateId)
        .filter(|&state| {
            state != dfa.initial()
                && !dfa.is_accepting(state)
                && dfa.outgoing(state).all(|(_, target)| target == state)
        })
        .collect()
}
