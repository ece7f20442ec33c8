use variant_lattice::{
    Dfa,
    algebra::{
        complement, difference, intersect, minimize, prefix_close, symmetric_difference, union,
        weak_trace_normalize,
    },
    relation::equivalent,
};

use super::strategy::{
    MAX_WORD, SYMBOLS, SYMBOLS_WITH_TAU, TAU, dfa_over, dfa_strategy, language, sink_states,
    words_up_to,
};

use proptest::{prop_assert, prop_assert_eq, proptest};

/// The bounded language of the set operation `keep` applied word by word.
fn expected(a: &Dfa<char>, b: &Dfa<char>, keep: fn(bool, bool) -> bool) -> Vec<Vec<char>> {
    words_up_to(&SYMBOLS, MAX_WORD)
        .into_iter()
        .filter(|word| keep(a.accepts(word), b.accepts(word)))
        .collect()
}

proptest! {
    #[test]
    fn products_follow_set_semantics(a in dfa_strategy(), b in dfa_strategy()) {
        prop_assert_eq!(language(&intersect(&a, &b).unwrap()), expected(&a, &b, |x, y| x && y));
        prop_assert_eq!(language(&union(&a, &b).unwrap()), expected(&a, &b, |x, y| x || y));
        prop_assert_eq!(
            language(&symmetric_difference(&a, &b).unwrap()),
            expected(&a, &b, |x, y| x != y)
        );
        prop_assert_eq!(language(&difference(&a, &b).unwrap()), expected(&a, &b, |x, y| x && !y));
    }

    #[test]
    fn products_are_trim(a in dfa_strategy(), b in dfa_strategy()) {
        for product in [intersect(&a, &b).unwrap(), union(&a, &b).unwrap()] {
            prop_assert_eq!(product.reachable_states().len(), product.num_states());
            if !product.is_empty() {
                prop_assert!(sink_states(&product).is_empty());
            }
        }
    }

    #[test]
    fn complement_inverts_membership(dfa in dfa_strategy()) {
        let inverted = complement(&dfa);
        for word in words_up_to(&SYMBOLS, 4) {
            prop_assert_eq!(inverted.accepts(&word), !dfa.accepts(&word));
        }
    }

    #[test]
    fn prefix_close_is_prefix_closure(dfa in dfa_strategy()) {
        let mut closed = dfa.clone();
        prefix_close(&mut closed);
        // A live state of a four-state acceptor reaches acceptance within
        // three symbols.
        for word in words_up_to(&SYMBOLS, 3) {
            let extendable = words_up_to(&SYMBOLS, 3).iter().any(|suffix| {
                let mut longer = word.clone();
                longer.extend(suffix);
                dfa.accepts(&longer)
            });
            prop_assert_eq!(closed.accepts(&word), extendable);
        }

        let mut twice = closed.clone();
        prefix_close(&mut twice);
        prop_assert_eq!(twice, closed);
    }

    #[test]
    fn weak_trace_normalize_is_idempotent(dfa in dfa_over(&SYMBOLS_WITH_TAU)) {
        let once = weak_trace_normalize(&dfa, &TAU).unwrap();
        let twice = weak_trace_normalize(&once, &TAU).unwrap();
        prop_assert!(!once.alphabet().contains(&TAU));
        prop_assert!(equivalent(&once, &twice));
        prop_assert_eq!(once.num_states(), twice.num_states());
        prop_assert_eq!(minimize(&once).unwrap().num_states(), once.num_states());
    }
}
