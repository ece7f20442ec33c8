use variant_lattice::{
    StateId,
    algebra::{determinize, minimize},
    relation::equivalent,
};

use super::strategy::{dfa_strategy, language, sink_states};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn minimize_preserves_language(dfa in dfa_strategy()) {
        let minimal = minimize(&dfa).unwrap();
        prop_assert_eq!(language(&minimal), language(&dfa));
    }

    #[test]
    fn minimize_leaves_no_mergeable_states(dfa in dfa_strategy()) {
        let minimal = minimize(&dfa).unwrap();
        for p in 0..minimal.num_states() as StateId {
            for q in (p + 1)..minimal.num_states() as StateId {
                let mut from_p = minimal.clone();
                from_p.set_initial(p);
                let mut from_q = minimal.clone();
                from_q.set_initial(q);
                prop_assert!(!equivalent(&from_p, &from_q), "states {} and {} are equivalent", p, q);
            }
        }
    }

    #[test]
    fn minimize_is_trim_and_sink_free(dfa in dfa_strategy()) {
        let minimal = minimize(&dfa).unwrap();
        prop_assert_eq!(minimal.reachable_states().len(), minimal.num_states());
        if !minimal.is_empty() {
            prop_assert!(sink_states(&minimal).is_empty());
        } else {
            prop_assert_eq!(minimal.num_states(), 1);
        }
    }

    #[test]
    fn minimize_is_canonical(dfa in dfa_strategy()) {
        let minimal = minimize(&dfa).unwrap();
        prop_assert_eq!(minimize(&minimal).unwrap(), minimal.clone());
        // The same language reached through an NFA round trip.
        prop_assert_eq!(minimize(&determinize(&dfa.to_nfa())).unwrap(), minimal);
    }
}
