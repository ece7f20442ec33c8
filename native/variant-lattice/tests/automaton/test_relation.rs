use variant_lattice::{
    Dfa,
    lattice::{ModelAlgebra, VariantAlgebra},
    relation::{equivalent, included, inclusion_witness, separating_word},
};

use super::strategy::{dfa_strategy, language};

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn mutual_inclusion_is_equivalence(a in dfa_strategy(), b in dfa_strategy()) {
        let both = included(&a, &b).unwrap() && included(&b, &a).unwrap();
        prop_assert_eq!(both, equivalent(&a, &b));
        prop_assert_eq!(equivalent(&a, &b), language(&a) == language(&b));
    }

    #[test]
    fn separating_word_separates(a in dfa_strategy(), b in dfa_strategy()) {
        match separating_word(&a, &b) {
            Some(word) => prop_assert!(a.accepts(&word) != b.accepts(&word)),
            None => prop_assert_eq!(language(&a), language(&b)),
        }
    }

    #[test]
    fn inclusion_witness_is_in_the_difference(a in dfa_strategy(), b in dfa_strategy()) {
        match inclusion_witness(&a, &b).unwrap() {
            Some(word) => prop_assert!(a.accepts(&word) && !b.accepts(&word)),
            None => prop_assert!(included(&a, &b).unwrap()),
        }
    }

    #[test]
    fn meet_and_join_are_idempotent(a in dfa_strategy()) {
        let algebra = ModelAlgebra::default();
        prop_assert!(equivalent(&algebra.meet(&a, &a).unwrap().unwrap(), &a));
        prop_assert!(equivalent(&algebra.join(&a, &a).unwrap().unwrap(), &a));
    }

    #[test]
    fn meet_and_join_commute(a in dfa_strategy(), b in dfa_strategy()) {
        let algebra = ModelAlgebra::default();
        prop_assert!(equivalent(
            &algebra.meet(&a, &b).unwrap().unwrap(),
            &algebra.meet(&b, &a).unwrap().unwrap()
        ));
        prop_assert!(equivalent(
            &algebra.join(&a, &b).unwrap().unwrap(),
            &algebra.join(&b, &a).unwrap().unwrap()
        ));
    }

    #[test]
    fn meet_and_join_associate(a in dfa_strategy(), b in dfa_strategy(), c in dfa_strategy()) {
        let algebra = ModelAlgebra::default();
        let meet = |x: &Dfa<char>, y: &Dfa<char>| algebra.meet(x, y).unwrap().unwrap();
        let join = |x: &Dfa<char>, y: &Dfa<char>| algebra.join(x, y).unwrap().unwrap();
        prop_assert!(equivalent(&meet(&meet(&a, &b), &c), &meet(&a, &meet(&b, &c))));
        prop_assert!(equivalent(&join(&join(&a, &b), &c), &join(&a, &join(&b, &c))));
    }
}
