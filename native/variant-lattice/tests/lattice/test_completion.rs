use variant_lattice::{
    Dfa,
    algebra::{intersect, union},
    lattice::{
        Lattice, LatticeCompleter, ModelAlgebra, NodeId, Variant, VariantAlgebra,
        build_variant_lattice, group_variants,
    },
    relation::equivalent,
};

use super::strategy::dfa_strategy;

use proptest::{collection::vec, prelude::ProptestConfig, prop_assert, proptest};

fn completed(models: Vec<Dfa<char>>) -> Lattice<Variant<Dfa<char>>> {
    let algebra = ModelAlgebra::default();
    let labelled = models
        .into_iter()
        .enumerate()
        .map(|(index, model)| (index.to_string(), model));
    let variants = group_variants(labelled, &algebra, 0);
    let mut lattice = build_variant_lattice(variants, &algebra).unwrap();
    LatticeCompleter::new(&algebra).complete(&mut lattice).unwrap();
    lattice
}

/// `node` itself or one of its ancestors.
fn at_or_above(lattice: &Lattice<Variant<Dfa<char>>>, node: NodeId) -> Vec<NodeId> {
    std::iter::once(node).chain(lattice.ancestors(node)).collect()
}

fn at_or_below(lattice: &Lattice<Variant<Dfa<char>>>, node: NodeId) -> Vec<NodeId> {
    std::iter::once(node).chain(lattice.descendants(node)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn edges_follow_strict_inclusion(models in vec(dfa_strategy(), 2..=4)) {
        let lattice = completed(models);
        let algebra = ModelAlgebra::default();
        for edge in lattice.edges() {
            let source = lattice.value(edge.source()).value();
            let target = lattice.value(edge.target()).value();
            prop_assert!(algebra.included(source, target).unwrap());
            prop_assert!(!equivalent(source, target));
        }
    }

    #[test]
    fn nodes_are_distinct_classes(models in vec(dfa_strategy(), 2..=4)) {
        let lattice = completed(models);
        let values: Vec<&Dfa<char>> = lattice.values().map(Variant::value).collect();
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                prop_assert!(!equivalent(*a, *b));
            }
        }
        let ids: Vec<usize> = lattice.values().map(Variant::id).collect();
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn input_pairs_have_meets_and_joins(models in vec(dfa_strategy(), 2..=4)) {
        let lattice = completed(models);
        let inputs = lattice.input_nodes();
        for (i, &x) in inputs.iter().enumerate() {
            for &y in &inputs[i + 1..] {
                let (a, b) = (lattice.value(x).value(), lattice.value(y).value());

                let meet = intersect(a, b).unwrap();
                let above = at_or_above(&lattice, y);
                let found_meet = at_or_above(&lattice, x).into_iter().any(|z| {
                    above.contains(&z) && equivalent(lattice.value(z).value(), &meet)
                });
                prop_assert!(found_meet, "no meet of nodes {} and {}", x, y);

                let join = union(a, b).unwrap();
                let below = at_or_below(&lattice, y);
                let found_join = at_or_below(&lattice, x).into_iter().any(|z| {
                    below.contains(&z) && equivalent(lattice.value(z).value(), &join)
                });
                prop_assert!(found_join, "no join of nodes {} and {}", x, y);
            }
        }
    }
}
