use variant_lattice::{
    Alphabet, Dfa, SizeLimits,
    algebra::union,
    lattice::{
        Lattice, LatticeCompleter, ModelAlgebra, NodeId, Variant, build_variant_lattice,
        group_variants,
    },
    relation::equivalent,
};

use super::init_tracing;

fn words(words: &[&str]) -> Dfa<char> {
    let words: Vec<Vec<char>> = words.iter().map(|w| w.chars().collect()).collect();
    Dfa::from_words(Alphabet::new(), words.iter())
}

/// The acceptor of `x*`.
fn star(x: char) -> Dfa<char> {
    let mut dfa = Dfa::new(Alphabet::new());
    dfa.set_accepting(0, true);
    dfa.add_transition(0, x, 0);
    dfa
}

fn lattice_of(models: Vec<Dfa<char>>, algebra: &ModelAlgebra) -> Lattice<Variant<Dfa<char>>> {
    let labelled = models
        .into_iter()
        .enumerate()
        .map(|(index, model)| (format!("subject {index}"), model));
    let variants = group_variants(labelled, algebra, 0);
    build_variant_lattice(variants, algebra).unwrap()
}

fn node_with_two_parents(lattice: &Lattice<Variant<Dfa<char>>>) -> Vec<NodeId> {
    (0..lattice.num_nodes())
        .filter(|&node| lattice.parents(node).count() == 2)
        .collect()
}

#[test]
fn single_inclusion_edge() {
    init_tracing();
    let algebra = ModelAlgebra::default();
    let mut ab_star = Dfa::new(Alphabet::new());
    ab_star.set_accepting(0, true);
    ab_star.add_transition(0, 'a', 1);
    ab_star.add_transition(1, 'b', 0);
    let with_a = union(&ab_star, &words(&["a"])).unwrap();

    let mut lattice = lattice_of(vec![ab_star, with_a], &algebra);
    LatticeCompleter::new(&algebra).complete(&mut lattice).unwrap();

    assert_eq!(lattice.num_nodes(), 2);
    assert_eq!(lattice.num_edges(), 1);
    assert!(lattice.has_edge(0, 1));
    assert_eq!(lattice.parents(0).count(), 0);
    assert_eq!(lattice.children(1).count(), 0);
}

#[test]
fn meet_and_join_of_unrelated_variants() {
    init_tracing();
    let algebra = ModelAlgebra::default();
    let mut lattice = lattice_of(vec![star('a'), star('b')], &algebra);
    assert_eq!(lattice.num_edges(), 0);

    let completion = LatticeCompleter::new(&algebra).complete(&mut lattice).unwrap();
    assert!(completion.is_complete());
    assert_eq!(lattice.num_nodes(), 4);
    assert_eq!(lattice.computed_nodes(), vec![2, 3]);

    let meet = lattice.value(2).value();
    assert!(equivalent(meet, &Dfa::epsilon(Alphabet::new())));
    assert!(lattice.has_edge(2, 0));
    assert!(lattice.has_edge(2, 1));

    let join = lattice.value(3).value();
    assert!(join.accepts(&['a', 'a']));
    assert!(join.accepts(&['b']));
    assert!(!join.accepts(&['a', 'b']));
    assert!(lattice.has_edge(0, 3));
    assert!(lattice.has_edge(1, 3));
    assert!(!lattice.is_incomplete());
}

#[test]
fn join_over_the_size_limit() {
    init_tracing();
    let algebra = ModelAlgebra::new(SizeLimits {
        meet_states: 100,
        join_states: 2,
    });
    let mut lattice = lattice_of(
        vec![Dfa::epsilon(Alphabet::new()), star('a'), star('b')],
        &algebra,
    );
    assert!(lattice.has_edge(0, 1));
    assert!(lattice.has_edge(0, 2));

    let completion = LatticeCompleter::new(&algebra).complete(&mut lattice).unwrap();

    // The meet of a* and b* is the existing epsilon variant.
    assert_eq!(lattice.num_nodes(), 3);
    assert_eq!(lattice.num_edges(), 2);
    assert!(lattice.has_edge(0, 1));
    assert!(lattice.has_edge(0, 2));

    assert_eq!(completion.warnings.len(), 1);
    assert!(completion.warnings[0].contains("union"));
    assert!(lattice.node(1).is_incomplete());
    assert!(lattice.node(2).is_incomplete());
    assert!(!lattice.node(0).is_incomplete());
    assert!(lattice.is_incomplete());
}

#[test]
fn two_parents_without_shared_edge() {
    init_tracing();
    let algebra = ModelAlgebra::default();
    let mut lattice = lattice_of(
        vec![words(&["a"]), words(&["b"]), words(&["a", "b"])],
        &algebra,
    );

    assert_eq!(node_with_two_parents(&lattice), vec![2]);
    assert!(!lattice.are_related(0, 1));
    assert_eq!(lattice.num_edges(), 2);

    // Completion adds the empty meet above both parents but keeps them apart.
    LatticeCompleter::new(&algebra).complete(&mut lattice).unwrap();
    assert_eq!(node_with_two_parents(&lattice), vec![2]);
    assert!(!lattice.has_edge(0, 1));
    assert!(!lattice.has_edge(1, 0));
    assert_eq!(lattice.num_nodes(), 4);
}
