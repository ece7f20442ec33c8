//! Pairwise construction of a partial order from deduplicated values.

use crate::error::Result;
use crate::lattice::algebra::VariantAlgebra;
use crate::lattice::graph::{Lattice, NodeId};
use crate::lattice::variant::Variant;
use tracing::debug;

/// Inserts values one at a time, comparing each against every node already
/// present with the injected `in_partial_order(x, y)` predicate (`x` below
/// `y`).
///
/// The values must already be distinct under the order: two values that are
/// below each other are treated as if only the first comparison held.
pub struct LatticeBuilder<F> {
    in_partial_order: F,
}

impl<F> LatticeBuilder<F> {
    pub fn new(in_partial_order: F) -> Self {
        Self { in_partial_order }
    }

    pub fn build<V, E, I>(&mut self, values: I) -> Result<Lattice<V>, E>
    where
        F: FnMut(&V, &V) -> Result<bool, E>,
        I: IntoIterator<Item = V>,
    {
        let mut lattice = Lattice::new();
        for value in values {
            self.insert(&mut lattice, value)?;
        }
        debug!(
            nodes = lattice.num_nodes(),
            edges = lattice.num_edges(),
            "built partial order"
        );
        Ok(lattice)
    }

    /// Add `value` to `lattice`, linking it below its minimal upper bounds
    /// and above its maximal lower bounds among the existing nodes.
    pub fn insert<V, E>(&mut self, lattice: &mut Lattice<V>, value: V) -> Result<NodeId, E>
    where
        F: FnMut(&V, &V) -> Result<bool, E>,
    {
        let mut lower = Vec::new();
        let mut upper = Vec::new();
        for existing in 0..lattice.num_nodes() {
            let existing_value = lattice.value(existing);
            if (self.in_partial_order)(existing_value, &value)? {
                lower.push(existing);
            } else if (self.in_partial_order)(&value, existing_value)? {
                upper.push(existing);
            }
        }

        let node = lattice.add_node(value);
        for &x in &lower {
            if !lower.iter().any(|&y| lattice.is_ancestor_of(x, y)) {
                lattice.add_edge_unless_implied(x, node);
            }
        }
        for &x in &upper {
            if !upper.iter().any(|&y| lattice.is_ancestor_of(y, x)) {
                lattice.add_edge_unless_implied(node, x);
            }
        }
        Ok(node)
    }
}

/// Order `variants` by the inclusion relation of `algebra`.
pub fn build_variant_lattice<T, A>(
    variants: Vec<Variant<T>>,
    algebra: &A,
) -> Result<Lattice<Variant<T>>>
where
    A: VariantAlgebra<T>,
{
    LatticeBuilder::new(|x: &Variant<T>, y: &Variant<T>| algebra.included(x.value(), y.value()))
        .build(variants)
}
