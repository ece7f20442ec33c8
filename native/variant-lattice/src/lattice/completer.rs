//! Extending a partial order of variants towards a lattice.
//!
//! Completion runs a meet pass and then a join pass. Each pass combines input
//! nodes with each other, and every node it creates with the input nodes, but
//! never two created nodes with each other. A combination the algebra refuses
//! for size marks both operands incomplete instead of failing the run.

use crate::error::Result;
use crate::lattice::algebra::VariantAlgebra;
use crate::lattice::graph::{Lattice, NodeId};
use crate::lattice::variant::{Variant, VariantId};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPass {
    /// Greatest lower bounds, computed as intersections.
    Meet,
    /// Least upper bounds, computed as unions.
    Join,
}

impl fmt::Display for CompletionPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionPass::Meet => write!(f, "intersection"),
            CompletionPass::Join => write!(f, "union"),
        }
    }
}

/// What a completion run added to its lattice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Nodes created for combinations not yet in the lattice.
    pub added_nodes: usize,
    /// One message per combination skipped for size.
    pub warnings: Vec<String>,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub struct LatticeCompleter<'a, A> {
    algebra: &'a A,
    meets: bool,
    joins: bool,
}

impl<'a, A> LatticeCompleter<'a, A> {
    pub fn new(algebra: &'a A) -> Self {
        Self {
            algebra,
            meets: true,
            joins: true,
        }
    }

    pub fn with_meets(mut self, enabled: bool) -> Self {
        self.meets = enabled;
        self
    }

    pub fn with_joins(mut self, enabled: bool) -> Self {
        self.joins = enabled;
        self
    }

    /// Run the enabled passes, then sort the nodes by variant id.
    ///
    /// Created variants are numbered after the largest id already present.
    pub fn complete<T>(&self, lattice: &mut Lattice<Variant<T>>) -> Result<Completion>
    where
        A: VariantAlgebra<T>,
    {
        let mut next_id = lattice
            .values()
            .map(Variant::id)
            .max()
            .map_or(0, |id| id + 1);
        let mut completion = Completion::default();

        if self.meets {
            self.run_pass(lattice, CompletionPass::Meet, &mut next_id, &mut completion)?;
        }
        if self.joins {
            self.run_pass(lattice, CompletionPass::Join, &mut next_id, &mut completion)?;
        }

        lattice.sort_nodes_by(|a, b| a.id().cmp(&b.id()));
        Ok(completion)
    }

    fn run_pass<T>(
        &self,
        lattice: &mut Lattice<Variant<T>>,
        pass: CompletionPass,
        next_id: &mut VariantId,
        completion: &mut Completion,
    ) -> Result<()>
    where
        A: VariantAlgebra<T>,
    {
        let inputs = lattice.input_nodes();
        let mut worklist: VecDeque<NodeId> = inputs.iter().copied().collect();
        let added_before = completion.added_nodes;

        while let Some(node) = worklist.pop_front() {
            trace!(%pass, node, "completing");
            // An input only meets inputs after it in the ordering; a created
            // node meets every input.
            let partners = match inputs.iter().position(|&input| input == node) {
                Some(index) => &inputs[index + 1..],
                None => &inputs[..],
            };

            for &partner in partners {
                if partner == node || lattice.are_related(node, partner) {
                    continue;
                }

                let (a, b) = (lattice.value(node).value(), lattice.value(partner).value());
                let combined = match pass {
                    CompletionPass::Meet => self.algebra.meet(a, b)?,
                    CompletionPass::Join => self.algebra.join(a, b)?,
                };
                let Some(combined) = combined else {
                    let message = format!(
                        "{pass} of {} and {} exceeds the size limit",
                        lattice.value(node),
                        lattice.value(partner)
                    );
                    warn!("{message}");
                    lattice.mark_incomplete(node);
                    lattice.mark_incomplete(partner);
                    completion.warnings.push(message);
                    continue;
                };

                let existing = self.find_existing(lattice, pass, node, partner, &combined);
                let target = match existing {
                    Some(existing) => existing,
                    None => {
                        let size = self.algebra.size(&combined);
                        let created = lattice.add_node(Variant::computed(combined, *next_id, size));
                        *next_id += 1;
                        completion.added_nodes += 1;
                        worklist.push_back(created);
                        created
                    }
                };

                for operand in [node, partner] {
                    match pass {
                        CompletionPass::Meet => lattice.add_edge_unless_implied(target, operand),
                        CompletionPass::Join => lattice.add_edge_unless_implied(operand, target),
                    };
                }
            }
        }

        debug!(
            %pass,
            added = completion.added_nodes - added_before,
            nodes = lattice.num_nodes(),
            edges = lattice.num_edges(),
            "completion pass finished"
        );
        Ok(())
    }

    /// A node already holding `combined`: first among the common ancestors
    /// (meet) or descendants (join) of the operands, then anywhere.
    fn find_existing<T>(
        &self,
        lattice: &Lattice<Variant<T>>,
        pass: CompletionPass,
        a: NodeId,
        b: NodeId,
        combined: &T,
    ) -> Option<NodeId>
    where
        A: VariantAlgebra<T>,
    {
        let same = |variant: &Variant<T>| self.algebra.equivalent(variant.value(), combined);
        let nearby = match pass {
            CompletionPass::Meet => lattice.find_common_ancestor(a, b, same),
            CompletionPass::Join => lattice.find_common_descendant(a, b, same),
        };
        nearby.or_else(|| lattice.find_node(same))
    }
}
