//! The lattice data structure: an arena of nodes joined by inclusion edges.

use crate::lattice::variant::{Variant, VariantId};
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Index of a node in its lattice.
pub type NodeId = usize;

/// Index of an edge in its lattice.
pub type EdgeId = usize;

/// A directed edge meaning `language(source) ⊆ language(target)`.
///
/// The source is the parent, the target the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeEdge {
    source: NodeId,
    target: NodeId,
    annotation: Option<String>,
}

impl LatticeEdge {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Free-form data attached by report collaborators, such as a diff summary.
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }
}

/// A node wrapping one value, with the edges from its parents and to its
/// children.
#[derive(Debug, Clone)]
pub struct LatticeNode<V> {
    value: V,
    parent_edges: Vec<EdgeId>,
    child_edges: Vec<EdgeId>,
    /// Set when some meet or join involving this node could not be computed.
    /// Never cleared.
    incomplete: bool,
}

impl<V> LatticeNode<V> {
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn parent_edges(&self) -> &[EdgeId] {
        &self.parent_edges
    }

    pub fn child_edges(&self) -> &[EdgeId] {
        &self.child_edges
    }

    pub fn is_incomplete(&self) -> bool {
        self.incomplete
    }
}

/// A partial order of values, kept as a DAG without implied edges at the
/// time each edge is added. Nodes and edges are only ever added.
#[derive(Debug, Clone)]
pub struct Lattice<V> {
    nodes: Vec<LatticeNode<V>>,
    edges: Vec<LatticeEdge>,
}

impl<V> Lattice<V> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, value: V) -> NodeId {
        self.nodes.push(LatticeNode {
            value,
            parent_edges: Vec::new(),
            child_edges: Vec::new(),
            incomplete: false,
        });
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &LatticeNode<V> {
        &self.nodes[id]
    }

    pub fn value(&self, id: NodeId) -> &V {
        &self.nodes[id].value
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &LatticeNode<V>)> + '_ {
        self.nodes.iter().enumerate()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.nodes.iter().map(|node| &node.value)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge(&self, id: EdgeId) -> &LatticeEdge {
        &self.edges[id]
    }

    pub fn edges(&self) -> &[LatticeEdge] {
        &self.edges
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Whether there is an edge directly from `source` to `target`.
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.nodes[source]
            .child_edges
            .iter()
            .any(|&edge| self.edges[edge].target == target)
    }

    pub fn parents(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id]
            .parent_edges
            .iter()
            .map(|&edge| self.edges[edge].source)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id]
            .child_edges
            .iter()
            .map(|&edge| self.edges[edge].target)
    }

    /// Nodes without parents.
    pub fn roots(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&id| self.nodes[id].parent_edges.is_empty())
            .collect()
    }

    /// Nodes without children.
    pub fn leaves(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&id| self.nodes[id].child_edges.is_empty())
            .collect()
    }

    /// Add an edge unconditionally.
    fn add_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        let id = self.edges.len();
        self.edges.push(LatticeEdge {
            source,
            target,
            annotation: None,
        });
        self.nodes[source].child_edges.push(id);
        self.nodes[target].parent_edges.push(id);
        id
    }

    /// Add an edge from `source` to `target` unless it is a self-loop or
    /// already implied by reachability.
    pub fn add_edge_unless_implied(&mut self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        if source == target || self.is_ancestor_of(source, target) {
            return None;
        }
        Some(self.add_edge(source, target))
    }

    pub fn set_annotation(&mut self, edge: EdgeId, annotation: impl Into<String>) {
        self.edges[edge].annotation = Some(annotation.into());
    }

    /// All nodes reachable from `id` by following edges forward (`down`) or
    /// backward, nearest first, excluding `id` itself.
    fn reachable(&self, id: NodeId, down: bool) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        seen[id] = true;
        let mut order = Vec::new();
        let mut queue = VecDeque::from([id]);

        while let Some(current) = queue.pop_front() {
            let node = &self.nodes[current];
            let edges = if down {
                &node.child_edges
            } else {
                &node.parent_edges
            };
            for &edge in edges {
                let next = if down {
                    self.edges[edge].target
                } else {
                    self.edges[edge].source
                };
                if !seen[next] {
                    seen[next] = true;
                    order.push(next);
                    queue.push_back(next);
                }
            }
        }

        order
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        self.reachable(id, false)
    }

    /// Strict descendants of `id`, nearest first.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        self.reachable(id, true)
    }

    /// Whether `ancestor` reaches `node` through one or more edges.
    /// Computed on demand, as the graph grows during completion.
    pub fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> bool {
        if ancestor == node {
            return false;
        }
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![ancestor];
        seen[ancestor] = true;

        while let Some(current) = stack.pop() {
            for next in self.children(current) {
                if next == node {
                    return true;
                }
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }

        false
    }

    pub fn is_descendant_of(&self, descendant: NodeId, node: NodeId) -> bool {
        self.is_ancestor_of(node, descendant)
    }

    /// Whether one of the two nodes is an ancestor of the other.
    pub fn are_related(&self, a: NodeId, b: NodeId) -> bool {
        self.is_ancestor_of(a, b) || self.is_ancestor_of(b, a)
    }

    /// The nearest node at or above both `a` and `b` satisfying `accept`.
    pub fn find_common_ancestor<F>(&self, a: NodeId, b: NodeId, mut accept: F) -> Option<NodeId>
    where
        F: FnMut(&V) -> bool,
    {
        std::iter::once(a)
            .chain(self.ancestors(a))
            .filter(|&x| x == b || self.is_ancestor_of(x, b))
            .find(|&x| accept(&self.nodes[x].value))
    }

    /// The nearest node at or below both `a` and `b` satisfying `accept`.
    pub fn find_common_descendant<F>(&self, a: NodeId, b: NodeId, mut accept: F) -> Option<NodeId>
    where
        F: FnMut(&V) -> bool,
    {
        std::iter::once(a)
            .chain(self.descendants(a))
            .filter(|&x| x == b || self.is_descendant_of(x, b))
            .find(|&x| accept(&self.nodes[x].value))
    }

    /// The first node, in node order, satisfying `accept`.
    pub fn find_node<F>(&self, mut accept: F) -> Option<NodeId>
    where
        F: FnMut(&V) -> bool,
    {
        self.nodes.iter().position(|node| accept(&node.value))
    }

    pub fn mark_incomplete(&mut self, id: NodeId) {
        self.nodes[id].incomplete = true;
    }

    /// Whether any node of the lattice is marked incomplete.
    pub fn is_incomplete(&self) -> bool {
        self.nodes.iter().any(|node| node.incomplete)
    }

    /// Reorder the nodes by `compare`, renumbering node ids. Edge ids and the
    /// order of each node's edge lists are preserved.
    pub fn sort_nodes_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut order: Vec<NodeId> = (0..self.nodes.len()).collect();
        order.sort_by(|&x, &y| compare(&self.nodes[x].value, &self.nodes[y].value));

        let mut new_id = vec![0; self.nodes.len()];
        for (new, &old) in order.iter().enumerate() {
            new_id[old] = new;
        }
        for edge in &mut self.edges {
            edge.source = new_id[edge.source];
            edge.target = new_id[edge.target];
        }

        let mut slots: Vec<Option<LatticeNode<V>>> = self.nodes.drain(..).map(Some).collect();
        self.nodes = order
            .iter()
            .filter_map(|&old| slots[old].take())
            .collect();
    }
}

impl<T> Lattice<Variant<T>> {
    /// Nodes whose variant was supplied as input, in node order.
    pub fn input_nodes(&self) -> Vec<NodeId> {
        self.variant_nodes(false)
    }

    /// Nodes whose variant was created during completion, in node order.
    pub fn computed_nodes(&self) -> Vec<NodeId> {
        self.variant_nodes(true)
    }

    fn variant_nodes(&self, computed: bool) -> Vec<NodeId> {
        (0..self.nodes.len())
            .filter(|&id| self.nodes[id].value.is_computed() == computed)
            .collect()
    }

    pub fn find_variant(&self, id: VariantId) -> Option<NodeId> {
        self.find_node(|variant| variant.id() == id)
    }
}

impl<V> Default for Lattice<V> {
    fn default() -> Self {
        Self::new()
    }
}
