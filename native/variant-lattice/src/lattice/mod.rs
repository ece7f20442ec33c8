//! Partial orders of variants and their completion towards lattices.

pub mod algebra;
pub mod builder;
pub mod completer;
pub mod graph;
pub mod variant;

pub use algebra::{ModelAlgebra, ModelSetAlgebra, VariantAlgebra};
pub use builder::{LatticeBuilder, build_variant_lattice};
pub use completer::{Completion, CompletionPass, LatticeCompleter};
pub use graph::{EdgeId, Lattice, LatticeEdge, LatticeNode, NodeId};
pub use variant::{Variant, VariantId, group_variants};
