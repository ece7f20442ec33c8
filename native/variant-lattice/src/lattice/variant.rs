//! Variants: one representative per language-equivalence class.

use crate::lattice::algebra::VariantAlgebra;
use std::fmt;

/// Identifier of a variant, assigned in creation order. It doubles as the
/// display name and the canonical ordering key of lattice nodes.
pub type VariantId = usize;

/// An immutable wrapper around one equivalence class of compared models.
#[derive(Debug, Clone)]
pub struct Variant<T> {
    value: T,
    id: VariantId,
    size: usize,
    computed: bool,
    /// Names of the compared subjects whose model falls in this class.
    labels: Vec<String>,
}

impl<T> Variant<T> {
    /// A variant supplied as input, representing the subjects in `labels`.
    pub fn new(value: T, id: VariantId, size: usize, labels: Vec<String>) -> Self {
        Self {
            value,
            id,
            size,
            computed: false,
            labels,
        }
    }

    /// A variant synthesized while completing a lattice.
    pub fn computed(value: T, id: VariantId, size: usize) -> Self {
        Self {
            value,
            id,
            size,
            computed: true,
            labels: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn id(&self) -> VariantId {
        self.id
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_computed(&self) -> bool {
        self.computed
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl<T> fmt::Display for Variant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.computed {
            write!(f, "variant {} (computed)", self.id)
        } else {
            write!(f, "variant {}", self.id)
        }
    }
}

/// Group labelled values into variants, one per equivalence class under
/// `algebra`. Variants are numbered from `first_id` in order of the first
/// value of each class; a class keeps its first value as representative.
pub fn group_variants<T, A, I>(values: I, algebra: &A, first_id: VariantId) -> Vec<Variant<T>>
where
    A: VariantAlgebra<T>,
    I: IntoIterator<Item = (String, T)>,
{
    let mut classes: Vec<(T, Vec<String>)> = Vec::new();
    for (label, value) in values {
        match classes
            .iter_mut()
            .find(|(representative, _)| algebra.equivalent(representative, &value))
        {
            Some((_, labels)) => labels.push(label),
            None => classes.push((value, vec![label])),
        }
    }

    classes
        .into_iter()
        .enumerate()
        .map(|(offset, (value, labels))| {
            let size = algebra.size(&value);
            Variant::new(value, first_id + offset, size, labels)
        })
        .collect()
}
