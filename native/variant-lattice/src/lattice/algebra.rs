//! The operations lattice construction needs from the values it orders.

use crate::algebra::{intersect, union};
use crate::automaton::{Dfa, Symbol};
use crate::config::SizeLimits;
use crate::error::Result;
use crate::model::ModelSet;
use crate::relation::{equivalent, included};

/// Equivalence, partial order, meet and join over some kind of value.
///
/// `meet` and `join` must be idempotent, commutative and associative up to
/// `equivalent`. They return `Ok(None)` when the result would exceed the
/// size budget; that is a recoverable condition, unlike `Err`.
pub trait VariantAlgebra<T> {
    /// The size metric reported on variants.
    fn size(&self, value: &T) -> usize;

    fn equivalent(&self, a: &T, b: &T) -> bool;

    /// Whether `a` is below `b` in the partial order.
    fn included(&self, a: &T, b: &T) -> Result<bool>;

    fn meet(&self, a: &T, b: &T) -> Result<Option<T>>;

    fn join(&self, a: &T, b: &T) -> Result<Option<T>>;
}

/// Language operations on single models.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelAlgebra {
    limits: SizeLimits,
}

impl ModelAlgebra {
    pub fn new(limits: SizeLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    fn bounded<S, F>(limit: usize, a: &Dfa<S>, b: &Dfa<S>, combine: F) -> Result<Option<Dfa<S>>>
    where
        S: Symbol,
        F: FnOnce(&Dfa<S>, &Dfa<S>) -> Result<Dfa<S>>,
    {
        if a.num_states().saturating_mul(b.num_states()) > limit {
            return Ok(None);
        }
        let combined = combine(a, b)?;
        Ok((combined.num_states() <= limit).then_some(combined))
    }
}

impl<S: Symbol> VariantAlgebra<Dfa<S>> for ModelAlgebra {
    fn size(&self, value: &Dfa<S>) -> usize {
        value.num_states()
    }

    fn equivalent(&self, a: &Dfa<S>, b: &Dfa<S>) -> bool {
        equivalent(a, b)
    }

    fn included(&self, a: &Dfa<S>, b: &Dfa<S>) -> Result<bool> {
        included(a, b)
    }

    fn meet(&self, a: &Dfa<S>, b: &Dfa<S>) -> Result<Option<Dfa<S>>> {
        Self::bounded(self.limits.meet_states, a, b, intersect)
    }

    fn join(&self, a: &Dfa<S>, b: &Dfa<S>) -> Result<Option<Dfa<S>>> {
        Self::bounded(self.limits.join_states, a, b, union)
    }
}

/// Entity-wise operations on model sets. An entity missing from a set counts
/// as the empty language.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelSetAlgebra {
    models: ModelAlgebra,
}

impl ModelSetAlgebra {
    pub fn new(limits: SizeLimits) -> Self {
        Self {
            models: ModelAlgebra::new(limits),
        }
    }

    fn entity_wise<S, F>(
        a: &ModelSet<S>,
        b: &ModelSet<S>,
        mut combine: F,
    ) -> Result<Option<ModelSet<S>>>
    where
        S: Symbol,
        F: FnMut(&Dfa<S>, &Dfa<S>) -> Result<Option<Dfa<S>>>,
    {
        let mut combined = ModelSet::new();
        for entity in a.entity_union(b) {
            let left = a.model_or_empty(entity);
            let right = b.model_or_empty(entity);
            match combine(&*left, &*right)? {
                Some(model) => combined.insert(entity, model),
                None => return Ok(None),
            };
        }
        Ok(Some(combined))
    }
}

impl<S: Symbol> VariantAlgebra<ModelSet<S>> for ModelSetAlgebra {
    fn size(&self, value: &ModelSet<S>) -> usize {
        value.size()
    }

    fn equivalent(&self, a: &ModelSet<S>, b: &ModelSet<S>) -> bool {
        a.entity_union(b)
            .into_iter()
            .all(|entity| equivalent(&*a.model_or_empty(entity), &*b.model_or_empty(entity)))
    }

    fn included(&self, a: &ModelSet<S>, b: &ModelSet<S>) -> Result<bool> {
        for entity in a.entity_union(b) {
            if !included(&*a.model_or_empty(entity), &*b.model_or_empty(entity))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn meet(&self, a: &ModelSet<S>, b: &ModelSet<S>) -> Result<Option<ModelSet<S>>> {
        Self::entity_wise(a, b, |x, y| self.models.meet(x, y))
    }

    fn join(&self, a: &ModelSet<S>, b: &ModelSet<S>) -> Result<Option<ModelSet<S>>> {
        Self::entity_wise(a, b, |x, y| self.models.join(x, y))
    }
}
