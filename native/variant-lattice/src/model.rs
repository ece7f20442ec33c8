//! Model sets: the behavioral models of one compared subject, by entity.

use crate::automaton::{Alphabet, Dfa, Symbol};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// The models of one comparison subject, one acceptor per entity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSet<S: Symbol> {
    models: BTreeMap<String, Dfa<S>>,
}

impl<S: Symbol> ModelSet<S> {
    pub fn new() -> Self {
        Self {
            models: BTreeMap::new(),
        }
    }

    /// Set the model of `entity`, returning the one it replaces.
    pub fn insert(&mut self, entity: impl Into<String>, model: Dfa<S>) -> Option<Dfa<S>> {
        self.models.insert(entity.into(), model)
    }

    pub fn get(&self, entity: &str) -> Option<&Dfa<S>> {
        self.models.get(entity)
    }

    /// The model of `entity`, or the empty-language acceptor if this set has
    /// no model for it.
    pub fn model_or_empty(&self, entity: &str) -> Cow<'_, Dfa<S>> {
        match self.models.get(entity) {
            Some(model) => Cow::Borrowed(model),
            None => Cow::Owned(Dfa::new(Alphabet::new())),
        }
    }

    /// Entity names in sorted order.
    pub fn entities(&self) -> impl Iterator<Item = &str> + '_ {
        self.models.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dfa<S>)> + '_ {
        self.models.iter().map(|(entity, model)| (entity.as_str(), model))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Total number of states over all models.
    pub fn size(&self) -> usize {
        self.models.values().map(Dfa::num_states).sum()
    }

    /// The sorted union of the entity names of `self` and `other`.
    pub fn entity_union<'a>(&'a self, other: &'a ModelSet<S>) -> Vec<&'a str> {
        let mut entities: Vec<&str> = self.entities().chain(other.entities()).collect();
        entities.sort_unstable();
        entities.dedup();
        entities
    }

    /// Apply `f` to every model.
    pub fn map_models<E, F>(self, mut f: F) -> Result<ModelSet<S>, E>
    where
        F: FnMut(Dfa<S>) -> Result<Dfa<S>, E>,
    {
        let models = self
            .models
            .into_iter()
            .map(|(entity, model)| f(model).map(|model| (entity, model)))
            .collect::<Result<_, E>>()?;
        Ok(ModelSet { models })
    }
}

impl<S: Symbol> Default for ModelSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol, N: Into<String>> FromIterator<(N, Dfa<S>)> for ModelSet<S> {
    fn from_iter<I: IntoIterator<Item = (N, Dfa<S>)>>(iter: I) -> Self {
        Self {
            models: iter
                .into_iter()
                .map(|(entity, model)| (entity.into(), model))
                .collect(),
        }
    }
}
