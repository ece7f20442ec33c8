//! A full comparison run over the model sets of several subjects.

use crate::algebra::{minimize, prefix_close, weak_trace_normalize};
use crate::automaton::{Dfa, Symbol};
use crate::config::ComparisonConfig;
use crate::error::Result;
use crate::lattice::{
    Lattice, LatticeCompleter, ModelAlgebra, ModelSetAlgebra, Variant, VariantAlgebra,
    build_variant_lattice, group_variants,
};
use crate::model::ModelSet;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

/// Receives a checkpoint between the top-level phases of a run.
pub trait Progress {
    fn checkpoint(&mut self, _phase: &str) {}
}

/// Ignores every checkpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

impl<F: FnMut(&str)> Progress for F {
    fn checkpoint(&mut self, phase: &str) {
        (self)(phase)
    }
}

/// Per-entity lattices, the lattice of whole model sets, and one warning per
/// incomplete lattice.
#[derive(Debug, Clone)]
pub struct ComparisonResult<S: Symbol> {
    entities: BTreeMap<String, Lattice<Variant<Dfa<S>>>>,
    overall: Lattice<Variant<ModelSet<S>>>,
    warnings: Vec<String>,
}

impl<S: Symbol> ComparisonResult<S> {
    pub fn entity(&self, entity: &str) -> Option<&Lattice<Variant<Dfa<S>>>> {
        self.entities.get(entity)
    }

    /// Entity lattices in entity name order.
    pub fn entities(&self) -> impl Iterator<Item = (&str, &Lattice<Variant<Dfa<S>>>)> + '_ {
        self.entities
            .iter()
            .map(|(entity, lattice)| (entity.as_str(), lattice))
    }

    pub fn overall(&self) -> &Lattice<Variant<ModelSet<S>>> {
        &self.overall
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_incomplete(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Compare the model sets of `subjects`, each given with its name.
///
/// Models are preprocessed as configured, grouped into variants per entity and
/// as whole sets, ordered by inclusion and completed with meets and joins. An
/// entity missing from a subject's set takes part in the overall comparison as
/// the empty language; the entity's own lattice only covers the subjects that
/// have it.
pub fn compare_model_sets<S, N, I>(
    subjects: I,
    config: &ComparisonConfig<S>,
    progress: &mut dyn Progress,
) -> Result<ComparisonResult<S>>
where
    S: Symbol,
    N: Into<String>,
    I: IntoIterator<Item = (N, ModelSet<S>)>,
{
    let subjects = subjects
        .into_iter()
        .map(|(name, set)| {
            set.map_models(|model| preprocess(model, config))
                .map(|set| (name.into(), set))
        })
        .collect::<Result<Vec<(String, ModelSet<S>)>>>()?;
    info!(subjects = subjects.len(), "preprocessed model sets");
    progress.checkpoint("preprocess");

    let models = ModelAlgebra::new(config.limits);
    let entity_names: BTreeSet<&str> = subjects
        .iter()
        .flat_map(|(_, set)| set.entities())
        .collect();
    let mut warnings = Vec::new();
    let mut entities = BTreeMap::new();

    for entity in entity_names {
        let values = subjects.iter().filter_map(|(name, set)| {
            set.get(entity).map(|model| (name.clone(), model.clone()))
        });
        let variants = group_variants(values, &models, 0);
        info!(entity, variants = variants.len(), "grouped entity models");

        let lattice = order_and_complete(variants, &models, config)?;
        if lattice.is_incomplete() {
            warnings.push(incomplete_warning(&format!("entity `{entity}`"), &lattice));
        }
        info!(
            entity,
            nodes = lattice.num_nodes(),
            edges = lattice.num_edges(),
            "entity lattice done"
        );
        entities.insert(entity.to_string(), lattice);
        progress.checkpoint(entity);
    }

    let sets = ModelSetAlgebra::new(config.limits);
    let variants = group_variants(subjects, &sets, 0);
    info!(variants = variants.len(), "grouped model sets");
    let overall = order_and_complete(variants, &sets, config)?;
    if overall.is_incomplete() {
        warnings.push(incomplete_warning("model sets", &overall));
    }
    info!(
        nodes = overall.num_nodes(),
        edges = overall.num_edges(),
        "overall lattice done"
    );
    progress.checkpoint("overall");

    Ok(ComparisonResult {
        entities,
        overall,
        warnings,
    })
}

fn preprocess<S: Symbol>(model: Dfa<S>, config: &ComparisonConfig<S>) -> Result<Dfa<S>> {
    let mut model = match &config.tau {
        Some(tau) => weak_trace_normalize(&model, tau)?,
        None => model,
    };
    if config.prefix_close {
        prefix_close(&mut model);
    }
    minimize(&model)
}

fn order_and_complete<T, A, S>(
    variants: Vec<Variant<T>>,
    algebra: &A,
    config: &ComparisonConfig<S>,
) -> Result<Lattice<Variant<T>>>
where
    A: VariantAlgebra<T>,
{
    let mut lattice = build_variant_lattice(variants, algebra)?;
    LatticeCompleter::new(algebra)
        .with_meets(config.complete_meets)
        .with_joins(config.complete_joins)
        .complete(&mut lattice)?;
    Ok(lattice)
}

fn incomplete_warning<T>(subject: &str, lattice: &Lattice<Variant<T>>) -> String {
    let incomplete: Vec<String> = lattice
        .nodes()
        .filter(|(_, node)| node.is_incomplete())
        .map(|(_, node)| node.value().to_string())
        .collect();
    let message = format!(
        "lattice of {subject} is incomplete: size limit exceeded combining {}",
        incomplete.join(", ")
    );
    warn!("{message}");
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Alphabet;
    use crate::config::SizeLimits;

    fn words(words: &[&str]) -> Dfa<char> {
        let words: Vec<Vec<char>> = words.iter().map(|w| w.chars().collect()).collect();
        Dfa::from_words(Alphabet::new(), words.iter())
    }

    fn subject(server: &[&str], client: Option<&[&str]>) -> ModelSet<char> {
        let mut set = ModelSet::new();
        set.insert("server", words(server));
        if let Some(client) = client {
            set.insert("client", words(client));
        }
        set
    }

    #[test]
    fn test_compare_groups_equivalent_subjects() {
        let subjects = vec![
            ("v1", subject(&["ab"], Some(&["c"]))),
            ("v2", subject(&["ab"], Some(&["c"]))),
            ("v3", subject(&["ab", "b"], None)),
        ];
        let mut phases = Vec::new();
        let mut record = |phase: &str| phases.push(phase.to_string());
        let result =
            compare_model_sets(subjects, &ComparisonConfig::default(), &mut record).unwrap();

        let server = result.entity("server").unwrap();
        assert_eq!(server.input_nodes().len(), 2);
        assert_eq!(server.value(0).labels(), ["v1", "v2"]);
        assert!(server.has_edge(0, 1));

        let client = result.entity("client").unwrap();
        assert_eq!(client.num_nodes(), 1);
        assert_eq!(client.value(0).labels(), ["v1", "v2"]);

        // v3 lacks a client, so its set is not above the other two.
        let overall = result.overall();
        assert_eq!(overall.input_nodes().len(), 2);
        assert!(!overall.are_related(0, 1));
        assert_eq!(overall.computed_nodes().len(), 2);

        assert!(!result.is_incomplete());
        assert_eq!(phases, vec!["preprocess", "client", "server", "overall"]);
    }

    #[test]
    fn test_compare_reports_incomplete_lattices() {
        let subjects = vec![
            ("v1", subject(&["aa"], None)),
            ("v2", subject(&["bb"], None)),
        ];
        let config = ComparisonConfig::default()
            .with_limits(SizeLimits::uniform(3))
            .with_meets(false);
        let result = compare_model_sets(subjects, &config, &mut NoProgress).unwrap();

        assert!(result.entity("server").unwrap().is_incomplete());
        assert!(result.overall().is_incomplete());
        assert_eq!(result.warnings().len(), 2);
        assert!(result.warnings()[0].starts_with("lattice of entity `server` is incomplete"));
        assert!(result.warnings()[0].contains("variant 0, variant 1"));
    }

    #[test]
    fn test_preprocessing_with_tau_and_prefix_closure() {
        let mut hidden = Dfa::new(Alphabet::new());
        hidden.add_transition(0, 't', 1);
        hidden.add_transition(1, 'a', 2);
        hidden.set_accepting(2, true);
        let plain = words(&["a"]);

        let subjects = vec![
            ("hidden", [("server", hidden)].into_iter().collect::<ModelSet<char>>()),
            ("plain", [("server", plain)].into_iter().collect()),
        ];
        let config = ComparisonConfig::default().with_tau('t').with_prefix_close(true);
        let result = compare_model_sets(subjects, &config, &mut NoProgress).unwrap();

        let server = result.entity("server").unwrap();
        assert_eq!(server.num_nodes(), 1);
        let model = server.value(0).value();
        assert!(model.accepts(&[]));
        assert!(model.accepts(&['a']));
        assert!(!model.alphabet().contains(&'t'));
    }
}
