//! Behavioral model comparison over finite-state acceptors.
//!
//! The crate has two layers:
//! - an automaton algebra ([`automaton`], [`algebra`], [`relation`]) with
//!   determinization, minimization, products, tau elimination, prefix closure,
//!   state merging and the language relations built on them
//! - a lattice engine ([`lattice`], [`compare`]) grouping models into variants,
//!   ordering them by inclusion and completing the order with meets and joins
//!   under configurable size limits

pub mod algebra;
pub mod automaton;
pub mod codec;
pub mod compare;
pub mod config;
pub mod error;
pub mod lattice;
pub mod model;
pub mod relation;

pub use automaton::{Alphabet, Automaton, Dfa, Nfa, StateId, StateSet, Symbol};
pub use compare::{ComparisonResult, NoProgress, Progress, compare_model_sets};
pub use config::{ComparisonConfig, SizeLimits};
pub use error::{AutomatonError, Result};
pub use model::ModelSet;
