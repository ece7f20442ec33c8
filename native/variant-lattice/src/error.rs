//! Contract violations reported by the automaton algebra.

use crate::automaton::StateId;
use thiserror::Error;

/// A violated precondition of an automaton operation.
///
/// These indicate malformed input or a bug in a caller, never a condition a
/// comparison run should try to recover from. Running out of the configured
/// size budget is not an error; see [`crate::lattice::VariantAlgebra`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("minimization left {count} sink states, at most one is possible")]
    MultipleSinks { count: usize },

    #[error("cannot merge state {drop} into {keep}: transitions on {symbol} disagree")]
    InconsistentMerge {
        keep: StateId,
        drop: StateId,
        symbol: String,
    },

    #[error("cannot merge state {state} into itself")]
    MergeSameState { state: StateId },

    #[error("renaming maps several symbols onto {symbol} in a deterministic automaton")]
    NonInjectiveRename { symbol: String },

    #[error("state {state} out of range for an automaton with {num_states} states")]
    StateOutOfRange { state: StateId, num_states: usize },
}

pub type Result<T, E = AutomatonError> = std::result::Result<T, E>;
