//! Configuration of a comparison run.

use serde::{Deserialize, Serialize};

/// Budgets bounding when a meet or join is attempted.
///
/// A combination is skipped, and its operands flagged incomplete, when the
/// product of the operands' state counts or the state count of the combined
/// acceptor exceeds the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    pub meet_states: usize,
    pub join_states: usize,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            meet_states: 10_000,
            join_states: 10_000,
        }
    }
}

impl SizeLimits {
    /// The same limit for meets and joins.
    pub fn uniform(states: usize) -> Self {
        Self {
            meet_states: states,
            join_states: states,
        }
    }
}

/// Settings of [`crate::compare::compare_model_sets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig<S = String> {
    pub limits: SizeLimits,
    /// Add intersection (meet) nodes to every lattice.
    pub complete_meets: bool,
    /// Add union (join) nodes to every lattice.
    pub complete_joins: bool,
    /// When set, models are compared up to weak traces, with this symbol as
    /// the unobservable move.
    pub tau: Option<S>,
    /// Compare the prefix closures of the models instead of the models.
    pub prefix_close: bool,
}

impl<S> Default for ComparisonConfig<S> {
    fn default() -> Self {
        Self {
            limits: SizeLimits::default(),
            complete_meets: true,
            complete_joins: true,
            tau: None,
            prefix_close: false,
        }
    }
}

impl<S> ComparisonConfig<S> {
    pub fn with_limits(mut self, limits: SizeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_meets(mut self, complete: bool) -> Self {
        self.complete_meets = complete;
        self
    }

    pub fn with_joins(mut self, complete: bool) -> Self {
        self.complete_joins = complete;
        self
    }

    pub fn with_tau(mut self, tau: S) -> Self {
        self.tau = Some(tau);
        self
    }

    pub fn with_prefix_close(mut self, prefix_close: bool) -> Self {
        self.prefix_close = prefix_close;
        self
    }
}
