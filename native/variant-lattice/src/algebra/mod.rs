//! Automaton algebra.
//!
//! Every language comparison is built from these operations:
//! - Subset construction (NFA to DFA)
//! - Hopcroft minimization to the minimal partial acceptor
//! - Complement over a totalized transition function
//! - Strict product combination (intersection, union, differences)
//! - Independent parallel composition
//! - Tau elimination and weak-trace normalization
//! - Prefix closure, state merging, alphabet renaming and synchronization

mod complement;
mod determinize;
mod merge;
mod minimize;
mod parallel;
mod prefix;
mod product;
mod rename;
mod tau;

pub use complement::{complement, totalize};
pub use determinize::determinize;
pub use merge::{merge_dfa_states, merge_nfa_states, merge_states};
pub use minimize::minimize;
pub use parallel::{PartialComposition, parallel};
pub use prefix::prefix_close;
pub use product::{combine, difference, intersect, symmetric_difference, union};
pub use rename::{rename, rename_dfa, rename_nfa, synchronize_alphabets, synchronize_dfa_alphabets};
pub use tau::{tau_eliminate, weak_trace_normalize};
