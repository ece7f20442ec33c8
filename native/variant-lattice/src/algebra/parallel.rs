//! Independent (parallel) composition of two acceptors.
//!
//! The operands evolve independently and synchronize only on the symbols both
//! alphabets contain. Unlike the strict product in [`crate::algebra::combine`],
//! one operand may move while the other stays put.

use crate::algebra::minimize::minimize;
use crate::automaton::{Dfa, StateId, Symbol};
use crate::error::Result;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// How a composition treats a symbol that belongs to an operand's alphabet but
/// has no transition from the operand's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialComposition {
    /// The product transition is undefined.
    #[default]
    Disallowed,
    /// The stuck operand stays put and the other one advances alone.
    Allowed,
}

/// What one operand does on a symbol.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// The symbol is not in the operand's alphabet; it stays where it is.
    Idle(StateId),
    /// The operand takes a transition.
    Moved(StateId),
    /// The symbol is in the alphabet but undefined from this state.
    Stuck(StateId),
}

fn step<S: Symbol>(dfa: &Dfa<S>, state: StateId, symbol: &S) -> Step {
    if !dfa.alphabet().contains(symbol) {
        return Step::Idle(state);
    }
    match dfa.transition(state, symbol) {
        Some(next) => Step::Moved(next),
        None => Step::Stuck(state),
    }
}

/// The joint successor of a product state, if the product can move.
fn joint_step(left: Step, right: Step, partial: PartialComposition) -> Option<(StateId, StateId)> {
    use Step::*;
    match (left, right, partial) {
        (Idle(_), Idle(_), _) => None,
        (Moved(p) | Idle(p), Moved(q) | Idle(q), _) => Some((p, q)),
        (Stuck(p), Moved(q), PartialComposition::Allowed) => Some((p, q)),
        (Moved(p), Stuck(q), PartialComposition::Allowed) => Some((p, q)),
        _ => None,
    }
}

/// Parallel composition of `a` and `b` over the union of their alphabets.
///
/// On a symbol outside an operand's alphabet that operand does not move. On a
/// symbol inside it the operand must take a transition; if it has none the
/// product is stuck, unless `partial` is [`PartialComposition::Allowed`], in
/// which case only the other operand advances. A product state accepts iff
/// both components accept. The result is minimized.
pub fn parallel<S: Symbol>(
    a: &Dfa<S>,
    b: &Dfa<S>,
    partial: PartialComposition,
) -> Result<Dfa<S>> {
    let alphabet = a.alphabet().union(b.alphabet());
    let mut product = Dfa::new(alphabet.clone());
    let mut pairs: IndexMap<(StateId, StateId), StateId> = IndexMap::new();
    let mut queue = VecDeque::new();

    let start = (a.initial(), b.initial());
    pairs.insert(start, product.initial());
    queue.push_back(start);

    while let Some((p, q)) = queue.pop_front() {
        let current = pairs[&(p, q)];
        if a.is_accepting(p) && b.is_accepting(q) {
            product.set_accepting(current, true);
        }

        for symbol in &alphabet {
            let Some(target) = joint_step(step(a, p, symbol), step(b, q, symbol), partial) else {
                continue;
            };
            let next = match pairs.get(&target) {
                Some(&existing) => existing,
                None => {
                    let state = product.add_state();
                    pairs.insert(target, state);
                    queue.push_back(target);
                    state
                }
            };
            product.add_transition(current, symbol.clone(), next);
        }
    }

    minimize(&product)
}
