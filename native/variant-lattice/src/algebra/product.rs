//! Strict (synchronized) product combination and the boolean language
//! operations built on it.

use crate::algebra::complement::{complement, totalize};
use crate::algebra::minimize::minimize;
use crate::automaton::{Dfa, StateId, Symbol};
use crate::error::Result;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Synchronized product of two acceptors over the union of their alphabets.
///
/// A product state `(p, q)` accepts iff `acceptance(accept(p), accept(q))`. A
/// transition on a symbol exists only if both operands define one, so a
/// missing transition in either operand is missing in the product. Combiners
/// that accept when an operand rejects (union, symmetric difference) need
/// totalized operands to mean the set operation; [`union`] and
/// [`symmetric_difference`] take care of that.
///
/// The result is minimized: it has no unreachable states and no sink.
pub fn combine<S, F>(a: &Dfa<S>, b: &Dfa<S>, acceptance: F) -> Result<Dfa<S>>
where
    S: Symbol,
    F: Fn(bool, bool) -> bool,
{
    let alphabet = a.alphabet().union(b.alphabet());
    let mut product = Dfa::new(alphabet.clone());
    let mut pairs: IndexMap<(StateId, StateId), StateId> = IndexMap::new();
    let mut queue = VecDeque::new();

    let start = (a.initial(), b.initial());
    pairs.insert(start, product.initial());
    queue.push_back(start);

    while let Some((p, q)) = queue.pop_front() {
        let current = pairs[&(p, q)];
        if acceptance(a.is_accepting(p), b.is_accepting(q)) {
            product.set_accepting(current, true);
        }

        for symbol in &alphabet {
            let (Some(p_next), Some(q_next)) = (a.transition(p, symbol), b.transition(q, symbol))
            else {
                continue;
            };
            let next = match pairs.get(&(p_next, q_next)) {
                Some(&existing) => existing,
                None => {
                    let state = product.add_state();
                    pairs.insert((p_next, q_next), state);
                    queue.push_back((p_next, q_next));
                    state
                }
            };
            product.add_transition(current, symbol.clone(), next);
        }
    }

    minimize(&product)
}

/// Extend the alphabet of `dfa` by `other`'s and complete it over the result.
fn totalize_over<S: Symbol>(dfa: &Dfa<S>, other: &Dfa<S>) -> Dfa<S> {
    let mut extended = dfa.clone();
    extended.extend_alphabet(other.alphabet());
    totalize(&extended)
}

/// `L(a) ∩ L(b)`.
pub fn intersect<S: Symbol>(a: &Dfa<S>, b: &Dfa<S>) -> Result<Dfa<S>> {
    combine(a, b, |x, y| x && y)
}

/// `L(a) ∪ L(b)`.
pub fn union<S: Symbol>(a: &Dfa<S>, b: &Dfa<S>) -> Result<Dfa<S>> {
    combine(&totalize_over(a, b), &totalize_over(b, a), |x, y| x || y)
}

/// `L(a) △ L(b)`, the words accepted by exactly one operand.
pub fn symmetric_difference<S: Symbol>(a: &Dfa<S>, b: &Dfa<S>) -> Result<Dfa<S>> {
    combine(&totalize_over(a, b), &totalize_over(b, a), |x, y| x != y)
}

/// `L(a) \ L(b)`.
pub fn difference<S: Symbol>(a: &Dfa<S>, b: &Dfa<S>) -> Result<Dfa<S>> {
    let mut b = b.clone();
    b.extend_alphabet(a.alphabet());
    combine(a, &complement(&b), |x, y| x && y)
}
