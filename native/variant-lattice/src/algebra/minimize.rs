//! Hopcroft partition-refinement minimization.

use crate::automaton::{Dfa, StateId, StateSet, Symbol};
use crate::error::{AutomatonError, Result};
use indexmap::IndexMap;
use std::collections::VecDeque;
use tracing::debug;

/// A complete transition table over symbol indices, with an explicit sink
/// standing in for every missing transition of the partial source automaton.
struct TotalTable {
    /// `delta[state][symbol]`
    delta: Vec<Vec<StateId>>,
    /// `reverse[symbol][target]` lists the sources of `target` on `symbol`.
    reverse: Vec<Vec<Vec<StateId>>>,
    accepting: StateSet,
}

impl TotalTable {
    fn new<S: Symbol>(dfa: &Dfa<S>) -> Self {
        let num_symbols = dfa.alphabet().len();
        let n = dfa.num_states();
        let sink = n as StateId;
        let mut needs_sink = false;

        let mut delta: Vec<Vec<StateId>> = (0..n as StateId)
            .map(|state| {
                dfa.alphabet()
                    .iter()
                    .map(|symbol| {
                        dfa.transition(state, symbol).unwrap_or_else(|| {
                            needs_sink = true;
                            sink
                        })
                    })
                    .collect()
            })
            .collect();
        if needs_sink {
            delta.push(vec![sink; num_symbols]);
        }

        let mut reverse = vec![vec![Vec::new(); delta.len()]; num_symbols];
        for (src, row) in delta.iter().enumerate() {
            for (sym, &dst) in row.iter().enumerate() {
                reverse[sym][dst as usize].push(src as StateId);
            }
        }

        Self {
            delta,
            reverse,
            accepting: dfa.accepting_states().clone(),
        }
    }

    fn num_states(&self) -> usize {
        self.delta.len()
    }

    fn num_symbols(&self) -> usize {
        self.reverse.len()
    }
}

/// Minimize a DFA using Hopcroft's algorithm.
///
/// Returns the minimal *partial* acceptor of the same language: unreachable
/// states are dropped, equivalent states merged, and the dead state left by
/// refinement over the totalized automaton is removed. States are numbered
/// breadth first from the initial state, so equal languages over the same
/// alphabet order yield identical results.
///
/// If no accepting state is reachable the canonical one-state empty-language
/// acceptor is returned directly.
pub fn minimize<S: Symbol>(dfa: &Dfa<S>) -> Result<Dfa<S>> {
    if dfa.is_empty() {
        return Ok(Dfa::new(dfa.alphabet().clone()));
    }

    let reachable = dfa.renumber_breadth_first();
    let table = TotalTable::new(&reachable);
    let (blocks, block_of) = refine(&table);
    let quotient = build_quotient(&reachable, &table, &blocks, &block_of);
    let minimized = remove_sink(quotient)?;

    debug!(
        states = dfa.num_states(),
        minimized = minimized.num_states(),
        "minimized"
    );
    Ok(minimized)
}

/// Split the states of `table` into blocks of language-equivalent states.
fn refine(table: &TotalTable) -> (Vec<StateSet>, Vec<usize>) {
    let n = table.num_states();
    let all: StateSet = (0..n as StateId).collect();
    let accepting = table.accepting.intersection(&all);
    let rejecting = all.difference(&table.accepting);

    let mut blocks: Vec<StateSet> = [accepting, rejecting]
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect();
    let mut block_of = vec![0usize; n];
    for (idx, block) in blocks.iter().enumerate() {
        for state in block.iter() {
            block_of[state as usize] = idx;
        }
    }

    // Worklist of (block, symbol) splitters.
    let mut worklist: VecDeque<(usize, usize)> = (0..blocks.len())
        .flat_map(|idx| (0..table.num_symbols()).map(move |sym| (idx, sym)))
        .collect();

    while let Some((splitter_idx, symbol)) = worklist.pop_front() {
        // Predecessors of the splitter on this symbol, grouped by their block.
        let mut touched: IndexMap<usize, StateSet> = IndexMap::new();
        for target in blocks[splitter_idx].iter() {
            for &source in &table.reverse[symbol][target as usize] {
                touched
                    .entry(block_of[source as usize])
                    .or_insert_with(|| StateSet::with_capacity(n))
                    .insert(source);
            }
        }

        for (block_idx, inside) in touched {
            if inside.len() == blocks[block_idx].len() {
                continue;
            }
            let outside = blocks[block_idx].difference(&inside);

            // Keep the larger part in place, the smaller becomes a new block.
            let (keep, split) = if inside.len() <= outside.len() {
                (outside, inside)
            } else {
                (inside, outside)
            };

            let new_idx = blocks.len();
            for state in split.iter() {
                block_of[state as usize] = new_idx;
            }
            blocks[block_idx] = keep;
            blocks.push(split);

            for sym in 0..table.num_symbols() {
                worklist.push_back((new_idx, sym));
            }
        }
    }

    (blocks, block_of)
}

/// Build the quotient automaton of `table` under the block partition. The
/// result is complete over the alphabet of `dfa`.
fn build_quotient<S: Symbol>(
    dfa: &Dfa<S>,
    table: &TotalTable,
    blocks: &[StateSet],
    block_of: &[usize],
) -> Dfa<S> {
    let mut quotient = Dfa::new(dfa.alphabet().clone());
    for _ in 1..blocks.len() {
        quotient.add_state();
    }
    quotient.set_initial(block_of[dfa.initial() as usize] as StateId);

    for (idx, block) in blocks.iter().enumerate() {
        let Some(representative) = block.iter().next() else {
            continue;
        };
        if table.accepting.contains(representative) {
            quotient.set_accepting(idx as StateId, true);
        }
        for (sym, symbol) in dfa.alphabet().iter().enumerate() {
            let dst = table.delta[representative as usize][sym];
            quotient.add_transition(
                idx as StateId,
                symbol.clone(),
                block_of[dst as usize] as StateId,
            );
        }
    }

    quotient
}

/// Whether `state` is a sink: not initial, not accepting, and every
/// transition leaving it is a self-loop.
fn is_sink<S: Symbol>(dfa: &Dfa<S>, state: StateId) -> bool {
    state != dfa.initial()
        && !dfa.is_accepting(state)
        && dfa.outgoing(state).all(|(_, dst)| dst == state)
}

/// Remove the residual sink from a quotient automaton, if any.
fn remove_sink<S: Symbol>(quotient: Dfa<S>) -> Result<Dfa<S>> {
    let sinks: Vec<StateId> = (0..quotient.num_states() as StateId)
        .filter(|&state| is_sink(&quotient, state))
        .collect();

    let trimmed = match sinks.as_slice() {
        [] => quotient,
        [sink] => {
            let mut keep: StateSet = (0..quotient.num_states() as StateId).collect();
            keep.remove(*sink);
            quotient.retain_states(&keep)
        }
        _ => return Err(AutomatonError::MultipleSinks { count: sinks.len() }),
    };

    if trimmed.is_empty() {
        return Ok(Dfa::new(trimmed.alphabet().clone()));
    }
    Ok(trimmed.renumber_breadth_first())
}
