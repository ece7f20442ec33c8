//! Language equivalence and inclusion between deterministic acceptors.

use crate::algebra::{complement, intersect, minimize, synchronize_dfa_alphabets};
use crate::automaton::{Dfa, StateId, Symbol};
use crate::error::Result;
use std::collections::VecDeque;

/// Disjoint sets with union by size.
#[derive(Debug, Clone)]
struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut node = x;
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Join the sets of `x` and `y`, returning `false` if they were already one.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        let (root, parent) = if self.size[root_x] >= self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[root] = parent;
        self.size[parent] += self.size[root];
        true
    }
}

/// Find a word accepted by exactly one of `a` and `b`.
///
/// Runs the Hopcroft-Karp table-filling search on the two acceptors side by
/// side, treating a missing transition as a move into a shared dead state.
/// Pairs already known equivalent are skipped via union-find, so the search
/// is near-linear in the combined number of states. Returns `None` when the
/// languages are equal.
pub fn separating_word<S: Symbol>(a: &Dfa<S>, b: &Dfa<S>) -> Option<Vec<S>> {
    let offset = a.num_states();
    let dead = offset + b.num_states();
    let alphabet = a.alphabet().union(b.alphabet());

    let accepts = |node: usize| {
        if node < offset {
            a.is_accepting(node as StateId)
        } else if node < dead {
            b.is_accepting((node - offset) as StateId)
        } else {
            false
        }
    };
    let step = |node: usize, symbol: &S| {
        if node < offset {
            a.transition(node as StateId, symbol).map_or(dead, |s| s as usize)
        } else if node < dead {
            b.transition((node - offset) as StateId, symbol)
                .map_or(dead, |s| s as usize + offset)
        } else {
            dead
        }
    };

    // Every visited pair with the pair and symbol it was reached from.
    let mut visited: Vec<(usize, usize, Option<(usize, S)>)> = Vec::new();
    let word_to = |visited: &[(usize, usize, Option<(usize, S)>)], mut idx: usize| {
        let mut word = Vec::new();
        while let Some((parent, symbol)) = &visited[idx].2 {
            word.push(symbol.clone());
            idx = *parent;
        }
        word.reverse();
        word
    };

    let start = (a.initial() as usize, b.initial() as usize + offset);
    if accepts(start.0) != accepts(start.1) {
        return Some(Vec::new());
    }

    let mut sets = UnionFind::new(dead + 1);
    sets.union(start.0, start.1);
    visited.push((start.0, start.1, None));
    let mut queue = VecDeque::from([0]);

    while let Some(idx) = queue.pop_front() {
        let (x, y, _) = visited[idx];
        for symbol in &alphabet {
            let (x_next, y_next) = (step(x, symbol), step(y, symbol));
            if !sets.union(x_next, y_next) {
                continue;
            }
            visited.push((x_next, y_next, Some((idx, symbol.clone()))));
            let next_idx = visited.len() - 1;
            if accepts(x_next) != accepts(y_next) {
                return Some(word_to(&visited, next_idx));
            }
            queue.push_back(next_idx);
        }
    }

    None
}

/// Whether `a` and `b` accept the same language.
pub fn equivalent<S: Symbol>(a: &Dfa<S>, b: &Dfa<S>) -> bool {
    if a.is_empty() && b.is_empty() {
        return true;
    }
    separating_word(a, b).is_none()
}

/// `L(a) \ L(b)` as an acceptor, over the union of both alphabets.
fn excess<S: Symbol>(a: &Dfa<S>, b: &Dfa<S>) -> Result<Dfa<S>> {
    let mut a = minimize(a)?;
    let mut b = minimize(b)?;
    synchronize_dfa_alphabets(&mut a, &mut b);
    intersect(&a, &complement(&b))
}

/// Whether every word accepted by `a` is accepted by `b`, decided as
/// `L(a) ∩ ¬L(b) = ∅`.
pub fn included<S: Symbol>(a: &Dfa<S>, b: &Dfa<S>) -> Result<bool> {
    Ok(excess(a, b)?.is_empty())
}

/// A shortest word accepted by `a` but not by `b`, if there is one.
pub fn inclusion_witness<S: Symbol>(a: &Dfa<S>, b: &Dfa<S>) -> Result<Option<Vec<S>>> {
    Ok(shortest_word(&excess(a, b)?))
}

/// A shortest word accepted by `dfa`, found breadth first.
pub fn shortest_word<S: Symbol>(dfa: &Dfa<S>) -> Option<Vec<S>> {
    let mut parent: Vec<Option<(StateId, S)>> = vec![None; dfa.num_states()];
    let mut seen = vec![false; dfa.num_states()];
    let mut queue = VecDeque::from([dfa.initial()]);
    seen[dfa.initial() as usize] = true;

    while let Some(state) = queue.pop_front() {
        if dfa.is_accepting(state) {
            let mut word = Vec::new();
            let mut current = state;
            while let Some((prev, symbol)) = &parent[current as usize] {
                word.push(symbol.clone());
                current = *prev;
            }
            word.reverse();
            return Some(word);
        }
        for symbol in dfa.alphabet() {
            let Some(next) = dfa.transition(state, symbol) else {
                continue;
            };
            if !seen[next as usize] {
                seen[next as usize] = true;
                parent[next as usize] = Some((state, symbol.clone()));
                queue.push_back(next);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Alphabet;

    fn ab_star() -> Dfa<char> {
        let mut dfa = Dfa::new(Alphabet::new());
        dfa.set_accepting(0, true);
        dfa.add_transition(0, 'a', 1);
        dfa.add_transition(1, 'b', 0);
        dfa
    }

    /// `(ab)*` written with redundant states.
    fn ab_star_unrolled() -> Dfa<char> {
        let mut dfa = Dfa::new(Alphabet::new());
        dfa.set_accepting(0, true);
        dfa.set_accepting(2, true);
        dfa.add_transition(0, 'a', 1);
        dfa.add_transition(1, 'b', 2);
        dfa.add_transition(2, 'a', 3);
        dfa.add_transition(3, 'b', 0);
        dfa
    }

    fn ab_star_or_a() -> Dfa<char> {
        let mut dfa = ab_star();
        dfa.set_accepting(1, true);
        dfa
    }

    #[test]
    fn test_equivalent() {
        assert!(equivalent(&ab_star(), &ab_star_unrolled()));
        assert!(!equivalent(&ab_star(), &ab_star_or_a()));
    }

    #[test]
    fn test_empty_languages_are_equivalent() {
        let a: Dfa<char> = Dfa::new(['a'].into_iter().collect());
        let mut b: Dfa<char> = Dfa::new(Alphabet::new());
        b.add_transition(0, 'b', 1);
        assert!(equivalent(&a, &b));
    }

    #[test]
    fn test_alphabet_difference_alone_does_not_separate() {
        let a = ab_star();
        let mut b = ab_star();
        b.add_symbol('z');
        assert!(equivalent(&a, &b));
    }

    #[test]
    fn test_separating_word() {
        assert_eq!(separating_word(&ab_star(), &ab_star_or_a()), Some(vec!['a']));
        assert_eq!(separating_word(&ab_star(), &ab_star_unrolled()), None);

        let epsilon = Dfa::epsilon(Alphabet::new());
        let empty = Dfa::new(Alphabet::new());
        assert_eq!(separating_word(&epsilon, &empty), Some(Vec::<char>::new()));
    }

    #[test]
    fn test_included() {
        assert!(included(&ab_star(), &ab_star_or_a()).unwrap());
        assert!(!included(&ab_star_or_a(), &ab_star()).unwrap());
        assert!(included(&ab_star(), &ab_star_unrolled()).unwrap());
    }

    #[test]
    fn test_included_with_foreign_symbols() {
        // `b*` is not included in `a*` even though the alphabets differ.
        let mut a_star = Dfa::new(Alphabet::new());
        a_star.set_accepting(0, true);
        a_star.add_transition(0, 'a', 0);
        let mut b_star = Dfa::new(Alphabet::new());
        b_star.set_accepting(0, true);
        b_star.add_transition(0, 'b', 0);

        assert!(!included(&b_star, &a_star).unwrap());
        assert_eq!(inclusion_witness(&b_star, &a_star).unwrap(), Some(vec!['b']));
        let empty = Dfa::new(Alphabet::new());
        assert!(included(&empty, &a_star).unwrap());
    }

    #[test]
    fn test_inclusion_witness() {
        assert_eq!(
            inclusion_witness(&ab_star_or_a(), &ab_star()).unwrap(),
            Some(vec!['a'])
        );
        assert_eq!(inclusion_witness(&ab_star(), &ab_star_or_a()).unwrap(), None);
    }

    #[test]
    fn test_mutual_inclusion_matches_equivalence() {
        let pairs = [
            (ab_star(), ab_star_unrolled()),
            (ab_star(), ab_star_or_a()),
            (ab_star_or_a(), ab_star_unrolled()),
        ];
        for (a, b) in &pairs {
            let both = included(a, b).unwrap() && included(b, a).unwrap();
            assert_eq!(both, equivalent(a, b));
        }
    }
}
