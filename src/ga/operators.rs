//! Genetic operators on item orderings.
//!
//! An ordering (a permutation of item indices) is the genotype; the
//! capacity matcher decodes it into a candidate.
//!
//! # Crossover
//!
//! The child ordering is built from the parents' fulfilled sets rather
//! than from their orderings:
//!
//! 1. items fulfilled by **both** parents, in input order;
//! 2. items fulfilled by exactly **one** parent, uniformly shuffled;
//! 3. items fulfilled by **neither**, cheapest first.
//!
//! followed by a geometric number of swap mutations.

use rand::Rng;
use rand::seq::SliceRandom;

use super::Candidate;
use crate::models::Item;

/// Swap mutation: exchanges two random positions.
///
/// Positions are drawn independently and may coincide (no-op).
pub fn swap_mutation<T, R: Rng>(order: &mut [T], rng: &mut R) {
    let len = order.len();
    if len < 2 {
        return;
    }
    let i = rng.random_range(0..len);
    let j = rng.random_range(0..len);
    order.swap(i, j);
}

/// Geometric mutation: keeps swapping while a coin with probability
/// `chance` lands heads.
///
/// Expected number of swaps is `chance / (1 - chance)`. `chance` must be
/// below 1. Returns the number of swaps performed.
pub fn geometric_mutation<T, R: Rng>(order: &mut [T], chance: f64, rng: &mut R) -> usize {
    let mut swaps = 0;
    while rng.random_bool(chance) {
        swap_mutation(order, rng);
        swaps += 1;
    }
    swaps
}

/// Builds a child ordering from two parent candidates.
///
/// `search` lists the indices of the items taking part in the search, in
/// input order; the child is a permutation of it.
pub fn crossover_order<W, R: Rng>(
    p1: &Candidate,
    p2: &Candidate,
    items: &[Item<W>],
    search: &[usize],
    mutation_chance: f64,
    rng: &mut R,
) -> Vec<usize> {
    let mut both = Vec::new();
    let mut one = Vec::new();
    let mut none = Vec::new();

    for &idx in search {
        match (p1.contains(idx), p2.contains(idx)) {
            (true, true) => both.push(idx),
            (true, false) | (false, true) => one.push(idx),
            (false, false) => none.push(idx),
        }
    }

    one.shuffle(rng);
    none.sort_by(|&a, &b| items[a].value.total_cmp(&items[b].value));

    let mut order = both;
    order.extend(one);
    order.extend(none);

    geometric_mutation(&mut order, mutation_chance, rng);
    order
}
