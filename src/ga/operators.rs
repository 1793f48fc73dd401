//! Genetic operators on the client permutation.
//!
//! - **Crossover**: order crossover (OX). A contiguous block is copied from
//!   the first parent at the same positions; the remaining slots are filled
//!   with the second parent's genes in their original order, starting just
//!   after the block and wrapping around.
//! - **Mutation**: swap of two distinct positions with a given probability.
//!
//! Both operators flatten their input, work on the permutation, and hand
//! the result to [`build_routes`]. The random source is always passed in.

use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;

use super::{build_routes, flatten};
use crate::error::{Result, RoutingError};
use crate::models::{Instance, Solution};

/// OX on two permutations with explicit inclusive cut points `a <= b < n`.
///
/// `seq2` is scanned from its first gene; every gene not copied from
/// `seq1[a..=b]` is written to the next free slot, starting at
/// `(b + 1) % n` and wrapping.
///
/// # Errors
///
/// - [`RoutingError::ChromosomeMismatch`] if the permutations differ in
///   length
/// - [`RoutingError::InvalidCutPoints`] unless `a <= b < n`
/// - [`RoutingError::GeneSetMismatch`] if they are not permutations of the
///   same genes
///
/// # Examples
///
/// ```
/// use cvrp_ga::ga::order_crossover_with_cuts;
///
/// let p1 = ["1", "2", "3", "4", "5", "6"];
/// let p2 = ["6", "4", "2", "5", "3", "1"];
/// let child = order_crossover_with_cuts(&p1, &p2, 2, 3).unwrap();
/// // block [3, 4] kept; 6, 2, 5, 1 fill slots 4, 5, 0, 1
/// assert_eq!(child, vec!["5", "1", "3", "4", "6", "2"]);
/// ```
pub fn order_crossover_with_cuts<S>(seq1: &[S], seq2: &[S], a: usize, b: usize) -> Result<Vec<String>>
where
    S: AsRef<str>,
{
    let n = seq1.len();
    if seq2.len() != n {
        return Err(RoutingError::ChromosomeMismatch {
            left: n,
            right: seq2.len(),
        });
    }
    if a > b || b >= n {
        return Err(RoutingError::InvalidCutPoints { a, b, len: n });
    }

    let pool: HashSet<&str> = seq1.iter().map(AsRef::as_ref).collect();
    if pool.len() != n {
        return Err(RoutingError::GeneSetMismatch);
    }

    let mut child: Vec<Option<&str>> = vec![None; n];
    let mut used: HashSet<&str> = HashSet::with_capacity(n);
    for pos in a..=b {
        let gene = seq1[pos].as_ref();
        child[pos] = Some(gene);
        used.insert(gene);
    }

    let free = n - (b - a + 1);
    let mut placed = 0;
    let mut pos = (b + 1) % n;
    for gene in seq2.iter().map(AsRef::as_ref) {
        if !pool.contains(gene) {
            return Err(RoutingError::GeneSetMismatch);
        }
        if !used.insert(gene) {
            continue;
        }
        while child[pos].is_some() {
            pos = (pos + 1) % n;
        }
        child[pos] = Some(gene);
        placed += 1;
    }
    if placed != free {
        return Err(RoutingError::GeneSetMismatch);
    }

    Ok(child
        .into_iter()
        .map(|gene| gene.unwrap_or_default().to_string())
        .collect())
}

/// Order crossover of two solutions, rebuilt into routes.
///
/// The cut points are two distinct positions drawn uniformly. With fewer
/// than two clients the first parent is returned unchanged.
///
/// # Errors
///
/// [`RoutingError::ChromosomeMismatch`] if the parents serve different
/// numbers of clients, or any error from [`flatten`] / [`build_routes`].
pub fn order_crossover<R: Rng>(
    parent1: &Solution,
    parent2: &Solution,
    instance: &Instance,
    rng: &mut R,
) -> Result<Solution> {
    let seq1 = flatten(parent1, instance)?;
    let seq2 = flatten(parent2, instance)?;

    let n = seq1.len();
    if n < 2 {
        return Ok(parent1.clone());
    }

    let cuts = index::sample(rng, n, 2);
    let (a, b) = {
        let (x, y) = (cuts.index(0), cuts.index(1));
        (x.min(y), x.max(y))
    };

    let child = order_crossover_with_cuts(&seq1, &seq2, a, b)?;
    build_routes(&child, instance)
}

/// Swap mutation, rebuilt into routes.
///
/// With probability `rate`, two distinct positions of the permutation are
/// swapped. The result is always rebuilt, so a solution whose routes were
/// not produced by the builder comes back normalized.
pub fn swap_mutation<R: Rng>(
    solution: &Solution,
    instance: &Instance,
    rate: f64,
    rng: &mut R,
) -> Result<Solution> {
    let mut seq = flatten(solution, instance)?;
    let n = seq.len();

    if n >= 2 && rng.random::<f64>() < rate {
        let picks = index::sample(rng, n, 2);
        seq.swap(picks.index(0), picks.index(1));
    }

    build_routes(&seq, instance)
}
