//! Reproduction: paired single-point crossover followed by point mutation.
//!
//! # Crossover
//!
//! Output slot `j` is bred from two neighbours in the ranked pool:
//!
//! - even `j`: draw a fresh point `c` in `[1, N-2]`; prefix parent
//!   `k = j / 2`, suffix parent `k + 1`
//! - odd `j`: reuse `c` from slot `j - 1`; prefix parent `k = (j + 1) / 2`,
//!   suffix parent `k - 1`
//!
//! so slots `2m` and `2m + 1` are the two complementary children of ranked
//! parents `m` and `m + 1`. The child takes genes `[0, c)` from the prefix
//! parent and `[c, N)` from the suffix parent.
//!
//! The pool holds `P - 1` entries. For `P >= 4` the scheme never leaves it;
//! for `P = 2` and `P = 3` the last slots would index one past the end, and
//! parent positions are clamped to the last pool entry.
//!
//! # Mutation
//!
//! Every child then gets exactly one locus overwritten with a uniformly
//! drawn color, which may equal the color already there.

use super::types::{Genome, Population};
use rand::Rng;

/// Draws a crossover point in `[1, N-2]`.
///
/// Both parents contribute at least one gene. For `N = 2` the only split
/// that satisfies this is `1`.
pub fn crossover_point<R: Rng>(genome_len: usize, rng: &mut R) -> usize {
    let hi = genome_len.saturating_sub(2).max(1);
    rng.random_range(1..=hi)
}

/// Pool positions `(prefix, suffix)` of the parents for output slot `slot`.
///
/// Positions are clamped to `pool_len - 1`.
///
/// ```
/// use u_graphcolor::ga::operators::parent_positions;
///
/// assert_eq!(parent_positions(0, 99), (0, 1));
/// assert_eq!(parent_positions(1, 99), (1, 0));
/// assert_eq!(parent_positions(98, 99), (49, 50));
/// assert_eq!(parent_positions(99, 99), (50, 49));
/// ```
pub fn parent_positions(slot: usize, pool_len: usize) -> (usize, usize) {
    let (k, n) = if slot % 2 == 0 {
        let k = slot / 2;
        (k, k + 1)
    } else {
        let k = (slot + 1) / 2;
        (k, k - 1)
    };
    let last = pool_len.saturating_sub(1);
    (k.min(last), n.min(last))
}

/// Child with genes `[0, point)` from `prefix` and `[point, N)` from `suffix`.
pub fn single_point_crossover(prefix: &Genome, suffix: &Genome, point: usize) -> Genome {
    debug_assert_eq!(prefix.len(), suffix.len(), "parents must have equal length");
    let mut genes = Vec::with_capacity(prefix.len());
    genes.extend_from_slice(&prefix.genes()[..point]);
    genes.extend_from_slice(&suffix.genes()[point..]);
    Genome::from_genes(genes)
}

/// Overwrites one uniformly chosen locus with a uniformly drawn color.
///
/// Returns the mutated locus.
pub fn point_mutation<R: Rng>(genome: &mut Genome, color_count: usize, rng: &mut R) -> usize {
    let locus = rng.random_range(0..genome.len());
    genome.genes_mut()[locus] = rng.random_range(0..color_count);
    locus
}

/// Breeds `population.len()` children from the ranked pool, without mutation.
///
/// `ranked` holds population indices, best first (see
/// [`rank_candidates`](super::selection::rank_candidates)).
///
/// # Panics
/// Panics if `ranked` is empty while the population is not.
pub fn crossover_generation<R: Rng>(
    population: &Population,
    ranked: &[usize],
    rng: &mut R,
) -> Vec<Genome> {
    let size = population.len();
    if size == 0 {
        return Vec::new();
    }
    assert!(!ranked.is_empty(), "cannot breed from an empty pool");

    let genome_len = population[0].genome.len();
    let mut children = Vec::with_capacity(size);
    let mut point = 1;

    for slot in 0..size {
        if slot % 2 == 0 {
            point = crossover_point(genome_len, rng);
        }
        let (k, n) = parent_positions(slot, ranked.len());
        let prefix = &population[ranked[k]].genome;
        let suffix = &population[ranked[n]].genome;
        children.push(single_point_crossover(prefix, suffix, point));
    }

    children
}

/// Produces the next generation: crossover over the ranked pool, then one
/// point mutation per child.
pub fn reproduce<R: Rng>(
    population: &Population,
    ranked: &[usize],
    color_count: usize,
    rng: &mut R,
) -> Population {
    let mut children = crossover_generation(population, ranked, rng);
    for child in &mut children {
        point_mutation(child, color_count, rng);
    }
    Population::from_genomes(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    /// Population where individual `i` is the constant genome `i`.
    fn constant_population(size: usize, genome_len: usize) -> Population {
        Population::from_genomes((0..size).map(|i| Genome::from_genes(vec![i; genome_len])))
    }

    /// First index where the child switches from one parent to the other.
    fn split_of(child: &Genome) -> usize {
        let g = child.genes();
        (1..g.len()).find(|&i| g[i] != g[0]).unwrap_or(g.len())
    }

    #[test]
    fn test_crossover_point_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let c = crossover_point(10, &mut rng);
            assert!((1..=8).contains(&c), "point {c} out of [1, 8]");
        }
    }

    #[test]
    fn test_crossover_point_reaches_both_ends() {
        let mut rng = create_rng(5);
        let points: Vec<usize> = (0..500).map(|_| crossover_point(6, &mut rng)).collect();
        assert!(points.contains(&1));
        assert!(points.contains(&4));
    }

    #[test]
    fn test_crossover_point_short_genomes() {
        let mut rng = create_rng(1);
        for _ in 0..50 {
            assert_eq!(crossover_point(2, &mut rng), 1);
            assert_eq!(crossover_point(3, &mut rng), 1);
        }
    }

    #[test]
    fn test_parent_positions_parity() {
        // Even slots: (j/2, j/2 + 1); odd slots: ((j+1)/2, (j+1)/2 - 1).
        assert_eq!(parent_positions(2, 9), (1, 2));
        assert_eq!(parent_positions(3, 9), (2, 1));
        assert_eq!(parent_positions(4, 9), (2, 3));
        assert_eq!(parent_positions(5, 9), (3, 2));
    }

    #[test]
    fn test_parent_positions_clamped_for_tiny_pools() {
        // P = 2: pool of one.
        assert_eq!(parent_positions(0, 1), (0, 0));
        assert_eq!(parent_positions(1, 1), (0, 0));
        // P = 3: pool of two, slot 2 would reach index 2.
        assert_eq!(parent_positions(2, 2), (1, 1));
        // P = 5: pool of four, no clamping needed.
        assert_eq!(parent_positions(4, 4), (2, 3));
    }

    #[test]
    fn test_single_point_crossover() {
        let a = Genome::from_genes(vec![0, 0, 0, 0, 0]);
        let b = Genome::from_genes(vec![1, 2, 3, 1, 2]);
        let child = single_point_crossover(&a, &b, 2);
        assert_eq!(child.genes(), &[0, 0, 3, 1, 2]);
    }

    #[test]
    fn test_crossover_generation_even_and_odd_slots() {
        let size = 10;
        let len = 8;
        let pop = constant_population(size, len);
        // Ranked pool in reverse population order.
        let ranked: Vec<usize> = (1..size).rev().collect();
        let mut rng = create_rng(42);

        let children = crossover_generation(&pop, &ranked, &mut rng);
        assert_eq!(children.len(), size);

        for pair in 0..size / 2 {
            let even = &children[2 * pair];
            let odd = &children[2 * pair + 1];
            let c = split_of(even);
            assert!((1..=len - 2).contains(&c));
            assert_eq!(split_of(odd), c, "pair {pair} must share its point");

            let (k, n) = parent_positions(2 * pair, ranked.len());
            assert!(even.genes()[..c].iter().all(|&g| g == ranked[k]));
            assert!(even.genes()[c..].iter().all(|&g| g == ranked[n]));

            let (k, n) = parent_positions(2 * pair + 1, ranked.len());
            assert!(odd.genes()[..c].iter().all(|&g| g == ranked[k]));
            assert!(odd.genes()[c..].iter().all(|&g| g == ranked[n]));
        }
    }

    #[test]
    fn test_crossover_generation_odd_population() {
        let pop = constant_population(3, 4);
        let ranked = vec![2, 0];
        let children = crossover_generation(&pop, &ranked, &mut create_rng(0));
        assert_eq!(children.len(), 3);
        // Slot 2 is clamped onto the last pool entry for both parents.
        assert!(children[2].genes().iter().all(|&g| g == 0));
    }

    #[test]
    fn test_crossover_generation_same_seed_same_children() {
        let pop = constant_population(6, 5);
        let ranked = vec![0, 1, 2, 3, 4];
        let a = crossover_generation(&pop, &ranked, &mut create_rng(11));
        let b = crossover_generation(&pop, &ranked, &mut create_rng(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_point_mutation_changes_at_most_one_locus() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let before = Genome::from_genes(vec![0; 12]);
            let mut after = before.clone();
            let locus = point_mutation(&mut after, 4, &mut rng);

            assert_eq!(after.len(), 12);
            assert!(after.genes()[locus] < 4);
            for i in 0..12 {
                if i != locus {
                    assert_eq!(after.genes()[i], before.genes()[i]);
                }
            }
        }
    }

    #[test]
    fn test_reproduce_shape() {
        let pop = constant_population(7, 6);
        let ranked: Vec<usize> = (0..6).collect();
        let next = reproduce(&pop, &ranked, 7, &mut create_rng(3));

        assert_eq!(next.len(), 7);
        for ind in &next {
            assert_eq!(ind.genome.len(), 6);
            assert!(ind.genome.genes().iter().all(|&g| g < 7));
            assert!(!ind.is_optimal(), "children start unevaluated");
        }
    }

    proptest! {
        #[test]
        fn prop_reproduce_preserves_shape(
            size in 2usize..24,
            len in 2usize..16,
            colors in 1usize..6,
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let pop = Population::from_genomes(
                (0..size).map(|_| Genome::random(len, colors, &mut rng)),
            );
            let ranked: Vec<usize> = (0..size - 1).collect();
            let next = reproduce(&pop, &ranked, colors, &mut rng);

            prop_assert_eq!(next.len(), size);
            for ind in &next {
                prop_assert_eq!(ind.genome.len(), len);
                prop_assert!(ind.genome.genes().iter().all(|&g| g < colors));
            }
        }
    }
}
