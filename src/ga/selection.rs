//! Truncation ranking of breeding candidates.
//!
//! The selector orders the evaluated population by fitness, best first, and
//! keeps the top `P - 1` entries. Exactly one individual (the last in rank
//! order) never enters the breeding pool. The pairing scheme in
//! [`operators`](super::operators) is laid out around this pool size.

use super::types::Population;
use std::cmp::Ordering;

/// Returns population indices of the `P - 1` best individuals, best first.
///
/// Ties keep their population order: among equal fitness values the
/// individual with the lower index ranks higher.
///
/// ```
/// use u_graphcolor::ga::{selection::rank_candidates, fitness, Genome, Population};
/// use u_graphcolor::Border;
///
/// let borders = [Border::new(0, 1)];
/// let mut pop = Population::from_genomes([
///     Genome::from_genes(vec![0, 0]), // 0.0
///     Genome::from_genes(vec![0, 1]), // 1.0
///     Genome::from_genes(vec![1, 0]), // 1.0
/// ]);
/// fitness::evaluate_population(&mut pop, &borders);
/// assert_eq!(rank_candidates(&pop), vec![1, 2]);
/// ```
pub fn rank_candidates(population: &Population) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    // `sort_by` is stable, which gives the tie order.
    ranked.sort_by(|&a, &b| {
        population[b]
            .fitness
            .partial_cmp(&population[a].fitness)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(population.len().saturating_sub(1));
    ranked
}
