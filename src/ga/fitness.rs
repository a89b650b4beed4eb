//! Fitness evaluation.
//!
//! Fitness is the fraction of borders whose endpoints carry different
//! colors: `(B - violations) / B`. It is a pure function of the genome and
//! the border set, so individuals are scored independently.

use super::types::{Genome, Individual, Population};
use crate::problem::Border;

/// Counts borders whose endpoints share a color.
///
/// # Panics
/// Panics if a border endpoint is not a valid index into `genome`; a
/// genome built for the same [`ColoringProblem`](crate::ColoringProblem)
/// always covers every border.
pub fn count_conflicts(genome: &Genome, borders: &[Border]) -> usize {
    let genes = genome.genes();
    borders.iter().filter(|b| genes[b.a] == genes[b.b]).count()
}

/// Normalizes a violation count against `border_count`.
///
/// An empty border set is vacuously satisfied and scores 1.0.
///
/// # Panics
/// Panics if `conflicts > border_count`.
pub fn fitness_from_conflicts(conflicts: usize, border_count: usize) -> f64 {
    assert!(
        conflicts <= border_count,
        "conflict count {conflicts} exceeds border count {border_count}"
    );
    if border_count == 0 {
        return 1.0;
    }
    (border_count - conflicts) as f64 / border_count as f64
}

/// Scores a single genome, in `[0, 1]`.
///
/// Returns exactly `1.0` if and only if no border is violated.
///
/// ```
/// use u_graphcolor::ga::{fitness, Genome};
/// use u_graphcolor::Border;
///
/// let borders = [Border::new(0, 1), Border::new(1, 2)];
/// assert_eq!(fitness::evaluate(&Genome::from_genes(vec![0, 1, 0]), &borders), 1.0);
/// assert_eq!(fitness::evaluate(&Genome::from_genes(vec![0, 0, 1]), &borders), 0.5);
/// ```
pub fn evaluate(genome: &Genome, borders: &[Border]) -> f64 {
    fitness_from_conflicts(count_conflicts(genome, borders), borders.len())
}

/// Evaluates and caches fitness on one individual.
pub fn evaluate_individual(individual: &mut Individual, borders: &[Border]) {
    let conflicts = count_conflicts(&individual.genome, borders);
    individual.conflicts = conflicts;
    individual.fitness = fitness_from_conflicts(conflicts, borders.len());
}

/// Evaluates every individual in the population.
pub fn evaluate_population(population: &mut Population, borders: &[Border]) {
    for ind in population.as_mut_slice() {
        evaluate_individual(ind, borders);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use proptest::prelude::*;

    fn triangle() -> Vec<Border> {
        vec![Border::new(0, 1), Border::new(1, 2), Border::new(2, 0)]
    }

    #[test]
    fn test_all_same_color_scores_zero() {
        let g = Genome::from_genes(vec![1, 1, 1]);
        assert_eq!(count_conflicts(&g, &triangle()), 3);
        assert_eq!(evaluate(&g, &triangle()), 0.0);
    }

    #[test]
    fn test_proper_coloring_scores_one() {
        let g = Genome::from_genes(vec![0, 1, 2]);
        assert_eq!(evaluate(&g, &triangle()), 1.0);
    }

    #[test]
    fn test_partial_coloring() {
        // Two of three triangle edges satisfied.
        let g = Genome::from_genes(vec![0, 1, 0]);
        let f = evaluate(&g, &triangle());
        assert!((f - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_border_set_scores_one() {
        let g = Genome::from_genes(vec![0, 0]);
        assert_eq!(evaluate(&g, &[]), 1.0);
    }

    #[test]
    fn test_duplicate_borders_count_twice() {
        let borders = [Border::new(0, 1), Border::new(1, 0), Border::new(1, 2)];
        let g = Genome::from_genes(vec![0, 0, 1]);
        assert_eq!(count_conflicts(&g, &borders), 2);
        assert!((evaluate(&g, &borders) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_southeast_coloring() {
        let problem = presets::southeast_us();
        // NC SC VA TN KY WV GA AL MS FL
        let g = Genome::from_genes(vec![0, 1, 1, 2, 0, 2, 3, 0, 1, 1]);
        assert_eq!(count_conflicts(&g, problem.borders()), 0);
        assert_eq!(evaluate(&g, problem.borders()), 1.0);
    }

    #[test]
    #[should_panic(expected = "exceeds border count")]
    fn test_more_conflicts_than_borders_panics() {
        fitness_from_conflicts(4, 3);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_genome_shorter_than_borders_panics() {
        count_conflicts(&Genome::from_genes(vec![0, 1]), &triangle());
    }

    #[test]
    fn test_evaluate_population_caches_scores() {
        let mut pop = Population::from_genomes([
            Genome::from_genes(vec![0, 1, 2]),
            Genome::from_genes(vec![0, 0, 0]),
        ]);
        evaluate_population(&mut pop, &triangle());

        assert_eq!(pop[0].conflicts, 0);
        assert_eq!(pop[0].fitness, 1.0);
        assert!(pop[0].is_optimal());
        assert_eq!(pop[1].conflicts, 3);
        assert_eq!(pop[1].fitness, 0.0);
    }

    proptest! {
        #[test]
        fn prop_fitness_in_unit_range(
            genes in proptest::collection::vec(0usize..4, 6),
            edges in proptest::collection::vec((0usize..6, 0usize..6), 0..20),
        ) {
            let borders: Vec<Border> = edges
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(Border::from)
                .collect();
            let g = Genome::from_genes(genes);
            let f = evaluate(&g, &borders);
            prop_assert!((0.0..=1.0).contains(&f));
            prop_assert_eq!(f == 1.0, count_conflicts(&g, &borders) == 0);
        }
    }
}
