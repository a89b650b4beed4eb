//! Genome, individual and population model.
//!
//! A [`Genome`] assigns one color index per node. An [`Individual`] pairs a
//! genome with its cached evaluation, and a [`Population`] is the ordered,
//! fixed-size collection the driver evolves. Individuals are plain values:
//! each generation replaces them wholesale.

use crate::problem::{Border, ColoringProblem, Palette};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed-length coloring: `genes[node]` is an index into the palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Genome {
    genes: Vec<usize>,
}

impl Genome {
    /// Wraps raw color indices.
    ///
    /// The caller is responsible for keeping every gene below the palette
    /// size; [`Genome::is_valid_for`] checks it.
    pub fn from_genes(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// Draws every gene independently and uniformly from `0..color_count`.
    pub fn random<R: Rng>(len: usize, color_count: usize, rng: &mut R) -> Self {
        let genes = (0..len).map(|_| rng.random_range(0..color_count)).collect();
        Self { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.genes
    }

    /// Color index of `node`.
    pub fn color(&self, node: usize) -> Option<usize> {
        self.genes.get(node).copied()
    }

    /// Whether the genome has the problem's length and only uses its colors.
    pub fn is_valid_for(&self, problem: &ColoringProblem) -> bool {
        self.genes.len() == problem.node_count()
            && self.genes.iter().all(|&g| g < problem.color_count())
    }

    /// Borders whose endpoints share a color.
    pub fn conflicts<'a>(
        &'a self,
        borders: &'a [Border],
    ) -> impl Iterator<Item = &'a Border> + 'a {
        borders
            .iter()
            .filter(move |b| self.genes[b.a] == self.genes[b.b])
    }

    /// Renders the genome as palette symbols, one per node.
    ///
    /// Genes outside the palette render as `'?'`.
    pub fn to_symbols(&self, palette: &Palette) -> String {
        self.genes
            .iter()
            .map(|&g| palette.symbol(g).unwrap_or('?'))
            .collect()
    }
}

/// A genome with its evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub genome: Genome,

    /// Fraction of borders satisfied, in `[0, 1]`. Higher is better.
    pub fitness: f64,

    /// Number of violated borders.
    pub conflicts: usize,
}

impl Individual {
    /// An individual that has not been evaluated yet.
    pub fn unevaluated(genome: Genome) -> Self {
        Self {
            genome,
            fitness: 0.0,
            conflicts: usize::MAX,
        }
    }

    /// True for a conflict-free coloring.
    pub fn is_optimal(&self) -> bool {
        self.conflicts == 0
    }
}

/// The ordered, fixed-size set of individuals for one generation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `size` individuals with uniformly random genomes.
    ///
    /// No two individuals are required to differ.
    pub fn random<R: Rng>(problem: &ColoringProblem, size: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| {
                Individual::unevaluated(Genome::random(
                    problem.node_count(),
                    problem.color_count(),
                    rng,
                ))
            })
            .collect();
        Self { individuals }
    }

    /// Builds an unevaluated population from explicit genomes.
    pub fn from_genomes(genomes: impl IntoIterator<Item = Genome>) -> Self {
        Self {
            individuals: genomes.into_iter().map(Individual::unevaluated).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
