//! GA evolutionary loop execution.
//!
//! [`Evolution`] drives one run generation by generation:
//! evaluate → record best → check convergence → rank → reproduce → repeat.
//! [`GaRunner`] wraps it for callers that just want the final result.

use super::config::GaConfig;
use super::fitness::evaluate_population;
use super::operators::reproduce;
use super::selection::rank_candidates;
use super::types::{Genome, Individual, Population};
use crate::error::Result;
use crate::problem::{ColoringProblem, Palette};
use crate::random::create_rng;
use log::{debug, info, trace};
use rand::rngs::StdRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunStatus {
    /// More generations may follow.
    Running,
    /// A conflict-free coloring was found.
    Converged,
    /// The iteration cap was reached without a conflict-free coloring.
    Exhausted,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

/// Best individual seen across all generations of a run.
///
/// Only strictly better individuals replace the record, so its fitness
/// never decreases, even though the population itself keeps no elites.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BestRecord {
    best: Option<Individual>,
}

impl BestRecord {
    /// An empty record. It reports fitness 0 and accepts any individual.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genome(&self) -> Option<&Genome> {
        self.best.as_ref().map(|ind| &ind.genome)
    }

    pub fn fitness(&self) -> f64 {
        self.best.as_ref().map_or(0.0, |ind| ind.fitness)
    }

    /// True once the record holds a conflict-free coloring.
    pub fn is_global_optimum(&self) -> bool {
        self.best.as_ref().is_some_and(Individual::is_optimal)
    }

    /// Replaces the record if `candidate` is strictly fitter.
    ///
    /// Returns whether the record changed.
    pub fn offer(&mut self, candidate: &Individual) -> bool {
        let improves = match &self.best {
            Some(best) => candidate.fitness > best.fitness,
            None => true,
        };
        if improves {
            self.best = Some(candidate.clone());
        }
        improves
    }
}

/// Result of a finished run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaResult {
    /// Why the run stopped.
    pub status: RunStatus,

    /// Completed reproduction steps. A run that converges on its initial
    /// population reports 0; an exhausted run reports the cap.
    pub generations: usize,

    /// Best genome seen during the run.
    pub best: Genome,

    /// Fitness of `best`, in `[0, 1]`.
    pub best_fitness: f64,

    /// Best-so-far fitness after each evaluation. Non-decreasing.
    pub fitness_history: Vec<f64>,
}

impl GaResult {
    /// Whether `best` is conflict-free.
    pub fn is_global_optimum(&self) -> bool {
        self.status == RunStatus::Converged
    }

    /// The best genome in palette symbols, one per node.
    pub fn best_symbols(&self, palette: &Palette) -> String {
        self.best.to_symbols(palette)
    }
}

/// A single run of the coloring GA, advanced one generation at a time.
///
/// Dropping it (or simply not calling [`step`](Evolution::step) again) is
/// all it takes to cancel: each step either commits a full new population
/// or leaves the run in a terminal state.
///
/// # Usage
///
/// ```
/// use u_graphcolor::ga::{Evolution, GaConfig, RunStatus};
/// use u_graphcolor::{ColoringProblem, Palette};
///
/// let problem = ColoringProblem::new(
///     4,
///     Palette::new(['R', 'G']).unwrap(),
///     [(0, 1), (1, 2), (2, 3), (3, 0)],
/// )
/// .unwrap();
/// let config = GaConfig::default().with_population_size(20).with_seed(42);
///
/// let mut evolution = Evolution::new(&problem, &config).unwrap();
/// while evolution.step() == RunStatus::Running {}
/// assert_eq!(evolution.status(), RunStatus::Converged);
/// ```
#[derive(Debug, Clone)]
pub struct Evolution<'p> {
    problem: &'p ColoringProblem,
    max_generations: usize,
    rng: StdRng,
    population: Population,
    status: RunStatus,
    generation: usize,
    best: BestRecord,
    fitness_history: Vec<f64>,
}

impl<'p> Evolution<'p> {
    /// Validates `config` and draws the initial population.
    pub fn new(problem: &'p ColoringProblem, config: &GaConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let population = Population::random(problem, config.population_size, &mut rng);

        info!(
            "starting coloring GA: {} nodes, {} colors, {} borders, population {}, cap {}",
            problem.node_count(),
            problem.color_count(),
            problem.borders().len(),
            config.population_size,
            config.max_generations
        );

        Ok(Self {
            problem,
            max_generations: config.max_generations,
            rng,
            population,
            status: RunStatus::Running,
            generation: 0,
            best: BestRecord::new(),
            fitness_history: Vec::with_capacity(config.max_generations),
        })
    }

    /// Runs one generation and returns the resulting status.
    ///
    /// Calling it on a finished run changes nothing.
    pub fn step(&mut self) -> RunStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        let borders = self.problem.borders();
        evaluate_population(&mut self.population, borders);

        for ind in self.population.iter() {
            if self.best.offer(ind) {
                trace!(
                    "generation {}: new best fitness {:.4}",
                    self.generation,
                    ind.fitness
                );
            }
        }
        self.fitness_history.push(self.best.fitness());

        if self.best.is_global_optimum() {
            self.status = RunStatus::Converged;
            info!(
                "converged after {} generations: fitness {}",
                self.generation,
                self.best.fitness()
            );
            return self.status;
        }

        let ranked = rank_candidates(&self.population);
        self.population = reproduce(
            &self.population,
            &ranked,
            self.problem.color_count(),
            &mut self.rng,
        );
        self.generation += 1;

        debug!(
            "generation {}/{}: best fitness {:.4}",
            self.generation,
            self.max_generations,
            self.best.fitness()
        );

        if self.generation >= self.max_generations {
            self.status = RunStatus::Exhausted;
            info!(
                "exhausted after {} generations: best fitness {:.4}",
                self.generation,
                self.best.fitness()
            );
        }
        self.status
    }

    /// Steps until the run reaches a terminal state.
    pub fn run(mut self) -> GaResult {
        while !self.step().is_terminal() {}
        self.into_result()
    }

    /// Snapshot of the run so far.
    pub fn into_result(self) -> GaResult {
        GaResult {
            status: self.status,
            generations: self.generation,
            best_fitness: self.best.fitness(),
            best: self.best.genome().cloned().unwrap_or_default(),
            fitness_history: self.fitness_history,
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Completed reproduction steps.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn best(&self) -> &BestRecord {
        &self.best
    }

    /// The live population. Between steps it holds the unevaluated
    /// offspring of the last generation.
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }
}

/// Executes a whole run.
///
/// # Usage
///
/// ```
/// use u_graphcolor::ga::{GaConfig, GaRunner};
/// use u_graphcolor::presets;
///
/// let problem = presets::southeast_us();
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(42)).unwrap();
/// println!("{} -> {}", result.best_symbols(problem.palette()), result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA until convergence or the iteration cap.
    pub fn run(problem: &ColoringProblem, config: &GaConfig) -> Result<GaResult> {
        Ok(Evolution::new(problem, config)?.run())
    }
}

// ============================================================================
// Tests
// ============================================================================
