//! Genetic algorithm for graph coloring.
//!
//! Each generation flows one way:
//!
//! ```text
//! Population -> fitness -> selection -> operators -> Population
//!                  |
//!                  +-> BestRecord (best across all generations)
//! ```
//!
//! # Key Types
//!
//! - [`Genome`], [`Individual`], [`Population`]: the solution model
//! - [`GaConfig`]: population size, iteration cap, seed
//! - [`Evolution`]: the stepwise driver for one run
//! - [`GaRunner`] / [`GaResult`]: run to completion and collect the answer
//!
//! # Submodules
//!
//! - [`fitness`]: fraction of satisfied borders
//! - [`selection`]: stable descending rank of `P - 1` breeding candidates
//! - [`operators`]: paired single-point crossover and point mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eiben, Van Der Hauw & Van Hemert (1998), "Graph Coloring with Adaptive
//!   Evolutionary Algorithms"

mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{BestRecord, Evolution, GaResult, GaRunner, RunStatus};
pub use types::{Genome, Individual, Population};
