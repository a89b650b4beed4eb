//! Configuration errors.
//!
//! Every failure the engine can report happens before the first
//! generation runs. Once a [`ColoringProblem`](crate::ColoringProblem) and a
//! [`GaConfig`](crate::ga::GaConfig) have been validated, evaluation,
//! selection and reproduction cannot fail.

use thiserror::Error;

/// Invalid problem or run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("genome length (node count) must be at least 2, got {0}")]
    GenomeTooShort(usize),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("duplicate color symbol {0:?} in palette")]
    DuplicateColor(char),

    #[error("border #{index} references node {node}, but only {node_count} nodes exist")]
    BorderOutOfRange {
        index: usize,
        node: usize,
        node_count: usize,
    },

    #[error("border #{index} connects node {node} to itself")]
    SelfBorder { index: usize, node: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
