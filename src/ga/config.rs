//! GA configuration.
//!
//! [`GaConfig`] holds the run parameters that are independent of the
//! problem instance: population size, iteration cap and seed.

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the coloring GA.
///
/// # Defaults
///
/// ```
/// use u_graphcolor::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_graphcolor::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_max_generations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct GaConfig {
    /// Number of individuals in the population (P).
    ///
    /// Each generation ranks `P - 1` breeding candidates. Even sizes of at
    /// least 4 pair every child with two distinct pool entries.
    pub population_size: usize,

    /// Iteration cap: number of reproduction steps before giving up.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick feasibility checks on small maps.
    ///
    /// - Population: 40, Generations: 200
    pub fn fast() -> Self {
        Self {
            population_size: 40,
            max_generations: 200,
            ..Self::default()
        }
    }

    /// Preset for large or tightly constrained maps.
    ///
    /// - Population: 200, Generations: 5000
    pub fn thorough() -> Self {
        Self {
            population_size: 200,
            max_generations: 5000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        Ok(())
    }
}
