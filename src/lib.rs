//! Generational genetic algorithm for graph coloring.
//!
//! Assigns one of `K` colors to each of `N` nodes so that no two nodes
//! sharing a border get the same color. The engine keeps a fixed-size
//! population of colorings and evolves it with paired single-point
//! crossover and point mutation until a conflict-free coloring appears or
//! the iteration cap runs out.
//!
//! - [`problem`]: nodes, palette and borders, validated on construction
//! - [`ga`]: genome model, fitness, selection, operators and the driver
//! - [`presets`]: built-in instances (ten south-eastern US states)
//!
//! # Example
//!
//! ```
//! use u_graphcolor::ga::{GaConfig, GaRunner, RunStatus};
//! use u_graphcolor::{ColoringProblem, Palette};
//!
//! let problem = ColoringProblem::new(
//!     3,
//!     Palette::new(['R', 'G']).unwrap(),
//!     [(0, 1), (1, 2)],
//! )
//! .unwrap();
//! let result = GaRunner::run(&problem, &GaConfig::default().with_seed(42)).unwrap();
//!
//! assert_eq!(result.status, RunStatus::Converged);
//! assert_eq!(result.best_fitness, 1.0);
//! ```
//!
//! Rendering results (text reports, graph files) is left to callers: the
//! engine only hands back color indices and the palette to read them with.

pub mod error;
pub mod ga;
pub mod presets;
pub mod problem;
pub mod random;

pub use error::ConfigError;
pub use problem::{Border, ColoringProblem, Palette, ProblemDef};
