//! Skill- and hour-constrained project staffing via a genetic algorithm.
//!
//! Assigns employees to projects under two kinds of constraints — every
//! assigned employee must share at least one skill with the project, and no
//! employee's hour budget may be exceeded — while maximizing a weighted
//! completion benefit. The search is a classic generational GA: skill-aware
//! random initialization, fitness evaluation with in-place budget repair,
//! elitist tournament selection, single-point crossover, and per-project
//! team-resample mutation.
//!
//! # Modules
//!
//! - [`model`]: Domain types — [`Project`](model::Project),
//!   [`Employee`](model::Employee), and the [`SkillIndex`](model::SkillIndex)
//!   lookup derived from the roster.
//! - [`ga`]: The optimization engine — configuration, population
//!   initialization, fitness/repair, selection, crossover/mutation operators,
//!   and the [`EvolutionEngine`](ga::EvolutionEngine) generational loop.
//! - [`data`]: Hardcoded sample catalogs (10/15 projects, 10/15 employees)
//!   for demos, tests, and benchmarks.
//! - [`report`]: Formatting of the best allocation and multi-run summaries.
//!   Consumes the engine's output; not part of the optimization core.
//!
//! # Example
//!
//! ```
//! use staff_alloc::data;
//! use staff_alloc::ga::{EvolutionEngine, GaConfig};
//! use staff_alloc::model::SkillIndex;
//!
//! let projects = data::projects_10();
//! let employees = data::employees_10();
//! let index = SkillIndex::build(&employees);
//!
//! let config = GaConfig::default().with_generations(20).with_seed(42);
//! let engine = EvolutionEngine::new(&projects, &employees, &index, config)
//!     .expect("valid configuration");
//! let result = engine.run();
//!
//! assert_eq!(result.best.project_count(), projects.len());
//! println!("benefit: {:.2}", result.fitness.total);
//! ```

pub mod data;
pub mod ga;
pub mod model;
pub mod report;
