//! Genetic algorithm core for the staffing problem.
//!
//! The engine evolves a population of [`Allocation`]s — candidate per-project
//! team assignments — through a fixed number of generations. Each generation:
//!
//! 1. Every individual is evaluated once ([`fitness::evaluate`]), which also
//!    repairs hour-budget violations in place.
//! 2. A half-size breeding pool is selected: the top `elite_size` individuals
//!    unchanged, the rest by tournaments ([`selection::select_pool`]).
//! 3. Consecutive pool members are paired; each pair produces two children by
//!    single-point crossover, each child is independently mutated
//!    ([`operators`]).
//! 4. The next population is the pool concatenated with the offspring.
//!
//! There is no early-exit or convergence condition: the generation count is
//! the sole runtime bound. After the final generation, every member of the
//! last population is evaluated and the highest-scoring allocation is
//! returned with its full [`FitnessResult`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters as an explicit value object
//! - [`Allocation`]: One candidate solution
//! - [`FitnessResult`]: Score breakdown of an allocation
//! - [`EvolutionEngine`]: Executes the generational loop
//! - [`RunResult`]: Best allocation plus per-generation history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod allocation;
mod config;
mod engine;
pub mod fitness;
pub mod operators;
pub mod population;
pub mod selection;

pub use allocation::Allocation;
pub use config::GaConfig;
pub use engine::{EvolutionEngine, RunResult};
pub use fitness::FitnessResult;
