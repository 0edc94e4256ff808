//! Generational evolution loop.
//!
//! [`EvolutionEngine`] composes the other GA components:
//! initialization → (evaluate → select → pair → crossover → mutate) × N →
//! final ranking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{fitness, operators, population, selection};
use super::{Allocation, FitnessResult, GaConfig};
use crate::model::{Employee, Project, SkillIndex};

/// Result of one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Highest-scoring allocation in the final population.
    pub best: Allocation,
    /// Full score breakdown of `best`.
    pub fitness: FitnessResult,
    /// Number of generations executed.
    pub generations: usize,
    /// Best cached total per generation, plus the final ranking — length is
    /// `generations + 1`. Unlike an elitist best-ever trace, this follows the
    /// population, so it need not be monotone.
    pub best_history: Vec<f64>,
}

/// Runs the staffing GA over an immutable catalog, roster, and skill index.
///
/// Fully sequential: the generation count is the sole runtime bound — there
/// is no convergence early-exit, cancellation, or timeout. Each individual is
/// evaluated exactly once per generation; the totals are cached and reused
/// for ranking, elitism, and every tournament, and evaluation's in-place
/// budget repair is therefore applied exactly once per individual per
/// generation.
///
/// # Usage
///
/// ```
/// use staff_alloc::data;
/// use staff_alloc::ga::{EvolutionEngine, GaConfig};
/// use staff_alloc::model::SkillIndex;
///
/// let projects = data::projects_10();
/// let employees = data::employees_10();
/// let index = SkillIndex::build(&employees);
/// let config = GaConfig::default().with_generations(10).with_seed(42);
///
/// let result = EvolutionEngine::new(&projects, &employees, &index, config)
///     .unwrap()
///     .run();
/// assert_eq!(result.generations, 10);
/// ```
pub struct EvolutionEngine<'a> {
    projects: &'a [Project],
    employees: &'a [Employee],
    index: &'a SkillIndex,
    config: GaConfig,
}

impl<'a> EvolutionEngine<'a> {
    /// Creates an engine, validating the configuration against the problem.
    ///
    /// Returns `Err` when the configuration is invalid or the catalog has
    /// fewer than 2 projects (single-point crossover needs a split point in
    /// `[1, L-1]`).
    pub fn new(
        projects: &'a [Project],
        employees: &'a [Employee],
        index: &'a SkillIndex,
        config: GaConfig,
    ) -> Result<Self, String> {
        config.validate()?;
        if projects.len() < 2 {
            return Err("project catalog must contain at least 2 projects".into());
        }
        Ok(Self {
            projects,
            employees,
            index,
            config,
        })
    }

    /// Runs the GA with the configured seed (a random seed when unset).
    pub fn run(&self) -> RunResult {
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or_else(rand::random));
        self.run_with(&mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// Injecting a seeded generator makes a run fully reproducible.
    pub fn run_with<R: Rng>(&self, rng: &mut R) -> RunResult {
        let mut population = population::seed_population(
            self.projects,
            self.employees,
            self.index,
            self.config.population_size,
            rng,
        );
        let mut best_history = Vec::with_capacity(self.config.generations + 1);

        for _ in 0..self.config.generations {
            let scores = self.evaluate_all(&mut population);
            best_history.push(scores.iter().copied().fold(f64::NEG_INFINITY, f64::max));

            let mut next = selection::select_pool(&population, &scores, &self.config, rng);

            // Pair consecutive pool members; a trailing unpaired member
            // breeds no offspring but stays in the next population.
            let mut offspring = Vec::with_capacity(next.len());
            for pair in next.chunks_exact(2) {
                let (mut a, mut b) = operators::crossover(&pair[0], &pair[1], rng);
                operators::mutate(&mut a, self.projects, self.index, self.config.mutation_rate, rng);
                operators::mutate(&mut b, self.projects, self.index, self.config.mutation_rate, rng);
                offspring.push(a);
                offspring.push(b);
            }

            next.append(&mut offspring);
            population = next;
        }

        // Final ranking: evaluate every member of the last population and
        // keep the highest total (first wins ties).
        let mut best_idx = 0;
        let mut best_fitness: Option<FitnessResult> = None;
        for (idx, allocation) in population.iter_mut().enumerate() {
            let result = fitness::evaluate(self.projects, self.employees, allocation);
            if best_fitness
                .as_ref()
                .map_or(true, |current| result.total > current.total)
            {
                best_idx = idx;
                best_fitness = Some(result);
            }
        }
        let fitness = best_fitness.expect("population is never empty");
        best_history.push(fitness.total);

        RunResult {
            best: population.swap_remove(best_idx),
            fitness,
            generations: self.config.generations,
            best_history,
        }
    }

    /// Evaluates (and repairs) every individual once, returning cached totals.
    fn evaluate_all(&self, population: &mut [Allocation]) -> Vec<f64> {
        population
            .iter_mut()
            .map(|allocation| fitness::evaluate(self.projects, self.employees, allocation).total)
            .collect()
    }
}
