//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the staffing GA.
///
/// An explicit value object passed into the engine — there are no
/// process-wide tunables. Defaults match the reference parameterization of
/// the problem (population 100, 200 generations, 2 elites, tournaments of 5,
/// 15% mutation).
///
/// # Builder Pattern
///
/// ```
/// use staff_alloc::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(10)
///     .with_mutation_rate(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of allocations in the initial population.
    ///
    /// Also fixes the breeding-pool target: selection keeps
    /// `population_size / 2` individuals per generation. The actual
    /// population length may drift slightly when the pool has an odd size.
    pub population_size: usize,

    /// Number of generations to run. `0` is valid and returns the best
    /// member of the initial population untouched by any evolutionary step.
    pub generations: usize,

    /// Number of top-ranked allocations copied unchanged into the breeding
    /// pool each generation.
    pub elite_size: usize,

    /// Number of individuals drawn (with replacement) per tournament.
    ///
    /// Higher values increase selection pressure.
    pub tournament_size: usize,

    /// Probability that a child has one project's team resampled (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            elite_size: 2,
            tournament_size: 5,
            mutation_rate: 0.15,
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

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate, clamped to `[0.0, 1.0]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.elite_size > self.population_size / 2 {
            return Err("elite_size exceeds the breeding pool (population_size / 2)".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0.0, 1.0]".into());
        }
        Ok(())
    }
}
