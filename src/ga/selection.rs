//! Breeding-pool selection: elitism plus tournaments.
//!
//! Fitness is not free, so the engine evaluates each individual once per
//! generation and passes the cached totals in here; selection never
//! re-evaluates.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use std::cmp::Ordering;

use rand::Rng;

use super::{Allocation, GaConfig};

/// Selects the breeding pool for one generation.
///
/// Ranks the population by descending fitness, copies the top
/// `config.elite_size` unchanged to the front of the pool, then fills the
/// remainder with tournament winners: each tournament draws
/// `config.tournament_size` individuals uniformly **with replacement** (the
/// same individual may appear in several tournaments, or several times within
/// one) and keeps the fittest. The pool size is always
/// `config.population_size / 2`, elites included — the configured size, not
/// the current population length, which may have drifted by pairing parity.
///
/// # Panics
///
/// Panics if `population` is empty or its length differs from `scores`.
pub fn select_pool<R: Rng>(
    population: &[Allocation],
    scores: &[f64],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Allocation> {
    assert!(!population.is_empty(), "cannot select from empty population");
    assert_eq!(
        population.len(),
        scores.len(),
        "one cached score per individual"
    );

    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| descending(scores[a], scores[b]));

    let pool_size = config.population_size / 2;
    let mut pool = Vec::with_capacity(pool_size);
    for &idx in order.iter().take(config.elite_size.min(pool_size)) {
        pool.push(population[idx].clone());
    }

    while pool.len() < pool_size {
        let winner = tournament(scores, config.tournament_size, rng);
        pool.push(population[winner].clone());
    }

    pool
}

/// One tournament: `k` uniform draws with replacement, highest score wins.
fn tournament<R: Rng>(scores: &[f64], k: usize, rng: &mut R) -> usize {
    let n = scores.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k {
        let contender = rng.random_range(0..n);
        if scores[contender] > scores[best] {
            best = contender;
        }
    }
    best
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Distinguishable one-project allocations: team `[i]` marks individual i.
    fn tagged_population(n: usize) -> Vec<Allocation> {
        (0..n)
            .map(|i| Allocation::from_teams(vec![vec![i]]))
            .collect()
    }

    #[test]
    fn test_pool_size_is_half_population() {
        let population = tagged_population(10);
        let scores: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_size(2)
            .with_tournament_size(3);
        let mut rng = StdRng::seed_from_u64(42);

        let pool = select_pool(&population, &scores, &config, &mut rng);
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn test_elites_lead_the_pool() {
        let population = tagged_population(8);
        let scores = vec![3.0, 9.0, -5.0, 7.0, 0.0, 12.0, 1.0, 2.0];
        let config = GaConfig::default()
            .with_population_size(8)
            .with_elite_size(3)
            .with_tournament_size(2);
        let mut rng = StdRng::seed_from_u64(42);

        let pool = select_pool(&population, &scores, &config, &mut rng);

        // Top three by score: indices 5 (12.0), 1 (9.0), 3 (7.0).
        assert_eq!(pool[0], population[5]);
        assert_eq!(pool[1], population[1]);
        assert_eq!(pool[2], population[3]);
    }

    #[test]
    fn test_pool_size_uses_configured_population() {
        // Population drifted to 9 members; the pool target stays 10/2.
        let population = tagged_population(9);
        let scores: Vec<f64> = (0..9).map(|i| i as f64).collect();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_size(1)
            .with_tournament_size(2);
        let mut rng = StdRng::seed_from_u64(42);

        let pool = select_pool(&population, &scores, &config, &mut rng);
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn test_tournament_favors_high_scores() {
        let scores = vec![1.0, 5.0, 100.0, 8.0];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[tournament(&scores, 4, &mut rng)] += 1;
        }
        // Index 2 (score 100) should dominate; with 4 draws with replacement
        // it wins whenever drawn at least once: 1 - (3/4)^4 ≈ 68%.
        assert!(
            counts[2] > 6000,
            "expected best to win >60% of tournaments, got {}/{n}",
            counts[2]
        );
    }

    #[test]
    fn test_tournament_size_one_is_uniform() {
        let scores = vec![1.0, 5.0, 100.0, 8.0];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[tournament(&scores, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform selection, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_negative_scores_still_rank() {
        let population = tagged_population(4);
        let scores = vec![-300.0, -130.0, -450.0, -90.0];
        let config = GaConfig::default()
            .with_population_size(4)
            .with_elite_size(2)
            .with_tournament_size(2);
        let mut rng = StdRng::seed_from_u64(42);

        let pool = select_pool(&population, &scores, &config, &mut rng);
        assert_eq!(pool[0], population[3]);
        assert_eq!(pool[1], population[1]);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let config = GaConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        select_pool(&[], &[], &config, &mut rng);
    }
}
