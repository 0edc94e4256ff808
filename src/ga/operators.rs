//! Crossover and mutation operators over [`Allocation`]s.
//!
//! Both operators are structure-blind: children may double-book employees or
//! blow hour budgets, and no validity check happens here. Repair is the
//! fitness evaluator's job on the next evaluation.

use rand::seq::index;
use rand::Rng;

use super::Allocation;
use crate::model::{Project, SkillIndex};

/// Largest team produced by backfill and mutation resampling.
pub(crate) const MAX_TEAM_SIZE: usize = 3;

/// Single-point crossover: swap tails at a uniformly random split point.
///
/// With split point `k` in `[1, L-1]`, child A is parent 1's teams `[0, k)`
/// followed by parent 2's `[k, L)`; child B is the mirror image. Teams are
/// copied whole — the operator never splits a team.
///
/// # Panics
///
/// Panics if the parents cover different catalogs or fewer than 2 projects
/// (no split point exists). The engine rejects single-project catalogs before
/// running.
pub fn crossover<R: Rng>(
    parent1: &Allocation,
    parent2: &Allocation,
    rng: &mut R,
) -> (Allocation, Allocation) {
    let len = parent1.project_count();
    assert_eq!(
        len,
        parent2.project_count(),
        "parents must cover the same project catalog"
    );
    assert!(len >= 2, "crossover requires at least 2 projects");

    let point = rng.random_range(1..len);

    let mut child_a = Vec::with_capacity(len);
    let mut child_b = Vec::with_capacity(len);
    child_a.extend_from_slice(&parent1.teams()[..point]);
    child_a.extend_from_slice(&parent2.teams()[point..]);
    child_b.extend_from_slice(&parent2.teams()[..point]);
    child_b.extend_from_slice(&parent1.teams()[point..]);

    (Allocation::from_teams(child_a), Allocation::from_teams(child_b))
}

/// With probability `rate`, resamples one uniformly chosen project's team.
///
/// The replacement team is drawn without repetition from the employees whose
/// skills intersect the project's requirements, with size
/// `min(candidates, uniform [1, 3])`. When the project has no qualified
/// employee, or the probability roll fails, the allocation is left unchanged.
/// At most one project's entry is ever touched per call.
pub fn mutate<R: Rng>(
    allocation: &mut Allocation,
    projects: &[Project],
    index: &SkillIndex,
    rate: f64,
    rng: &mut R,
) {
    if rng.random_range(0.0..1.0) >= rate {
        return;
    }

    let project_idx = rng.random_range(0..projects.len());
    let candidates = index.candidates_for(&projects[project_idx]);
    if candidates.is_empty() {
        return;
    }

    let size = random_team_size(candidates.len(), rng);
    allocation.set_team(project_idx, sample_team(&candidates, size, rng));
}

/// Uniform team size in `[1, MAX_TEAM_SIZE]`, capped at `candidate_count`.
pub(crate) fn random_team_size<R: Rng>(candidate_count: usize, rng: &mut R) -> usize {
    rng.random_range(1..=MAX_TEAM_SIZE).min(candidate_count)
}

/// Samples `size` distinct members from `candidates`.
pub(crate) fn sample_team<R: Rng>(candidates: &[usize], size: usize, rng: &mut R) -> Vec<usize> {
    index::sample(rng, candidates.len(), size)
        .into_iter()
        .map(|i| candidates[i])
        .collect()
}
