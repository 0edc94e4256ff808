//! Initial population construction.
//!
//! Skill-aware randomized assignment: every employee is attempted once, every
//! otherwise-empty project gets a best-effort backfill. Neither full coverage
//! nor hour feasibility is guaranteed — feasibility is evaluated and
//! partially repaired later by [`fitness`](super::fitness).

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::operators::{random_team_size, sample_team};
use super::Allocation;
use crate::model::{Employee, Project, SkillIndex};

/// Produces `size` independently randomized allocations.
pub fn seed_population<R: Rng>(
    projects: &[Project],
    employees: &[Employee],
    index: &SkillIndex,
    size: usize,
    rng: &mut R,
) -> Vec<Allocation> {
    (0..size)
        .map(|_| random_allocation(projects, employees, index, rng))
        .collect()
}

/// Builds one randomized allocation.
///
/// Two passes:
///
/// 1. Each employee, in roster order, is appended to one uniformly chosen
///    project among those whose required skills intersect theirs. An
///    employee matching no project is simply left out.
/// 2. Each project whose team is still empty is backfilled with a randomly
///    sized team (1–3, capped at the candidate count) sampled without
///    repetition from all qualified employees, assigned or not. A project no
///    employee qualifies for stays empty.
pub fn random_allocation<R: Rng>(
    projects: &[Project],
    employees: &[Employee],
    index: &SkillIndex,
    rng: &mut R,
) -> Allocation {
    let mut allocation = Allocation::empty(projects.len());

    for (position, employee) in employees.iter().enumerate() {
        let candidate_projects: Vec<usize> = projects
            .iter()
            .enumerate()
            .filter(|(_, project)| employee.qualifies_for(&project.required_skills))
            .map(|(i, _)| i)
            .collect();
        if let Some(&chosen) = candidate_projects.choose(rng) {
            allocation.assign(chosen, position);
        }
    }

    for (project_idx, project) in projects.iter().enumerate() {
        if !allocation.team(project_idx).is_empty() {
            continue;
        }
        let candidates = index.candidates_for(project);
        if candidates.is_empty() {
            continue;
        }
        let size = random_team_size(candidates.len(), rng);
        allocation.set_team(project_idx, sample_team(&candidates, size, rng));
    }

    allocation
}
