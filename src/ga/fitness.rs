//! Fitness evaluation with in-place budget repair.
//!
//! Scoring walks the project catalog **in order**, so earlier projects get
//! first claim on each employee's hour budget. This ordering dependency is
//! part of the scoring semantics, not incidental.
//!
//! Evaluation has a deliberate side effect: a skill-valid team that cannot
//! afford its project's hours is a *repair event* — the caller's allocation
//! has that team cleared in place, and the project scores zero. Later
//! generations therefore breed from repaired individuals. Repair is
//! idempotent: re-evaluating an already-repaired allocation yields the same
//! score and mutates nothing further.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Allocation;
use crate::model::{Employee, Project};

/// Base benefit awarded for completing a project, before the priority
/// multiplier and team-size divisor.
pub const BASE_COMPLETION_SCORE: f64 = 20.0;

/// Penalty per employee who appears on no completed project.
pub const UNUSED_EMPLOYEE_PENALTY: f64 = 100.0;

/// Penalty per hour of negative remaining budget across the roster.
pub const OVERRUN_PENALTY_PER_HOUR: f64 = 50.0;

/// Penalty per project left incomplete.
pub const INCOMPLETE_PROJECT_PENALTY: f64 = 50.0;

/// Score breakdown of one allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessResult {
    /// Total benefit after penalties. May be negative. Higher is better.
    pub total: f64,
    /// Per-project score, keyed by project id; exactly one entry per project,
    /// zero for incomplete projects.
    pub project_scores: HashMap<String, f64>,
    /// Number of projects completed.
    pub completed_projects: usize,
    /// Hours consumed across all employees (available minus remaining).
    pub hours_used: i64,
}

/// Scores `allocation` against the catalog and roster, repairing hour-budget
/// violations in place.
///
/// Per project, in catalog order:
///
/// - A team is **skill-valid** when it is non-empty and every member shares a
///   skill with the project. An invalid team scores zero and is left as-is.
/// - A skill-valid team where some member's remaining hours fall short of the
///   project's required hours is cleared from `allocation` and scores zero.
///   No partial credit.
/// - Otherwise the project completes: it scores
///   `20 × priority ÷ team size`, and every member's ledger is debited the
///   required hours.
///
/// Afterwards, three penalties are subtracted from the total: 100 per
/// employee on no completed project, 50 per hour of negative remaining
/// budget (negative ledger values are kept un-clamped until this point), and
/// 50 per incomplete project.
pub fn evaluate(
    projects: &[Project],
    employees: &[Employee],
    allocation: &mut Allocation,
) -> FitnessResult {
    debug_assert_eq!(allocation.project_count(), projects.len());

    let mut remaining: Vec<i64> = employees.iter().map(|e| e.available_hours).collect();
    let mut used = vec![false; employees.len()];
    let mut project_scores = HashMap::with_capacity(projects.len());
    let mut completed_projects = 0;
    let mut total = 0.0;

    for (project_idx, project) in projects.iter().enumerate() {
        let team = allocation.team(project_idx);

        let skill_valid = !team.is_empty()
            && team
                .iter()
                .all(|&member| employees[member].qualifies_for(&project.required_skills));
        if !skill_valid {
            project_scores.insert(project.id.clone(), 0.0);
            continue;
        }

        let affordable = team
            .iter()
            .all(|&member| remaining[member] >= project.required_hours);
        if !affordable {
            allocation.clear_team(project_idx);
            project_scores.insert(project.id.clone(), 0.0);
            continue;
        }

        let score = BASE_COMPLETION_SCORE * f64::from(project.priority) / team.len() as f64;
        total += score;
        project_scores.insert(project.id.clone(), score);
        completed_projects += 1;
        for &member in team {
            used[member] = true;
            remaining[member] -= project.required_hours;
        }
    }

    let unused = used.iter().filter(|&&u| !u).count();
    total -= unused as f64 * UNUSED_EMPLOYEE_PENALTY;

    let overrun: i64 = remaining.iter().filter(|&&h| h < 0).map(|&h| -h).sum();
    total -= overrun as f64 * OVERRUN_PENALTY_PER_HOUR;

    total -= (projects.len() - completed_projects) as f64 * INCOMPLETE_PROJECT_PENALTY;

    let hours_used = employees
        .iter()
        .zip(&remaining)
        .map(|(employee, &left)| employee.available_hours - left)
        .sum();

    FitnessResult {
        total,
        project_scores,
        completed_projects,
        hours_used,
    }
}
