//! Console reporting for optimization results.
//!
//! Pure consumers of the engine's output: allocation tables, per-employee
//! work hours, and multi-run statistical summaries. Nothing here feeds back
//! into the optimization core.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::ga::{Allocation, FitnessResult, RunResult};
use crate::model::{Employee, Project};

/// Renders the best allocation as a project table followed by per-employee
/// work hours.
pub fn allocation_report(
    projects: &[Project],
    employees: &[Employee],
    result: &RunResult,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Maximized Benefit: {:.2}", result.fitness.total);
    let _ = writeln!(out);
    let _ = writeln!(out, "Project Allocations:");
    let _ = writeln!(out, "{}", "-".repeat(75));
    let _ = writeln!(
        out,
        "{:<10} {:<30} {:<15} {:<10}",
        "Project", "Assigned Employees", "Hours", "Score"
    );
    let _ = writeln!(out, "{}", "-".repeat(75));

    for (project, team) in projects.iter().zip(result.best.teams()) {
        let names: Vec<&str> = team
            .iter()
            .map(|&member| employees[member].name.as_str())
            .collect();
        let score = result
            .fitness
            .project_scores
            .get(&project.id)
            .copied()
            .unwrap_or(0.0);
        let _ = writeln!(
            out,
            "{:<10} {:<30} {:<15} {:<10.2}",
            project.id,
            names.join(", "),
            project.required_hours,
            score
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(75));

    let _ = writeln!(out);
    let _ = writeln!(out, "Employee Work Hours:");
    let _ = writeln!(out, "{}", "-".repeat(60));
    let _ = writeln!(out, "{:<10} {:<15} {:<15}", "Employee", "Hours Worked", "Skills");
    let _ = writeln!(out, "{}", "-".repeat(60));

    for (position, employee) in employees.iter().enumerate() {
        let hours = hours_worked(projects, &result.best, position);
        let _ = writeln!(
            out,
            "{:<10} {:<15} {:<15}",
            employee.name,
            hours,
            employee.skills.join(", ")
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(60));

    out
}

/// Total hours `employee` (a roster position) works across all teams of
/// `allocation`. Counts every appearance, including double-bookings.
pub fn hours_worked(projects: &[Project], allocation: &Allocation, employee: usize) -> i64 {
    projects
        .iter()
        .zip(allocation.teams())
        .filter(|(_, team)| team.contains(&employee))
        .map(|(project, _)| project.required_hours)
        .sum()
}

/// One run's headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Total benefit (fitness total).
    pub benefit: f64,
    /// Projects completed.
    pub completed_projects: usize,
    /// Hours consumed across the roster.
    pub hours_used: i64,
    /// Hours consumed as a percentage of the roster's total available hours.
    pub utilization_pct: f64,
}

/// Aggregate statistics over repeated runs with identical configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Per-run records, in run order.
    pub records: Vec<RunRecord>,
    /// Mean benefit across runs.
    pub average_benefit: f64,
    /// Max minus min benefit — a consistency measure.
    pub spread: f64,
}

/// Aggregates repeated runs into a [`RunSummary`].
///
/// # Panics
///
/// Panics if `results` is empty.
pub fn summarize(employees: &[Employee], results: &[FitnessResult]) -> RunSummary {
    assert!(!results.is_empty(), "cannot summarize zero runs");

    let capacity: i64 = employees.iter().map(|e| e.available_hours).sum();
    let records: Vec<RunRecord> = results
        .iter()
        .map(|result| RunRecord {
            benefit: result.total,
            completed_projects: result.completed_projects,
            hours_used: result.hours_used,
            utilization_pct: if capacity > 0 {
                result.hours_used as f64 / capacity as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();

    let benefits: Vec<f64> = records.iter().map(|r| r.benefit).collect();
    let average_benefit = benefits.iter().sum::<f64>() / benefits.len() as f64;
    let spread = benefits.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        - benefits.iter().copied().fold(f64::INFINITY, f64::min);

    RunSummary {
        records,
        average_benefit,
        spread,
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:<15} {:<15} {:<15} {:<15}",
            "Run", "Total Benefit", "Projects Done", "Hours Used", "Efficiency (%)"
        )?;
        writeln!(f, "{}", "-".repeat(80))?;
        for (i, record) in self.records.iter().enumerate() {
            writeln!(
                f,
                "{:<10} {:<15.2} {:<15} {:<15} {:<15.2}",
                format!("Run {}", i + 1),
                record.benefit,
                record.completed_projects,
                record.hours_used,
                record.utilization_pct
            )?;
        }
        writeln!(f, "{}", "-".repeat(80))?;
        write!(
            f,
            "Average Benefit: {:.2}, Spread: {:.2}",
            self.average_benefit, self.spread
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::ga::{EvolutionEngine, GaConfig};
    use crate::model::SkillIndex;
    use std::collections::HashMap;

    fn sample_result() -> (Vec<Project>, Vec<Employee>, RunResult) {
        let projects = vec![
            Project::new("P1", ["A"], 10, 1),
            Project::new("P2", ["B"], 10, 1),
        ];
        let employees = vec![
            Employee::new("E1", "Alice", ["A"], 10),
            Employee::new("E2", "Bob", ["B"], 10),
        ];
        let result = RunResult {
            best: Allocation::from_teams(vec![vec![0], vec![1]]),
            fitness: FitnessResult {
                total: 40.0,
                project_scores: HashMap::from([
                    ("P1".to_string(), 20.0),
                    ("P2".to_string(), 20.0),
                ]),
                completed_projects: 2,
                hours_used: 20,
            },
            generations: 5,
            best_history: vec![40.0; 6],
        };
        (projects, employees, result)
    }

    #[test]
    fn test_allocation_report_lists_every_project_and_employee() {
        let (projects, employees, result) = sample_result();
        let report = allocation_report(&projects, &employees, &result);

        for project in &projects {
            assert!(report.contains(&project.id), "missing {}", project.id);
        }
        for employee in &employees {
            assert!(report.contains(&employee.name), "missing {}", employee.name);
        }
        assert!(report.contains("Maximized Benefit: 40.00"));
    }

    #[test]
    fn test_hours_worked_counts_double_bookings() {
        let projects = vec![
            Project::new("P1", ["A"], 4, 1),
            Project::new("P2", ["A"], 6, 1),
        ];
        let allocation = Allocation::from_teams(vec![vec![0], vec![0]]);
        assert_eq!(hours_worked(&projects, &allocation, 0), 10);
        assert_eq!(hours_worked(&projects, &allocation, 1), 0);
    }

    #[test]
    fn test_summarize_average_and_spread() {
        let employees = vec![
            Employee::new("E1", "Alice", ["A"], 30),
            Employee::new("E2", "Bob", ["B"], 10),
        ];
        let result = |total: f64, hours: i64| FitnessResult {
            total,
            project_scores: HashMap::new(),
            completed_projects: 1,
            hours_used: hours,
        };

        let summary = summarize(
            &employees,
            &[result(40.0, 20), result(10.0, 10), result(-20.0, 0)],
        );

        assert_eq!(summary.records.len(), 3);
        assert!((summary.average_benefit - 10.0).abs() < 1e-10);
        assert!((summary.spread - 60.0).abs() < 1e-10);
        // 20 of 40 available hours.
        assert!((summary.records[0].utilization_pct - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_display_has_one_row_per_run() {
        let employees = vec![Employee::new("E1", "Alice", ["A"], 40)];
        let results = vec![
            FitnessResult {
                total: 15.0,
                project_scores: HashMap::new(),
                completed_projects: 1,
                hours_used: 10,
            };
            3
        ];
        let rendered = summarize(&employees, &results).to_string();

        assert!(rendered.contains("Run 1"));
        assert!(rendered.contains("Run 3"));
        assert!(rendered.contains("Average Benefit: 15.00, Spread: 0.00"));
    }

    #[test]
    fn test_report_over_full_engine_run() {
        let projects = data::projects_10();
        let employees = data::employees_10();
        let index = SkillIndex::build(&employees);
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(10)
            .with_seed(42);
        let engine = EvolutionEngine::new(&projects, &employees, &index, config).unwrap();

        let runs: Vec<FitnessResult> = (0..3).map(|_| engine.run().fitness).collect();
        let summary = summarize(&employees, &runs);

        assert_eq!(summary.records.len(), 3);
        // Identical seed, identical runs.
        assert!((summary.spread - 0.0).abs() < 1e-10);
    }
}
