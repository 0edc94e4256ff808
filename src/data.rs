//! Hardcoded sample catalogs.
//!
//! The scenarios the crate ships with: 10 or 15 projects against a roster of
//! 10 or 15 employees. Used by demos, integration tests, and benchmarks; the
//! optimization core itself is catalog-agnostic.

use crate::model::{Employee, Project};

/// Ten projects: `[id, required skills, hours, priority]`.
pub fn projects_10() -> Vec<Project> {
    vec![
        Project::new("P1", ["Python", "Database"], 16, 2),
        Project::new("P2", ["Java", "Networking"], 8, 1),
        Project::new("P3", ["Python", "Machine Learning"], 20, 3),
        Project::new("P4", ["Database", "Java"], 8, 1),
        Project::new("P5", ["Networking", "Machine Learning"], 16, 2),
        Project::new("P6", ["AI", "Cloud"], 16, 2),
        Project::new("P7", ["Cybersecurity", "Networking"], 16, 1),
        Project::new("P8", ["Python", "AI"], 20, 2),
        Project::new("P9", ["Data Science", "Machine Learning"], 20, 3),
        Project::new("P10", ["Java", "Database"], 16, 1),
    ]
}

/// The ten projects of [`projects_10`] plus five more.
pub fn projects_15() -> Vec<Project> {
    let mut projects = projects_10();
    projects.extend([
        Project::new("P11", ["Python", "Cloud"], 20, 2),
        Project::new("P12", ["Java", "Cybersecurity"], 16, 2),
        Project::new("P13", ["Networking", "Data Science"], 16, 2),
        Project::new("P14", ["AI", "Database"], 20, 2),
        Project::new("P15", ["Machine Learning", "Cloud"], 24, 3),
    ]);
    projects
}

/// Ten employees: `[id, name, skills, available hours]`.
pub fn employees_10() -> Vec<Employee> {
    vec![
        Employee::new("E1", "Alice", ["AI", "Cloud"], 40),
        Employee::new("E2", "Bob", ["Java", "Networking"], 20),
        Employee::new("E3", "Charlie", ["Python", "Machine Learning"], 20),
        Employee::new("E4", "David", ["Database", "Java"], 40),
        Employee::new("E5", "Eve", ["Networking", "Machine Learning"], 40),
        Employee::new("E6", "Frank", ["Python", "Java"], 40),
        Employee::new("E7", "Grace", ["Database", "Networking"], 40),
        Employee::new("E8", "Heidi", ["Machine Learning", "Python"], 20),
        Employee::new("E9", "Ivan", ["Java", "Database"], 20),
        Employee::new("E10", "Judy", ["Networking", "Python"], 40),
    ]
}

/// The ten employees of [`employees_10`] plus five more.
pub fn employees_15() -> Vec<Employee> {
    let mut employees = employees_10();
    employees.extend([
        Employee::new("E11", "Kevin", ["AI", "Cloud"], 20),
        Employee::new("E12", "Laura", ["Cybersecurity", "Networking"], 20),
        Employee::new("E13", "Mike", ["Python", "AI"], 20),
        Employee::new("E14", "Nina", ["Data Science", "Machine Learning"], 20),
        Employee::new("E15", "Oscar", ["Java", "Database"], 20),
    ]);
    employees
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillIndex;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(projects_10().len(), 10);
        assert_eq!(projects_15().len(), 15);
        assert_eq!(employees_10().len(), 10);
        assert_eq!(employees_15().len(), 15);
    }

    #[test]
    fn test_catalogs_are_well_formed() {
        for project in projects_15() {
            assert!(!project.required_skills.is_empty());
            assert!(project.required_hours > 0);
            assert!((1..=3).contains(&project.priority));
        }
        for employee in employees_15() {
            assert!(!employee.skills.is_empty());
            assert!(employee.available_hours > 0);
        }
    }

    #[test]
    fn test_every_small_catalog_project_is_staffable() {
        // On the 10x10 scenario every project has at least one qualified
        // employee; nothing is condemned to score zero forever.
        let index = SkillIndex::build(&employees_10());
        for project in projects_10() {
            assert!(
                !index.candidates_for(&project).is_empty(),
                "{} has no qualified employee",
                project.id
            );
        }
    }
}
