//! Candidate solution encoding.

use serde::{Deserialize, Serialize};

/// One candidate solution: a team of employee positions per project.
///
/// # Encoding
///
/// The allocation holds one entry per project, in catalog order, so its
/// length is fixed at the number of projects. Each entry lists the roster
/// positions assigned to that project. Entries may be empty, and a position
/// may legitimately appear in more than one project's team — cross-project
/// exclusivity is not enforced by construction; double-booking is constrained
/// only by the hour ledger during fitness evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    teams: Vec<Vec<usize>>,
}

impl Allocation {
    /// Creates an allocation with an empty team for each of `project_count`
    /// projects.
    pub fn empty(project_count: usize) -> Self {
        Self {
            teams: vec![Vec::new(); project_count],
        }
    }

    /// Creates an allocation from explicit teams, one per project in catalog
    /// order.
    pub fn from_teams(teams: Vec<Vec<usize>>) -> Self {
        Self { teams }
    }

    /// Number of projects this allocation covers.
    pub fn project_count(&self) -> usize {
        self.teams.len()
    }

    /// The team assigned to `project` (a catalog position).
    pub fn team(&self, project: usize) -> &[usize] {
        &self.teams[project]
    }

    /// All teams in catalog order.
    pub fn teams(&self) -> &[Vec<usize>] {
        &self.teams
    }

    /// Appends `employee` (a roster position) to `project`'s team.
    pub fn assign(&mut self, project: usize, employee: usize) {
        self.teams[project].push(employee);
    }

    /// Replaces `project`'s team wholesale.
    pub fn set_team(&mut self, project: usize, team: Vec<usize>) {
        self.teams[project] = team;
    }

    /// Empties `project`'s team. Used by budget repair.
    pub fn clear_team(&mut self, project: usize) {
        self.teams[project].clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_one_entry_per_project() {
        let allocation = Allocation::empty(3);
        assert_eq!(allocation.project_count(), 3);
        assert!(allocation.teams().iter().all(Vec::is_empty));
    }

    #[test]
    fn test_assign_and_clear() {
        let mut allocation = Allocation::empty(2);
        allocation.assign(0, 4);
        allocation.assign(0, 1);
        allocation.set_team(1, vec![2]);
        assert_eq!(allocation.team(0), &[4, 1]);
        assert_eq!(allocation.team(1), &[2]);

        allocation.clear_team(0);
        assert!(allocation.team(0).is_empty());
        assert_eq!(allocation.team(1), &[2]);
    }

    #[test]
    fn test_duplicate_positions_across_projects_allowed() {
        let allocation = Allocation::from_teams(vec![vec![0], vec![0, 1]]);
        assert_eq!(allocation.team(0), &[0]);
        assert_eq!(allocation.team(1), &[0, 1]);
    }
}
