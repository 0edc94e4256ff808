//! Skill-to-employee lookup.

use std::collections::HashMap;

use super::{Employee, Project};

/// Precomputed lookup from skill name to the roster positions of the
/// employees holding that skill.
///
/// Built once per roster with a single pass and read-only thereafter.
/// Positions within each skill's list appear in roster order.
#[derive(Debug, Clone, Default)]
pub struct SkillIndex {
    by_skill: HashMap<String, Vec<usize>>,
}

impl SkillIndex {
    /// Builds the index from a roster. Employees with empty skill lists
    /// simply contribute no entries.
    pub fn build(roster: &[Employee]) -> Self {
        let mut by_skill: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, employee) in roster.iter().enumerate() {
            for skill in &employee.skills {
                by_skill.entry(skill.clone()).or_default().push(position);
            }
        }
        Self { by_skill }
    }

    /// Roster positions of employees holding `skill`, in roster order.
    /// Empty when nobody holds the skill.
    pub fn holders(&self, skill: &str) -> &[usize] {
        self.by_skill.get(skill).map_or(&[], Vec::as_slice)
    }

    /// Roster positions of every employee qualified for `project`, i.e. the
    /// union of the holders of each required skill, deduplicated and in
    /// ascending roster order. Empty when no employee matches.
    pub fn candidates_for(&self, project: &Project) -> Vec<usize> {
        let mut candidates: Vec<usize> = project
            .required_skills
            .iter()
            .flat_map(|skill| self.holders(skill).iter().copied())
            .collect();
        candidates.sort_unstable();
        candidates.dedup();
        candidates
    }

    /// Number of distinct skills present in the roster.
    pub fn skill_count(&self) -> usize {
        self.by_skill.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Employee> {
        vec![
            Employee::new("E1", "Alice", ["AI", "Cloud"], 40),
            Employee::new("E2", "Bob", ["Java", "Networking"], 20),
            Employee::new("E3", "Charlie", ["Python", "AI"], 20),
        ]
    }

    #[test]
    fn test_holders_in_roster_order() {
        let index = SkillIndex::build(&roster());
        assert_eq!(index.holders("AI"), &[0, 2]);
        assert_eq!(index.holders("Java"), &[1]);
        assert_eq!(index.holders("Cobol"), &[] as &[usize]);
        assert_eq!(index.skill_count(), 5);
    }

    #[test]
    fn test_candidates_union_is_deduplicated() {
        let index = SkillIndex::build(&roster());
        // AI matches 0 and 2, Python matches 2; the union must list 2 once.
        let project = Project::new("P1", ["AI", "Python"], 10, 1);
        assert_eq!(index.candidates_for(&project), vec![0, 2]);
    }

    #[test]
    fn test_candidates_empty_when_no_match() {
        let index = SkillIndex::build(&roster());
        let project = Project::new("P1", ["Cobol"], 10, 1);
        assert!(index.candidates_for(&project).is_empty());
    }

    #[test]
    fn test_empty_roster() {
        let index = SkillIndex::build(&[]);
        assert_eq!(index.skill_count(), 0);
        assert!(index.holders("AI").is_empty());
    }
}
