//! Domain models for the staffing problem.
//!
//! Projects and employees are immutable for the duration of an optimization
//! run; the [`SkillIndex`] is derived from the roster once and read-only
//! thereafter. Input validation (non-empty skill lists, positive hours) is the
//! data-loading caller's concern — the optimization core assumes well-formed
//! values.

mod employee;
mod project;
mod skill_index;

pub use employee::Employee;
pub use project::Project;
pub use skill_index::SkillIndex;

/// Returns `true` when the two skill lists share at least one skill.
///
/// Skill lists are small (typically 2–3 entries), so a nested scan beats
/// building hash sets per check.
pub fn skills_overlap(a: &[String], b: &[String]) -> bool {
    a.iter().any(|skill| b.contains(skill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_overlap() {
        let a = vec!["Python".to_string(), "Database".to_string()];
        let b = vec!["Database".to_string(), "Java".to_string()];
        let c = vec!["Networking".to_string()];

        assert!(skills_overlap(&a, &b));
        assert!(!skills_overlap(&a, &c));
        assert!(!skills_overlap(&a, &[]));
        assert!(!skills_overlap(&[], &[]));
    }
}
