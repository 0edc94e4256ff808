//! Employee model.

use serde::{Deserialize, Serialize};

use super::skills_overlap;

/// An employee available for project assignment.
///
/// Immutable for the duration of an optimization run. Employees are referred
/// to by their **position** in the roster everywhere inside the GA; the `id`
/// and `name` fields only surface in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier (e.g., "E1").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Skills this employee can contribute.
    pub skills: Vec<String>,
    /// Hours available per period (positive).
    pub available_hours: i64,
}

impl Employee {
    /// Creates a new employee.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        skills: impl IntoIterator<Item = impl Into<String>>,
        available_hours: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skills: skills.into_iter().map(Into::into).collect(),
            available_hours,
        }
    }

    /// Whether this employee is qualified for a project requiring `required`
    /// skills, i.e. the skill lists intersect.
    pub fn qualifies_for(&self, required: &[String]) -> bool {
        skills_overlap(&self.skills, required)
    }
}
