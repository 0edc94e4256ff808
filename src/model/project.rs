//! Project model.

use serde::{Deserialize, Serialize};

/// A project to be staffed.
///
/// Immutable for the duration of an optimization run. The catalog order of
/// projects is significant: fitness evaluation walks projects in catalog
/// order, so earlier projects get first claim on employee hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier (e.g., "P1").
    pub id: String,
    /// Skills that qualify an employee for this project. An employee is a
    /// valid member when their skills intersect this list.
    pub required_skills: Vec<String>,
    /// Hours needed to complete the project (positive).
    pub required_hours: i64,
    /// Importance weight, 1–3; higher priority yields a larger completion
    /// benefit.
    pub priority: u8,
}

impl Project {
    /// Creates a new project.
    pub fn new(
        id: impl Into<String>,
        required_skills: impl IntoIterator<Item = impl Into<String>>,
        required_hours: i64,
        priority: u8,
    ) -> Self {
        Self {
            id: id.into(),
            required_skills: required_skills.into_iter().map(Into::into).collect(),
            required_hours,
            priority,
        }
    }
}
