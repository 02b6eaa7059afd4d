//! Dashboard aggregate - owns exactly one project plus derived views.
//!
//! Every read or write of a project surfaces through a Dashboard; callers
//! reach the entity through the explicit accessors instead of unwrapping
//! ad hoc at each call site.

use crate::Project;

/// Aggregate root wrapping a [`Project`] with views computed at
/// construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    project: Project,
    planned_duration_days: i64,
    budget_per_day: Option<f64>,
}

impl Dashboard {
    pub fn new(project: Project) -> Self {
        let planned_duration_days =
            (project.expected_end_date - project.start_date).num_days();
        let budget_per_day = (planned_duration_days > 0)
            .then(|| project.budget / planned_duration_days as f64);

        Self {
            project,
            planned_duration_days,
            budget_per_day,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn into_project(self) -> Project {
        self.project
    }

    /// Days between start and expected end of the wrapped project
    pub fn planned_duration_days(&self) -> i64 {
        self.planned_duration_days
    }

    /// Budget spread over the planned duration; None for same-day windows
    pub fn budget_per_day(&self) -> Option<f64> {
        self.budget_per_day
    }
}
