//! Intent carriers for project state changes.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectCommand {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    pub budget: f64,
    pub url_image: String,
    pub owner_user_id: i64,
}

/// Full replace of the mutable fields of an existing project.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProjectCommand {
    pub project_id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    pub budget: f64,
    pub url_image: String,
    pub owner_user_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProjectCommand {
    pub project_id: i64,
}
