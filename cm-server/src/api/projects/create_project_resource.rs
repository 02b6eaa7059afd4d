use cm_core::{CreateProjectCommand, UpdateProjectCommand};

use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for creating a project. Updates reuse the same shape:
/// a full replacement of the mutable fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectResource {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    pub budget: f64,
    pub url_image: String,
    pub user_id: i64,
}

impl From<CreateProjectResource> for CreateProjectCommand {
    fn from(resource: CreateProjectResource) -> Self {
        Self {
            name: resource.name,
            description: resource.description,
            location: resource.location,
            start_date: resource.start_date,
            expected_end_date: resource.expected_end_date,
            budget: resource.budget,
            url_image: resource.url_image,
            owner_user_id: resource.user_id,
        }
    }
}

impl CreateProjectResource {
    /// Assemble the full-replace update command for an existing project
    pub fn into_update_command(self, project_id: i64) -> UpdateProjectCommand {
        UpdateProjectCommand {
            project_id,
            name: self.name,
            description: self.description,
            location: self.location,
            start_date: self.start_date,
            expected_end_date: self.expected_end_date,
            budget: self.budget,
            url_image: self.url_image,
            owner_user_id: self.user_id,
        }
    }
}
