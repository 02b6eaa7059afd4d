use cm_core::Project;

use chrono::NaiveDate;
use serde::Serialize;

/// Project view exposed at the HTTP boundary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResource {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    pub budget: f64,
    pub url_image: String,
    pub owner_user_id: i64,
}

impl From<Project> for ProjectResource {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            location: p.location,
            start_date: p.start_date,
            expected_end_date: p.expected_end_date,
            budget: p.budget,
            url_image: p.url_image,
            owner_user_id: p.owner_user_id,
        }
    }
}
