use cm_core::CreateTeamCommand;

use serde::Deserialize;

/// Request body for creating a team
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamResource {
    pub project_id: i64,
    pub name: String,
    pub specialty: String,
}

impl From<CreateTeamResource> for CreateTeamCommand {
    fn from(resource: CreateTeamResource) -> Self {
        Self {
            project_id: resource.project_id,
            name: resource.name,
            specialty: resource.specialty,
        }
    }
}
