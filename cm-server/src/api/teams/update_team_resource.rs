use cm_core::UpdateTeamCommand;

use serde::Deserialize;

/// Request body for updating a team; the target id rides on the path
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamResource {
    pub name: String,
    pub specialty: String,
}

impl UpdateTeamResource {
    /// Assemble the update command for an existing team
    pub fn into_command(self, team_id: i64) -> UpdateTeamCommand {
        UpdateTeamCommand {
            team_id,
            name: self.name,
            specialty: self.specialty,
        }
    }
}
