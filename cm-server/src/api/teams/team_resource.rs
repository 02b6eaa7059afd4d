use cm_core::Team;

use serde::Serialize;

/// Team view exposed at the HTTP boundary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResource {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub specialty: String,
}

impl From<Team> for TeamResource {
    fn from(t: Team) -> Self {
        Self {
            id: t.id,
            project_id: t.project_id,
            name: t.name,
            specialty: t.specialty,
        }
    }
}
