//! Read-side handlers for team queries.

use cm_core::{GetAllTeamsByProjectIdQuery, GetTeamByIdQuery, Team};
use cm_db::{Result as DbErrorResult, TeamRepository};

#[derive(Clone)]
pub struct TeamQueryService {
    teams: TeamRepository,
}

impl TeamQueryService {
    pub fn new(teams: TeamRepository) -> Self {
        Self { teams }
    }

    pub async fn handle_get_by_id(&self, query: GetTeamByIdQuery) -> DbErrorResult<Option<Team>> {
        self.teams.find_by_id(query.team_id).await
    }

    pub async fn handle_get_all_by_project_id(
        &self,
        query: GetAllTeamsByProjectIdQuery,
    ) -> DbErrorResult<Vec<Team>> {
        self.teams.find_by_project_id(query.project.value()).await
    }
}
