//! Write-side handlers for team commands.
//!
//! A created team is reported by id only; callers that need the full
//! entity follow up with a GetTeamByIdQuery. The owning project must
//! exist before a team can reference it.

use cm_core::{CreateTeamCommand, DeleteTeamCommand, Team, UpdateTeamCommand};
use cm_db::{ProjectRepository, Result as DbErrorResult, TeamRepository};

#[derive(Clone)]
pub struct TeamCommandService {
    teams: TeamRepository,
    projects: ProjectRepository,
}

impl TeamCommandService {
    pub fn new(teams: TeamRepository, projects: ProjectRepository) -> Self {
        Self { teams, projects }
    }

    /// Handle a CreateTeamCommand. Returns the assigned id, or `None`
    /// when the command is rejected.
    pub async fn handle_create(&self, command: CreateTeamCommand) -> DbErrorResult<Option<i64>> {
        if command.name.trim().is_empty() {
            log::warn!("Rejected team create: name cannot be empty");
            return Ok(None);
        }

        if !self.projects.exists(command.project_id).await? {
            log::warn!(
                "Rejected team create: project {} not found",
                command.project_id
            );
            return Ok(None);
        }

        let team_id = self.teams.insert(&command).await?;
        log::info!("Created team {} ({})", team_id, command.name);

        Ok(Some(team_id))
    }

    /// Handle an UpdateTeamCommand. `None` when the target does not exist
    /// or the replacement fields are rejected.
    pub async fn handle_update(&self, command: UpdateTeamCommand) -> DbErrorResult<Option<Team>> {
        if command.name.trim().is_empty() {
            log::warn!(
                "Rejected update of team {}: name cannot be empty",
                command.team_id
            );
            return Ok(None);
        }

        let rows = self.teams.update(&command).await?;
        if rows == 0 {
            log::warn!("Rejected update of team {}: not found", command.team_id);
            return Ok(None);
        }

        log::info!("Updated team {}", command.team_id);

        self.teams.find_by_id(command.team_id).await
    }

    /// Handle a DeleteTeamCommand. Idempotent: deleting an absent id
    /// succeeds silently.
    pub async fn handle_delete(&self, command: DeleteTeamCommand) -> DbErrorResult<()> {
        self.teams.delete(command.team_id).await?;
        log::info!("Deleted team {}", command.team_id);

        Ok(())
    }
}
