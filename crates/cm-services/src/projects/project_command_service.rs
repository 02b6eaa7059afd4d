//! Write-side handlers for project commands.
//!
//! Expected failures (bad field values, missing update target) are
//! `Ok(None)`; an `Err` always means the persistence layer itself failed.

use cm_core::{CreateProjectCommand, Dashboard, DeleteProjectCommand, UpdateProjectCommand};
use cm_db::{ProjectRepository, Result as DbErrorResult};

use chrono::NaiveDate;

#[derive(Clone)]
pub struct ProjectCommandService {
    projects: ProjectRepository,
}

impl ProjectCommandService {
    pub fn new(projects: ProjectRepository) -> Self {
        Self { projects }
    }

    /// Handle a CreateProjectCommand. Returns the created project wrapped
    /// in its Dashboard aggregate, or `None` when the command is rejected.
    pub async fn handle_create(
        &self,
        command: CreateProjectCommand,
    ) -> DbErrorResult<Option<Dashboard>> {
        if let Some(reason) = validate_project_fields(
            &command.name,
            command.start_date,
            command.expected_end_date,
            command.budget,
        ) {
            log::warn!("Rejected project create: {}", reason);
            return Ok(None);
        }

        let project = self.projects.insert(&command).await?;
        log::info!("Created project {} ({})", project.id, project.name);

        Ok(Some(Dashboard::new(project)))
    }

    /// Handle an UpdateProjectCommand: full replace of the mutable fields.
    /// `None` when the target does not exist or the replacement fields are
    /// rejected; nothing is mutated in either case.
    pub async fn handle_update(
        &self,
        command: UpdateProjectCommand,
    ) -> DbErrorResult<Option<Dashboard>> {
        if let Some(reason) = validate_project_fields(
            &command.name,
            command.start_date,
            command.expected_end_date,
            command.budget,
        ) {
            log::warn!(
                "Rejected update of project {}: {}",
                command.project_id,
                reason
            );
            return Ok(None);
        }

        let rows = self.projects.update(&command).await?;
        if rows == 0 {
            log::warn!(
                "Rejected update of project {}: not found",
                command.project_id
            );
            return Ok(None);
        }

        log::info!("Updated project {}", command.project_id);
        let updated = self.projects.find_by_id(command.project_id).await?;

        Ok(updated.map(Dashboard::new))
    }

    /// Handle a DeleteProjectCommand. Idempotent: deleting an absent id
    /// succeeds silently.
    pub async fn handle_delete(&self, command: DeleteProjectCommand) -> DbErrorResult<()> {
        self.projects.delete(command.project_id).await?;
        log::info!("Deleted project {}", command.project_id);

        Ok(())
    }
}

fn validate_project_fields(
    name: &str,
    start_date: NaiveDate,
    expected_end_date: NaiveDate,
    budget: f64,
) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("name cannot be empty");
    }
    if expected_end_date < start_date {
        return Some("expected_end_date is before start_date");
    }
    if budget < 0.0 {
        return Some("budget cannot be negative");
    }

    None
}
