//! Read-side handlers for project queries. Every project surfaces wrapped
//! in its Dashboard aggregate.

use cm_core::{Dashboard, GetAllProjectsQuery, GetProjectByIdQuery};
use cm_db::{ProjectRepository, Result as DbErrorResult};

#[derive(Clone)]
pub struct ProjectQueryService {
    projects: ProjectRepository,
}

impl ProjectQueryService {
    pub fn new(projects: ProjectRepository) -> Self {
        Self { projects }
    }

    pub async fn handle_get_all(
        &self,
        _query: GetAllProjectsQuery,
    ) -> DbErrorResult<Vec<Dashboard>> {
        let projects = self.projects.find_all().await?;

        Ok(projects.into_iter().map(Dashboard::new).collect())
    }

    pub async fn handle_get_by_id(
        &self,
        query: GetProjectByIdQuery,
    ) -> DbErrorResult<Option<Dashboard>> {
        let project = self.projects.find_by_id(query.project_id).await?;

        Ok(project.map(Dashboard::new))
    }
}
