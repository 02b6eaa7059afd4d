//! Shared application state for the REST handlers.
//!
//! Services are constructed once at startup from the database pool and
//! cloned into each request by axum's State extractor. There is no other
//! ambient state.

use cm_db::{MachineRepository, MaterialRepository, ProjectRepository, TeamRepository};
use cm_services::{
    MachineQueryService, MaterialQueryService, ProjectCommandService, ProjectQueryService,
    TeamCommandService, TeamQueryService,
};

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub project_command_service: ProjectCommandService,
    pub project_query_service: ProjectQueryService,
    pub team_command_service: TeamCommandService,
    pub team_query_service: TeamQueryService,
    pub material_query_service: MaterialQueryService,
    pub machine_query_service: MachineQueryService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let projects = ProjectRepository::new(pool.clone());
        let teams = TeamRepository::new(pool.clone());
        let materials = MaterialRepository::new(pool.clone());
        let machines = MachineRepository::new(pool);

        Self {
            project_command_service: ProjectCommandService::new(projects.clone()),
            project_query_service: ProjectQueryService::new(projects.clone()),
            team_command_service: TeamCommandService::new(teams.clone(), projects),
            team_query_service: TeamQueryService::new(teams),
            material_query_service: MaterialQueryService::new(materials),
            machine_query_service: MachineQueryService::new(machines),
        }
    }
}
