pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    machines::machine_resource::MachineResource,
    materials::material_resource::MaterialResource,
    projects::{
        create_project_resource::CreateProjectResource,
        project_resource::ProjectResource,
        projects::{
            create_project, delete_project, get_project, list_machines_by_project,
            list_materials_by_project, list_projects, update_project,
        },
    },
    teams::{
        create_team_resource::CreateTeamResource,
        team_resource::TeamResource,
        teams::{create_team, delete_team, get_team, list_teams_by_project, update_team},
        update_team_resource::UpdateTeamResource,
    },
};

pub use app_state::AppState;
pub use routes::build_router;
