pub mod projects;
pub mod resources;
pub mod teams;

pub use projects::project_command_service::ProjectCommandService;
pub use projects::project_query_service::ProjectQueryService;
pub use resources::machine_query_service::MachineQueryService;
pub use resources::material_query_service::MaterialQueryService;
pub use teams::team_command_service::TeamCommandService;
pub use teams::team_query_service::TeamQueryService;
