pub mod commands;
pub mod error;
pub mod models;
pub mod queries;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::dashboard::Dashboard;
pub use models::machine::Machine;
pub use models::machine_status::MachineStatus;
pub use models::material::Material;
pub use models::project::Project;
pub use models::project_id::ProjectId;
pub use models::team::Team;

pub use commands::project_commands::{
    CreateProjectCommand, DeleteProjectCommand, UpdateProjectCommand,
};
pub use commands::team_commands::{CreateTeamCommand, DeleteTeamCommand, UpdateTeamCommand};

pub use queries::project_queries::{GetAllProjectsQuery, GetProjectByIdQuery};
pub use queries::resource_queries::{
    GetAllMachinesByProjectIdQuery, GetAllMaterialsByProjectIdQuery,
};
pub use queries::team_queries::{GetAllTeamsByProjectIdQuery, GetTeamByIdQuery};
