pub mod create_project_resource;
pub mod project_resource;
pub mod projects;
