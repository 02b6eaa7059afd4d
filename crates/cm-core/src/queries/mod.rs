pub mod project_queries;
pub mod resource_queries;
pub mod team_queries;
