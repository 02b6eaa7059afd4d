pub mod project_command_service;
pub mod project_query_service;
