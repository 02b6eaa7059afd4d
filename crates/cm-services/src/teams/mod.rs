pub mod team_command_service;
pub mod team_query_service;
