pub mod create_team_resource;
pub mod team_resource;
pub mod teams;
pub mod update_team_resource;
