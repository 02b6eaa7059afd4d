//! Side-effect-free read intents for teams.

use crate::ProjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTeamByIdQuery {
    pub team_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetAllTeamsByProjectIdQuery {
    pub project: ProjectId,
}
