//! Intent carriers for team state changes.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTeamCommand {
    pub project_id: i64,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTeamCommand {
    pub team_id: i64,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTeamCommand {
    pub team_id: i64,
}
