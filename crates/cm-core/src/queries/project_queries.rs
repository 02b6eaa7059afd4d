//! Side-effect-free read intents for projects.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllProjectsQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProjectByIdQuery {
    pub project_id: i64,
}
