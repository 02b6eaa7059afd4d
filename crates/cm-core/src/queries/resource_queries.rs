//! Side-effect-free read intents for project-scoped resources.

use crate::ProjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetAllMaterialsByProjectIdQuery {
    pub project: ProjectId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetAllMachinesByProjectIdQuery {
    pub project: ProjectId,
}
