//! Team entity - a work crew assigned to a project.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    /// Owning project (foreign key)
    pub project_id: i64,
    pub name: String,
    pub specialty: String,
}
