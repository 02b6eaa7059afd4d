//! Machine entity - heavy equipment assigned to a project, read-only here.

use crate::MachineStatus;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: i64,
    /// Owning project (foreign key)
    pub project_id: i64,
    pub name: String,
    /// Kind of equipment, e.g. "excavator", "crane"
    pub machine_type: String,
    pub brand: String,
    pub status: MachineStatus,
}

impl Machine {
    pub fn is_available(&self) -> bool {
        self.status == MachineStatus::Available
    }
}
