use cm_core::Machine;

use serde::Serialize;

/// Machine view exposed at the HTTP boundary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineResource {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub machine_type: String,
    pub brand: String,
    pub status: String,
}

impl From<Machine> for MachineResource {
    fn from(m: Machine) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            name: m.name,
            machine_type: m.machine_type,
            brand: m.brand,
            status: m.status.as_str().to_string(),
        }
    }
}
