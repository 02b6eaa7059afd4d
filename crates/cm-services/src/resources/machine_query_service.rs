//! Read-side handlers for project-scoped machine queries.

use cm_core::{GetAllMachinesByProjectIdQuery, Machine};
use cm_db::{MachineRepository, Result as DbErrorResult};

#[derive(Clone)]
pub struct MachineQueryService {
    machines: MachineRepository,
}

impl MachineQueryService {
    pub fn new(machines: MachineRepository) -> Self {
        Self { machines }
    }

    pub async fn handle_get_all_by_project_id(
        &self,
        query: GetAllMachinesByProjectIdQuery,
    ) -> DbErrorResult<Vec<Machine>> {
        self.machines
            .find_by_project_id(query.project.value())
            .await
    }
}
