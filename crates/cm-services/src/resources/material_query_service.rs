//! Read-side handlers for project-scoped material queries.

use cm_core::{GetAllMaterialsByProjectIdQuery, Material};
use cm_db::{MaterialRepository, Result as DbErrorResult};

#[derive(Clone)]
pub struct MaterialQueryService {
    materials: MaterialRepository,
}

impl MaterialQueryService {
    pub fn new(materials: MaterialRepository) -> Self {
        Self { materials }
    }

    pub async fn handle_get_all_by_project_id(
        &self,
        query: GetAllMaterialsByProjectIdQuery,
    ) -> DbErrorResult<Vec<Material>> {
        self.materials
            .find_by_project_id(query.project.value())
            .await
    }
}
