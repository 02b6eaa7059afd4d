//! Material repository. Materials are read-only from this subsystem:
//! only the list-by-project lookup is exposed.

use crate::Result as DbErrorResult;

use cm_core::Material;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct MaterialRepository {
    pool: SqlitePool,
}

impl MaterialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_project_id(&self, project_id: i64) -> DbErrorResult<Vec<Material>> {
        let rows = sqlx::query(
            r#"
                SELECT id, project_id, name, unit, quantity, total_cost
                FROM cm_materials
                WHERE project_id = ?
                ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(material_from_row).collect()
    }
}

fn material_from_row(row: &SqliteRow) -> DbErrorResult<Material> {
    Ok(Material {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        name: row.try_get("name")?,
        unit: row.try_get("unit")?,
        quantity: row.try_get("quantity")?,
        total_cost: row.try_get("total_cost")?,
    })
}
