//! Machine repository. Machines are read-only from this subsystem:
//! only the list-by-project lookup is exposed.

use crate::{DbError, Result as DbErrorResult};

use cm_core::{Machine, MachineStatus};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct MachineRepository {
    pool: SqlitePool,
}

impl MachineRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_project_id(&self, project_id: i64) -> DbErrorResult<Vec<Machine>> {
        let rows = sqlx::query(
            r#"
                SELECT id, project_id, name, machine_type, brand, status
                FROM cm_machines
                WHERE project_id = ?
                ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(machine_from_row).collect()
    }
}

fn machine_from_row(row: &SqliteRow) -> DbErrorResult<Machine> {
    let status: String = row.try_get("status")?;

    Ok(Machine {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        name: row.try_get("name")?,
        machine_type: row.try_get("machine_type")?,
        brand: row.try_get("brand")?,
        status: MachineStatus::from_str(&status).map_err(|e| DbError::Initialization {
            message: format!("Invalid MachineStatus in machine.status: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
