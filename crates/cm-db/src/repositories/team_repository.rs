//! Team repository for CRUD operations on teams.

use crate::Result as DbErrorResult;

use cm_core::{CreateTeamCommand, Team, UpdateTeamCommand};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the id SQLite assigned to the new team.
    pub async fn insert(&self, command: &CreateTeamCommand) -> DbErrorResult<i64> {
        let result = sqlx::query(
            "INSERT INTO cm_teams (project_id, name, specialty) VALUES (?, ?, ?)",
        )
        .bind(command.project_id)
        .bind(&command.name)
        .bind(&command.specialty)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Team>> {
        let row = sqlx::query(
            "SELECT id, project_id, name, specialty FROM cm_teams WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| team_from_row(&r)).transpose()
    }

    pub async fn find_by_project_id(&self, project_id: i64) -> DbErrorResult<Vec<Team>> {
        let rows = sqlx::query(
            r#"
                SELECT id, project_id, name, specialty
                FROM cm_teams
                WHERE project_id = ?
                ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(team_from_row).collect()
    }

    /// Returns the number of rows touched; 0 means the target does not exist.
    pub async fn update(&self, command: &UpdateTeamCommand) -> DbErrorResult<u64> {
        let result = sqlx::query(
            "UPDATE cm_teams SET name = ?, specialty = ? WHERE id = ?",
        )
        .bind(&command.name)
        .bind(&command.specialty)
        .bind(command.team_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Idempotent: deleting an absent id is not an error.
    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM cm_teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn team_from_row(row: &SqliteRow) -> DbErrorResult<Team> {
    Ok(Team {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        name: row.try_get("name")?,
        specialty: row.try_get("specialty")?,
    })
}
