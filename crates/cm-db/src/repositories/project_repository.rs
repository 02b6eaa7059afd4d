//! Project repository for CRUD operations on projects.
//!
//! Inserts take the command object and materialize the stored entity with
//! the id SQLite assigned. Lookups return `Option`; "not found" is never
//! an error at this layer.

use crate::Result as DbErrorResult;

use cm_core::{CreateProjectCommand, Project, UpdateProjectCommand};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, command: &CreateProjectCommand) -> DbErrorResult<Project> {
        let result = sqlx::query(
            r#"
                INSERT INTO cm_projects (
                    name, description, location, start_date, expected_end_date,
                    budget, url_image, owner_user_id
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&command.name)
        .bind(&command.description)
        .bind(&command.location)
        .bind(command.start_date)
        .bind(command.expected_end_date)
        .bind(command.budget)
        .bind(&command.url_image)
        .bind(command.owner_user_id)
        .execute(&self.pool)
        .await?;

        Ok(Project {
            id: result.last_insert_rowid(),
            name: command.name.clone(),
            description: command.description.clone(),
            location: command.location.clone(),
            start_date: command.start_date,
            expected_end_date: command.expected_end_date,
            budget: command.budget,
            url_image: command.url_image.clone(),
            owner_user_id: command.owner_user_id,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, description, location, start_date,
                    expected_end_date, budget, url_image, owner_user_id
                FROM cm_projects
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| project_from_row(&r)).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, description, location, start_date,
                    expected_end_date, budget, url_image, owner_user_id
                FROM cm_projects
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    pub async fn exists(&self, id: i64) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM cm_projects WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Full replace of the mutable fields. Returns the number of rows
    /// touched; 0 means the target does not exist.
    pub async fn update(&self, command: &UpdateProjectCommand) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
                UPDATE cm_projects
                SET name = ?, description = ?, location = ?, start_date = ?,
                    expected_end_date = ?, budget = ?, url_image = ?, owner_user_id = ?
                WHERE id = ?
            "#,
        )
        .bind(&command.name)
        .bind(&command.description)
        .bind(&command.location)
        .bind(command.start_date)
        .bind(command.expected_end_date)
        .bind(command.budget)
        .bind(&command.url_image)
        .bind(command.owner_user_id)
        .bind(command.project_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Idempotent: deleting an absent id is not an error.
    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM cm_projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        location: row.try_get("location")?,
        start_date: row.try_get("start_date")?,
        expected_end_date: row.try_get("expected_end_date")?,
        budget: row.try_get("budget")?,
        url_image: row.try_get("url_image")?,
        owner_user_id: row.try_get("owner_user_id")?,
    })
}
