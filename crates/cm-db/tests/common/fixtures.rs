#![allow(dead_code)]

use cm_core::{CreateProjectCommand, CreateTeamCommand, UpdateProjectCommand};

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Creates a CreateProjectCommand with sensible defaults
pub fn create_project_command() -> CreateProjectCommand {
    CreateProjectCommand {
        name: "Test Project".to_string(),
        description: "Test project description".to_string(),
        location: "Cusco".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        expected_end_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        budget: 150_000.0,
        url_image: "https://img.example.com/test.png".to_string(),
        owner_user_id: 1,
    }
}

/// Creates an UpdateProjectCommand replacing every mutable field
pub fn update_project_command(project_id: i64) -> UpdateProjectCommand {
    UpdateProjectCommand {
        project_id,
        name: "Updated Project".to_string(),
        description: "Updated description".to_string(),
        location: "Trujillo".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        expected_end_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        budget: 175_000.0,
        url_image: "https://img.example.com/updated.png".to_string(),
        owner_user_id: 2,
    }
}

/// Creates a CreateTeamCommand for the given project
pub fn create_team_command(project_id: i64) -> CreateTeamCommand {
    CreateTeamCommand {
        project_id,
        name: "Test Team".to_string(),
        specialty: "Masonry".to_string(),
    }
}

/// Inserts a material row directly; the repository has no write path
pub async fn insert_material(pool: &SqlitePool, project_id: i64, name: &str) -> i64 {
    let result = sqlx::query(
        "INSERT INTO cm_materials (project_id, name, unit, quantity, total_cost) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(project_id)
    .bind(name)
    .bind("kg")
    .bind(500.0)
    .bind(1250.0)
    .execute(pool)
    .await
    .expect("Failed to insert test material");

    result.last_insert_rowid()
}

/// Inserts a machine row directly; the repository has no write path
pub async fn insert_machine(pool: &SqlitePool, project_id: i64, name: &str, status: &str) -> i64 {
    let result = sqlx::query(
        "INSERT INTO cm_machines (project_id, name, machine_type, brand, status) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(project_id)
    .bind(name)
    .bind("excavator")
    .bind("Caterpillar")
    .bind(status)
    .execute(pool)
    .await
    .expect("Failed to insert test machine");

    result.last_insert_rowid()
}
