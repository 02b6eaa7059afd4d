#![allow(dead_code)]

//! Test infrastructure for service tests

use cm_core::{CreateProjectCommand, CreateTeamCommand};

use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../cm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a CreateProjectCommand with sensible defaults
pub fn create_project_command(name: &str) -> CreateProjectCommand {
    CreateProjectCommand {
        name: name.to_string(),
        description: "Two-lane bridge over the Rimac".to_string(),
        location: "Lima".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        expected_end_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
        budget: 900_000.0,
        url_image: "https://img.example.com/bridge.png".to_string(),
        owner_user_id: 11,
    }
}

/// Creates a CreateTeamCommand for the given project
pub fn create_team_command(project_id: i64, name: &str) -> CreateTeamCommand {
    CreateTeamCommand {
        project_id,
        name: name.to_string(),
        specialty: "Steelwork".to_string(),
    }
}

/// Inserts a material row directly; materials have no write path here
pub async fn insert_material(pool: &SqlitePool, project_id: i64, name: &str) -> i64 {
    let result = sqlx::query(
        "INSERT INTO cm_materials (project_id, name, unit, quantity, total_cost) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(project_id)
    .bind(name)
    .bind("m3")
    .bind(40.0)
    .bind(5200.0)
    .execute(pool)
    .await
    .expect("Failed to insert test material");

    result.last_insert_rowid()
}

/// Inserts a machine row directly; machines have no write path here
pub async fn insert_machine(pool: &SqlitePool, project_id: i64, name: &str) -> i64 {
    let result = sqlx::query(
        "INSERT INTO cm_machines (project_id, name, machine_type, brand, status) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(project_id)
    .bind(name)
    .bind("crane")
    .bind("Liebherr")
    .bind("in_use")
    .execute(pool)
    .await
    .expect("Failed to insert test machine");

    result.last_insert_rowid()
}
