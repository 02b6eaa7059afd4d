#![allow(dead_code)]

//! Test infrastructure for cm-server API tests

use cm_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/cm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, plus the pool for seeding rows directly
pub async fn create_test_state() -> (AppState, SqlitePool) {
    let pool = create_test_pool().await;
    (AppState::new(pool.clone()), pool)
}

/// Create a test project, returning its assigned id
pub async fn seed_project(pool: &SqlitePool, name: &str) -> i64 {
    let result = sqlx::query(
        r#"
            INSERT INTO cm_projects (name, description, location, start_date,
                expected_end_date, budget, url_image, owner_user_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind("A seeded project")
    .bind("Lima")
    .bind("2026-02-01")
    .bind("2026-12-01")
    .bind(250_000.0)
    .bind("https://img.example.com/seed.png")
    .bind(7_i64)
    .execute(pool)
    .await
    .expect("Failed to create test project");

    result.last_insert_rowid()
}

/// Create a test team on a project, returning its assigned id
pub async fn seed_team(pool: &SqlitePool, project_id: i64, name: &str) -> i64 {
    let result =
        sqlx::query("INSERT INTO cm_teams (project_id, name, specialty) VALUES (?, ?, ?)")
            .bind(project_id)
            .bind(name)
            .bind("Masonry")
            .execute(pool)
            .await
            .expect("Failed to create test team");

    result.last_insert_rowid()
}

/// Create a test material on a project, returning its assigned id
pub async fn seed_material(pool: &SqlitePool, project_id: i64, name: &str) -> i64 {
    let result = sqlx::query(
        "INSERT INTO cm_materials (project_id, name, unit, quantity, total_cost) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(project_id)
    .bind(name)
    .bind("kg")
    .bind(100.0)
    .bind(450.0)
    .execute(pool)
    .await
    .expect("Failed to create test material");

    result.last_insert_rowid()
}

/// Create a test machine on a project, returning its assigned id
pub async fn seed_machine(pool: &SqlitePool, project_id: i64, name: &str) -> i64 {
    let result = sqlx::query(
        "INSERT INTO cm_machines (project_id, name, machine_type, brand, status) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(project_id)
    .bind(name)
    .bind("excavator")
    .bind("Komatsu")
    .bind("available")
    .execute(pool)
    .await
    .expect("Failed to create test machine");

    result.last_insert_rowid()
}

/// A valid project create/update payload in wire shape
pub fn project_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": "Office block shell and core",
        "location": "Lima",
        "startDate": "2026-02-01",
        "expectedEndDate": "2026-12-01",
        "budget": 250000.0,
        "urlImage": "https://img.example.com/office.png",
        "userId": 7
    })
}

/// A valid team create payload in wire shape
pub fn team_payload(project_id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "projectId": project_id,
        "name": name,
        "specialty": "Masonry"
    })
}
