use crate::{AppState, health};

use crate::api::projects::projects::{
    create_project, delete_project, get_project, list_machines_by_project,
    list_materials_by_project, list_projects, update_project,
};
use crate::api::teams::teams::{
    create_team, delete_team, get_team, list_teams_by_project, update_team,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Project endpoints
        .route("/api/v1/projects", post(create_project).get(list_projects))
        .route(
            "/api/v1/projects/{project_id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/api/v1/projects/{project_id}/materials",
            get(list_materials_by_project),
        )
        .route(
            "/api/v1/projects/{project_id}/machines",
            get(list_machines_by_project),
        )
        // Team endpoints
        .route("/api/v1/teams", post(create_team))
        .route(
            "/api/v1/teams/{team_id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route(
            "/api/v1/teams/projectId/{project_id}",
            get(list_teams_by_project),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
