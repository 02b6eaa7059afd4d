//! Team REST API handlers
//!
//! Create is a two-step flow: the command service reports the assigned id
//! and the handler re-fetches through the query side to build the
//! response resource.

use crate::{ApiError, ApiResult, AppState, CreateTeamResource, TeamResource, UpdateTeamResource};

use cm_core::{
    CreateTeamCommand, DeleteTeamCommand, GetAllTeamsByProjectIdQuery, GetTeamByIdQuery, ProjectId,
};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/teams
///
/// Create a new team on an existing project
pub async fn create_team(
    State(state): State<AppState>,
    Json(resource): Json<CreateTeamResource>,
) -> ApiResult<(StatusCode, Json<TeamResource>)> {
    let command = CreateTeamCommand::from(resource);

    let team_id = state
        .team_command_service
        .handle_create(command)
        .await?
        .ok_or_else(|| ApiError::Validation {
            message: "Team create command rejected".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let team = state
        .team_query_service
        .handle_get_by_id(GetTeamByIdQuery { team_id })
        .await?
        .ok_or_else(|| ApiError::Validation {
            message: format!("Created team {} could not be read back", team_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok((StatusCode::CREATED, Json(team.into())))
}

/// GET /api/v1/teams/:team_id
///
/// Get a single team by ID
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<Json<TeamResource>> {
    let team = state
        .team_query_service
        .handle_get_by_id(GetTeamByIdQuery { team_id })
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Team {} not found", team_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(team.into()))
}

/// GET /api/v1/teams/projectId/:project_id
///
/// List all teams working on a project
pub async fn list_teams_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Vec<TeamResource>>> {
    let teams = state
        .team_query_service
        .handle_get_all_by_project_id(GetAllTeamsByProjectIdQuery {
            project: ProjectId::new(project_id),
        })
        .await?;

    Ok(Json(teams.into_iter().map(TeamResource::from).collect()))
}

/// PUT /api/v1/teams/:team_id
///
/// Update a team's name and specialty
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Json(resource): Json<UpdateTeamResource>,
) -> ApiResult<Json<TeamResource>> {
    let command = resource.into_command(team_id);

    let team = state
        .team_command_service
        .handle_update(command)
        .await?
        .ok_or_else(|| ApiError::Validation {
            message: format!("Team update command rejected for id {}", team_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(team.into()))
}

/// DELETE /api/v1/teams/:team_id
///
/// Delete a team. Always reports success, even for absent ids.
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<&'static str> {
    state
        .team_command_service
        .handle_delete(DeleteTeamCommand { team_id })
        .await?;

    Ok("Team deleted successfully")
}
