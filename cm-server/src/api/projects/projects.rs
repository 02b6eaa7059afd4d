//! Project REST API handlers
//!
//! Projects surface through their Dashboard aggregate; handlers unwrap
//! the project portion via the aggregate accessor before assembling the
//! response resource. Materials and machines hang off the project routes
//! as read-only, project-scoped listings.

use crate::{
    ApiError, ApiResult, AppState, CreateProjectResource, MachineResource, MaterialResource,
    ProjectResource,
};

use cm_core::{
    CreateProjectCommand, DeleteProjectCommand, GetAllMachinesByProjectIdQuery,
    GetAllMaterialsByProjectIdQuery, GetAllProjectsQuery, GetProjectByIdQuery, ProjectId,
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

/// POST /api/v1/projects
///
/// Create a new project
pub async fn create_project(
    State(state): State<AppState>,
    Json(resource): Json<CreateProjectResource>,
) -> ApiResult<(StatusCode, Json<ProjectResource>)> {
    let command = CreateProjectCommand::from(resource);

    let dashboard = state
        .project_command_service
        .handle_create(command)
        .await?
        .ok_or_else(|| ApiError::Validation {
            message: "Project create command rejected".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(dashboard.into_project().into()),
    ))
}

/// GET /api/v1/projects
///
/// List all projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProjectResource>>> {
    let dashboards = state
        .project_query_service
        .handle_get_all(GetAllProjectsQuery)
        .await?;

    Ok(Json(
        dashboards
            .into_iter()
            .map(|dashboard| dashboard.into_project().into())
            .collect(),
    ))
}

/// GET /api/v1/projects/:project_id
///
/// Get a single project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<ProjectResource>> {
    let dashboard = state
        .project_query_service
        .handle_get_by_id(GetProjectByIdQuery { project_id })
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Project {} not found", project_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(dashboard.into_project().into()))
}

/// PUT /api/v1/projects/:project_id
///
/// Replace the mutable fields of a project. The body shape is the same
/// as create.
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(resource): Json<CreateProjectResource>,
) -> ApiResult<Json<ProjectResource>> {
    let command = resource.into_update_command(project_id);

    let dashboard = state
        .project_command_service
        .handle_update(command)
        .await?
        .ok_or_else(|| ApiError::Validation {
            message: format!("Project update command rejected for id {}", project_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(dashboard.into_project().into()))
}

/// DELETE /api/v1/projects/:project_id
///
/// Delete a project. Always succeeds, even for absent ids.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .project_command_service
        .handle_delete(DeleteProjectCommand { project_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects/:project_id/materials
///
/// List all materials assigned to a project
pub async fn list_materials_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Vec<MaterialResource>>> {
    let materials = state
        .material_query_service
        .handle_get_all_by_project_id(GetAllMaterialsByProjectIdQuery {
            project: ProjectId::new(project_id),
        })
        .await?;

    Ok(Json(materials.into_iter().map(MaterialResource::from).collect()))
}

/// GET /api/v1/projects/:project_id/machines
///
/// List all machines assigned to a project
pub async fn list_machines_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Vec<MachineResource>>> {
    let machines = state
        .machine_query_service
        .handle_get_all_by_project_id(GetAllMachinesByProjectIdQuery {
            project: ProjectId::new(project_id),
        })
        .await?;

    Ok(Json(machines.into_iter().map(MachineResource::from).collect()))
}
