use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        team::{TeamDto, TeamRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::{Team, TeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Register a new team.
///
/// # Access Control
/// - `Admin` - Only admins can register teams
///
/// # Returns
/// - `201 Created` - Team registered
/// - `401 Unauthorized` / `403 Forbidden` - Missing token or not an admin
/// - `409 Conflict` - A team with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    request_body = TeamRequestDto,
    responses(
        (status = 201, description = "Team registered", body = TeamDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Team already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TeamRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    let team = TeamService::new(&state.db)
        .register(TeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// List all active teams.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Active teams", body = Vec<TeamDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let teams = TeamService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(teams.into_iter().map(Team::into_dto).collect::<Vec<_>>()),
    ))
}

/// Replace every field of a team, including its name.
///
/// # Access Control
/// - `Admin` - Only admins can update teams
///
/// # Returns
/// - `200 OK` - Updated team
/// - `404 Not Found` - No active team with that name
/// - `409 Conflict` - Renamed onto a taken name
#[utoipa::path(
    put,
    path = "/api/v1/teams/{name}",
    tag = TEAM_TAG,
    params(
        ("name" = String, Path, description = "Current team name")
    ),
    request_body = TeamRequestDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
    Json(payload): Json<TeamRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    let team = TeamService::new(&state.db)
        .update(&name, TeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Soft delete a team.
///
/// Players and matches that reference the team are left as they are.
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{name}",
    tag = TEAM_TAG,
    params(
        ("name" = String, Path, description = "Team name")
    ),
    responses(
        (status = 200, description = "Team deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    TeamService::new(&state.db).delete(&name).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("team deleted"))))
}

/// Restore a soft-deleted team.
#[utoipa::path(
    patch,
    path = "/api/v1/teams/{name}/restore",
    tag = TEAM_TAG,
    params(
        ("name" = String, Path, description = "Team name")
    ),
    responses(
        (status = 200, description = "Team restored", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team not found or not deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn restore_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    TeamService::new(&state.db).restore(&name).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("team restored"))))
}
