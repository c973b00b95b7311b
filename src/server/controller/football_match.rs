use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        football_match::{MatchDto, MatchRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::football_match::{Match, MatchParams},
        service::football_match::MatchService,
        state::AppState,
    },
};

pub static MATCH_TAG: &str = "match";

/// Schedule a match between two active teams.
///
/// # Access Control
/// - `Admin` - Only admins can schedule matches
///
/// # Returns
/// - `201 Created` - Match scheduled
/// - `400 Bad Request` - Same team on both sides, or malformed date or time
/// - `404 Not Found` - Home or away team missing or deleted
#[utoipa::path(
    post,
    path = "/api/v1/matches",
    tag = MATCH_TAG,
    request_body = MatchRequestDto,
    responses(
        (status = 201, description = "Match scheduled", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Home or away team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<MatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    let fixture = MatchService::new(&state.db)
        .register(MatchParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(fixture.into_dto())))
}

/// List active matches ordered by kick-off.
#[utoipa::path(
    get,
    path = "/api/v1/matches",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Active matches", body = Vec<MatchDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let matches = MatchService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(matches.into_iter().map(Match::into_dto).collect::<Vec<_>>()),
    ))
}

/// List active matches a team plays in, home or away.
#[utoipa::path(
    get,
    path = "/api/v1/matches/team/{team}",
    tag = MATCH_TAG,
    params(
        ("team" = String, Path, description = "Team name")
    ),
    responses(
        (status = 200, description = "Matches involving the team", body = Vec<MatchDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_matches_by_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let matches = MatchService::new(&state.db).list_by_team(&team).await?;

    Ok((
        StatusCode::OK,
        Json(matches.into_iter().map(Match::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/match/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match", body = MatchDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let fixture = MatchService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

/// Replace the schedule and teams of a match.
///
/// Runs the same checks as scheduling before looking the match up.
#[utoipa::path(
    put,
    path = "/api/v1/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    request_body = MatchRequestDto,
    responses(
        (status = 200, description = "Match updated", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team or match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<MatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    let fixture = MatchService::new(&state.db)
        .update(id, MatchParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(fixture.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    MatchService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("match deleted"))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/matches/{id}/restore",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match restored", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match not found or not deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn restore_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    MatchService::new(&state.db).restore(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("match restored"))))
}
