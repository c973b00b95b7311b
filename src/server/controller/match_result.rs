use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        match_result::{MatchResultDto, MatchResultRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::match_result::{MatchResult, MatchResultParams},
        service::match_result::MatchResultService,
        state::AppState,
    },
};

pub static MATCH_RESULT_TAG: &str = "match-result";

/// Record the final score of a match together with its goals.
///
/// The result and every goal are written in one transaction. The number of goals
/// tagged `home` must equal `home_score`, and likewise for `away`.
///
/// # Access Control
/// - `Admin` - Only admins can record results
///
/// # Returns
/// - `201 Created` - Result recorded
/// - `400 Bad Request` - Goal tally does not match the score
/// - `404 Not Found` - Match missing or deleted
/// - `409 Conflict` - The match already has a result
#[utoipa::path(
    post,
    path = "/api/v1/match-results",
    tag = MATCH_RESULT_TAG,
    request_body = MatchResultRequestDto,
    responses(
        (status = 201, description = "Result recorded", body = MatchResultDto),
        (status = 400, description = "Goal tally does not match the score", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 409, description = "Result already exists for the match", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_match_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<MatchResultRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    let result = MatchResultService::new(&state.db)
        .register(MatchResultParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(result.into_dto())))
}

/// List active results, newest first, each with its goals.
#[utoipa::path(
    get,
    path = "/api/v1/match-results",
    tag = MATCH_RESULT_TAG,
    responses(
        (status = 200, description = "Active results", body = Vec<MatchResultDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_match_results(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let results = MatchResultService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(
            results
                .into_iter()
                .map(MatchResult::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/match-result/{id}",
    tag = MATCH_RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Match result ID")
    ),
    responses(
        (status = 200, description = "Match result", body = MatchResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Match result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_match_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let result = MatchResultService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/match-results/match/{match_id}",
    tag = MATCH_RESULT_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Result of the match", body = MatchResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Match result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_match_result_by_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let result = MatchResultService::new(&state.db)
        .get_by_match_id(match_id)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Replace the score and the full goal list of a result.
///
/// The stored match association is kept; `match_id` in the body is ignored.
#[utoipa::path(
    put,
    path = "/api/v1/match-results/{id}",
    tag = MATCH_RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Match result ID")
    ),
    request_body = MatchResultRequestDto,
    responses(
        (status = 200, description = "Result updated", body = MatchResultDto),
        (status = 400, description = "Goal tally does not match the score", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_match_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<MatchResultRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    let result = MatchResultService::new(&state.db)
        .update(id, MatchResultParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/match-results/{id}",
    tag = MATCH_RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Match result ID")
    ),
    responses(
        (status = 200, description = "Result deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match result not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_match_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    MatchResultService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("match result deleted"))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/match-results/{id}/restore",
    tag = MATCH_RESULT_TAG,
    params(
        ("id" = i32, Path, description = "Match result ID")
    ),
    responses(
        (status = 200, description = "Result restored", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match result not found or not deleted", body = ErrorDto),
        (status = 409, description = "Another active result exists for the match", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn restore_match_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    MatchResultService::new(&state.db).restore(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("match result restored"))))
}
