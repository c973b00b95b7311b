use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        player::{PlayerDto, PlayerRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::player::{Player, PlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

pub static PLAYER_TAG: &str = "player";

/// Register a player on an active team.
///
/// # Access Control
/// - `Admin` - Only admins can register players
///
/// # Returns
/// - `201 Created` - Player registered
/// - `404 Not Found` - Team missing or deleted
/// - `409 Conflict` - Jersey number taken on the team, or name taken
#[utoipa::path(
    post,
    path = "/api/v1/players",
    tag = PLAYER_TAG,
    request_body = PlayerRequestDto,
    responses(
        (status = 201, description = "Player registered", body = PlayerDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Jersey number or player name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PlayerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    let player = PlayerService::new(&state.db)
        .register(PlayerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Active players", body = Vec<PlayerDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_players(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let players = PlayerService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(players.into_iter().map(Player::into_dto).collect::<Vec<_>>()),
    ))
}

/// List the active roster of a team.
///
/// An unknown team yields an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/players/team/{team}",
    tag = PLAYER_TAG,
    params(
        ("team" = String, Path, description = "Team name")
    ),
    responses(
        (status = 200, description = "Active players of the team", body = Vec<PlayerDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_players_by_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let players = PlayerService::new(&state.db).list_by_team(&team).await?;

    Ok((
        StatusCode::OK,
        Json(players.into_iter().map(Player::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/player/{name}",
    tag = PLAYER_TAG,
    params(
        ("name" = String, Path, description = "Player name")
    ),
    responses(
        (status = 200, description = "Player", body = PlayerDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[])?;

    let player = PlayerService::new(&state.db).get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Replace every field of a player, including name and team.
///
/// # Access Control
/// - `Admin` - Only admins can update players
#[utoipa::path(
    put,
    path = "/api/v1/players/{name}",
    tag = PLAYER_TAG,
    params(
        ("name" = String, Path, description = "Current player name")
    ),
    request_body = PlayerRequestDto,
    responses(
        (status = 200, description = "Player updated", body = PlayerDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Team or player not found", body = ErrorDto),
        (status = 409, description = "Jersey number or player name taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
    Json(payload): Json<PlayerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    let player = PlayerService::new(&state.db)
        .update(&name, PlayerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/players/{name}",
    tag = PLAYER_TAG,
    params(
        ("name" = String, Path, description = "Player name")
    ),
    responses(
        (status = 200, description = "Player deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    PlayerService::new(&state.db).delete(&name).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("player deleted"))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/players/{name}/restore",
    tag = PLAYER_TAG,
    params(
        ("name" = String, Path, description = "Player name")
    ),
    responses(
        (status = 200, description = "Player restored", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Player not found or not deleted", body = ErrorDto),
        (status = 409, description = "Name or jersey number taken since deletion", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn restore_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.keys, &headers).require(&[Permission::Admin])?;

    PlayerService::new(&state.db).restore(&name).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("player restored"))))
}
