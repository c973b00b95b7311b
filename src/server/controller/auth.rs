use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

pub static AUTH_TAG: &str = "auth";

/// Exchange credentials for a bearer token.
///
/// The token is valid for 24 hours and must be sent as `Authorization: Bearer <token>`
/// on every other endpoint.
///
/// # Returns
/// - `200 OK` - Token issued
/// - `401 Unauthorized` - Unknown user or wrong password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthService::new(&state.db, &state.keys)
        .login(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            token_type: "Bearer".to_string(),
        }),
    ))
}
