use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("authorization header is required")]
    MissingToken,

    /// Bearer token failed signature, expiry or not-before validation.
    #[error("invalid or expired token: {0}")]
    InvalidToken(String),

    /// Unknown username or wrong password on login.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Authenticated user lacks the role required by the endpoint.
    ///
    /// # Fields
    /// - Username of the caller
    #[error("user '{0}' does not have the required role")]
    Forbidden(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidCredentials` → 401 Unauthorized
/// - `Forbidden` → 403 Forbidden
///
/// Token validation details are logged at debug level and never returned to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "authorization header is required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(reason) => {
                tracing::debug!("Rejected bearer token: {}", reason);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "invalid or expired token".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::Forbidden(username) => {
                tracing::debug!("Denied {} access to an admin endpoint", username);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "forbidden".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
