use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::Claims,
    service::auth::TokenKeys,
};

pub enum Permission {
    Admin,
}

/// Bearer token gate for request handlers.
///
/// Every endpoint except ping and login calls [`AuthGuard::require`]; read endpoints pass
/// no permissions and only need a valid token.
pub struct AuthGuard<'a> {
    keys: &'a TokenKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(keys: &'a TokenKeys, headers: &'a HeaderMap) -> Self {
        Self { keys, headers }
    }

    /// Validates the request's bearer token and checks the given permissions.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token valid and every permission granted
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Header malformed or token rejected
    /// - `Err(AuthError::Forbidden)` - Token valid but a permission is missing
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::InvalidToken("malformed authorization header".to_string()))?;

        let claims = self.keys.validate(token)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !claims.is_admin() {
                        return Err(AuthError::Forbidden(claims.username).into());
                    }
                }
            }
        }

        Ok(claims)
    }
}
