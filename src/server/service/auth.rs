//! Login and bearer token handling.
//!
//! Tokens are HS256 JSON Web Tokens signed with the `JWT_SECRET` from configuration and
//! valid for 24 hours. Passwords are stored as bcrypt hashes.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{Claims, ADMIN_ROLE},
        user::CreateUserParams,
    },
};

/// Lifetime of an issued token.
const TOKEN_TTL_HOURS: i64 = 24;

/// Signing and verification keys derived from the shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for the user, valid from now for [`TOKEN_TTL_HOURS`].
    pub fn issue(&self, username: &str, role: &str) -> Result<String, AppError> {
        let now = Utc::now();

        self.encode(&Claims {
            username: username.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        })
    }

    /// Verifies the signature, expiry and not-before time of a token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AppError::AuthErr(AuthError::InvalidToken))` - Any validation failure
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(data.claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &self.encoding,
        )?)
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a TokenKeys) -> Self {
        Self { db, keys }
    }

    /// Exchanges a username and password for a bearer token.
    ///
    /// Unknown users, wrong passwords and unreadable hashes all fail the same way so the
    /// response does not reveal which one it was.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Login rejected
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.password_hash).unwrap_or(false) {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.keys.issue(&user.username, &user.role)
    }

    /// Creates the admin account if no user with that name exists yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Account created
    /// - `Ok(false)` - Username already taken; nothing changed
    pub async fn ensure_admin(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        repo.create(CreateUserParams {
            username: username.to_string(),
            password_hash,
            role: ADMIN_ROLE.to_string(),
        })
        .await?;

        Ok(true)
    }
}
