//! Token claims and role permissions.

use serde::{Deserialize, Serialize};

/// Role granting access to every mutating endpoint.
pub const ADMIN_ROLE: &str = "admin";
/// Role assigned to read-only accounts.
pub const USER_ROLE: &str = "user";

/// Claims carried inside an issued bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub role: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Not-before, seconds since the Unix epoch.
    pub nbf: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}
