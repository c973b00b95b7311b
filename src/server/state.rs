//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Both fields are cheap to clone: the connection is a pool handle and
//! the token keys are small byte buffers.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::TokenKeys;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Keys used to sign issued tokens and verify incoming ones.
    pub keys: TokenKeys,
}

impl AppState {
    pub fn new(db: DatabaseConnection, keys: TokenKeys) -> Self {
        Self { db, keys }
    }
}
