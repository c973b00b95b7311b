//! HTTP request handlers.
//!
//! Controllers check access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert request DTOs into params, call a service, and convert the returned domain
//! model back into a DTO.

pub mod auth;
pub mod football_match;
pub mod match_result;
pub mod ping;
pub mod player;
pub mod team;

#[cfg(test)]
mod test;
