//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the fields an
//! operation needs from the service layer down to the repositories.

pub mod auth;
pub mod football_match;
pub mod match_result;
pub mod player;
pub mod team;
pub mod user;
