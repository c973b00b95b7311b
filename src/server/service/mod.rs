//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They run the read checks
//! that give a request its error message (existence of referenced rows, uniqueness,
//! score and goal agreement), delegate the write to a repository, and map the outcome
//! onto [`AppError`](crate::server::error::AppError). Constraint violations raised by the
//! store during the write are mapped the same way, so two concurrent writers racing past
//! the same check still get a `Conflict`.

pub mod auth;
pub mod football_match;
pub mod match_result;
pub mod player;
pub mod team;
