//! Wire-format DTOs shared by every HTTP endpoint.
//!
//! Request DTOs are what clients post; response DTOs are what the API returns. Dates are
//! rendered as `YYYY-MM-DD` and times of day as `HH:MM`.

pub mod api;
pub mod auth;
pub mod football_match;
pub mod match_result;
pub mod player;
pub mod team;
