//! SeaORM entity models for the football management schema.
//!
//! Every table except `users` is soft-deletable through a nullable `deleted_at`
//! column. Relations between aggregates are expressed by business key (team name)
//! or numeric id without database-level cascades.

pub mod prelude;

pub mod football_match;
pub mod goal;
pub mod match_result;
pub mod player;
pub mod team;
pub mod user;
