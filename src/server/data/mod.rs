//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never touches entities directly. Every read of a soft-deletable table
//! filters on `deleted_at IS NULL` unless it is explicitly looking for deleted rows.
//! Errors are plain `DbErr`; the service layer decides what they mean to a client.

pub mod football_match;
pub mod match_result;
pub mod player;
pub mod team;
pub mod user;
