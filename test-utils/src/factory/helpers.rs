//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates two teams and a match between them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((home, away, fixture))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_teams(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::team::Model,
        entity::team::Model,
        entity::football_match::Model,
    ),
    DbErr,
> {
    let home = crate::factory::team::create_team(db).await?;
    let away = crate::factory::team::create_team(db).await?;
    let fixture = crate::factory::football_match::create_match(db, &home.name, &away.name).await?;

    Ok((home, away, fixture))
}

/// Marks a team as soft-deleted.
pub async fn soft_delete_team(
    db: &DatabaseConnection,
    team: entity::team::Model,
) -> Result<entity::team::Model, DbErr> {
    let mut active = team.into_active_model();
    active.deleted_at = ActiveValue::Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Marks a match as soft-deleted.
pub async fn soft_delete_match(
    db: &DatabaseConnection,
    fixture: entity::football_match::Model,
) -> Result<entity::football_match::Model, DbErr> {
    let mut active = fixture.into_active_model();
    active.deleted_at = ActiveValue::Set(Some(chrono::Utc::now()));
    active.update(db).await
}
