//! Match result and goal factories.
//!
//! These insert rows directly and skip the goal tally check, which makes them useful
//! for arranging inconsistent or pre-existing state in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::goal::Side;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a match result row with the given scores and no goals.
pub async fn create_match_result(
    db: &DatabaseConnection,
    match_id: i32,
    home_score: i32,
    away_score: i32,
) -> Result<entity::match_result::Model, DbErr> {
    let now = Utc::now();
    entity::match_result::ActiveModel {
        id: ActiveValue::NotSet,
        match_id: ActiveValue::Set(match_id),
        home_score: ActiveValue::Set(home_score),
        away_score: ActiveValue::Set(away_score),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Creates a goal for the result with a generated scorer name.
///
/// # Arguments
/// - `db` - Database connection
/// - `result` - Result the goal belongs to; its match id is copied onto the goal
/// - `side` - Side the goal counts for
/// - `goal_time` - Free-form time of scoring, e.g. `"45:00"`
pub async fn create_goal(
    db: &DatabaseConnection,
    result: &entity::match_result::Model,
    side: Side,
    goal_time: impl Into<String>,
) -> Result<entity::goal::Model, DbErr> {
    let now = Utc::now();
    entity::goal::ActiveModel {
        id: ActiveValue::NotSet,
        match_id: ActiveValue::Set(result.match_id),
        match_result_id: ActiveValue::Set(result.id),
        scorer: ActiveValue::Set(format!("Scorer {}", next_id())),
        goal_time: ActiveValue::Set(goal_time.into()),
        team: ActiveValue::Set(side),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
