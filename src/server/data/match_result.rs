//! Match result data repository.
//!
//! A result and its goals are written together: `create` and `update` each run inside a
//! single transaction that is committed only after every goal row has been written, and
//! rolled back on the first failure. Each goal belongs to the result it was submitted
//! with; an update still clears every goal recorded for the stored result's match,
//! soft-deleted goals included, before inserting the new set.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::model::match_result::{GoalParams, MatchResult, MatchResultParams};

pub struct MatchResultRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchResultRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a result and its goals atomically.
    ///
    /// # Returns
    /// - `Ok(MatchResult)` - The stored result hydrated with its goals
    /// - `Err(DbErr)` - Any insert failed; nothing was written
    pub async fn create(&self, params: MatchResultParams) -> Result<MatchResult, DbErr> {
        let txn = self.db.begin().await?;

        let result = match insert_result(&txn, params).await {
            Ok(result) => result,
            Err(err) => {
                txn.rollback().await?;
                return Err(err);
            }
        };

        txn.commit().await?;

        self.hydrate(result).await
    }

    /// Replaces the scores and the goal set of an active result atomically.
    ///
    /// `params.match_id` is ignored; goals are replaced for the match the stored result
    /// belongs to.
    ///
    /// # Returns
    /// - `Ok(Some(MatchResult))` - The updated result hydrated with its new goals
    /// - `Ok(None)` - No active result with that id; nothing was written
    /// - `Err(DbErr)` - A write failed; nothing was written
    pub async fn update(
        &self,
        id: i32,
        params: MatchResultParams,
    ) -> Result<Option<MatchResult>, DbErr> {
        let txn = self.db.begin().await?;

        match replace_result(&txn, id, params).await {
            Ok(true) => txn.commit().await?,
            Ok(false) => {
                txn.rollback().await?;
                return Ok(None);
            }
            Err(err) => {
                txn.rollback().await?;
                return Err(err);
            }
        }

        self.find_by_id(id).await
    }

    /// Finds an active result by id, hydrated with its goals.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MatchResult>, DbErr> {
        let entity = entity::prelude::MatchResult::find_by_id(id)
            .filter(entity::match_result::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(self.hydrate(entity).await?)),
            None => Ok(None),
        }
    }

    /// Finds the active result recorded for a match, hydrated with its goals.
    pub async fn find_by_match_id(&self, match_id: i32) -> Result<Option<MatchResult>, DbErr> {
        let entity = entity::prelude::MatchResult::find()
            .filter(entity::match_result::Column::MatchId.eq(match_id))
            .filter(entity::match_result::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(self.hydrate(entity).await?)),
            None => Ok(None),
        }
    }

    /// Checks whether an active result is already recorded for the match.
    pub async fn exists_for_match(&self, match_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MatchResult::find()
            .filter(entity::match_result::Column::MatchId.eq(match_id))
            .filter(entity::match_result::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all active results, newest first, each hydrated with its goals.
    pub async fn get_all(&self) -> Result<Vec<MatchResult>, DbErr> {
        let results = entity::prelude::MatchResult::find()
            .filter(entity::match_result::Column::DeletedAt.is_null())
            .order_by_desc(entity::match_result::Column::CreatedAt)
            .order_by_desc(entity::match_result::Column::Id)
            .all(self.db)
            .await?;

        if results.is_empty() {
            return Ok(Vec::new());
        }

        // Fetch goals for every result in one query
        let result_ids: Vec<i32> = results.iter().map(|r| r.id).collect();
        let mut goals_by_result: HashMap<i32, Vec<entity::goal::Model>> = HashMap::new();
        for goal in active_goals()
            .filter(entity::goal::Column::MatchResultId.is_in(result_ids))
            .all(self.db)
            .await?
        {
            goals_by_result
                .entry(goal.match_result_id)
                .or_default()
                .push(goal);
        }

        Ok(results
            .into_iter()
            .map(|result| {
                let goals = goals_by_result.remove(&result.id).unwrap_or_default();
                MatchResult::from_entity(result, goals)
            })
            .collect())
    }

    /// Soft deletes an active result. Its goals stay in place.
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let now = Utc::now();

        let result = entity::prelude::MatchResult::update_many()
            .set(entity::match_result::ActiveModel {
                deleted_at: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::match_result::Column::Id.eq(id))
            .filter(entity::match_result::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears `deleted_at` on a deleted result.
    ///
    /// Fails with a unique violation if the match has since received another result.
    pub async fn restore(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MatchResult::update_many()
            .set(entity::match_result::ActiveModel {
                deleted_at: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::match_result::Column::Id.eq(id))
            .filter(entity::match_result::Column::DeletedAt.is_not_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn hydrate(&self, result: entity::match_result::Model) -> Result<MatchResult, DbErr> {
        let goals = active_goals()
            .filter(entity::goal::Column::MatchResultId.eq(result.id))
            .all(self.db)
            .await?;

        Ok(MatchResult::from_entity(result, goals))
    }
}

async fn insert_result(
    txn: &DatabaseTransaction,
    params: MatchResultParams,
) -> Result<entity::match_result::Model, DbErr> {
    let now = Utc::now();

    let result = entity::match_result::ActiveModel {
        match_id: ActiveValue::Set(params.match_id),
        home_score: ActiveValue::Set(params.home_score),
        away_score: ActiveValue::Set(params.away_score),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    insert_goals(txn, &result, params.goals).await?;

    Ok(result)
}

/// Returns `false` when there is no active result with `id` to replace.
async fn replace_result(
    txn: &DatabaseTransaction,
    id: i32,
    params: MatchResultParams,
) -> Result<bool, DbErr> {
    let Some(stored) = entity::prelude::MatchResult::find_by_id(id)
        .filter(entity::match_result::Column::DeletedAt.is_null())
        .one(txn)
        .await?
    else {
        return Ok(false);
    };

    let updated = entity::prelude::MatchResult::update_many()
        .set(entity::match_result::ActiveModel {
            home_score: ActiveValue::Set(params.home_score),
            away_score: ActiveValue::Set(params.away_score),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .filter(entity::match_result::Column::Id.eq(id))
        .filter(entity::match_result::Column::DeletedAt.is_null())
        .exec(txn)
        .await?;

    if updated.rows_affected == 0 {
        return Ok(false);
    }

    entity::prelude::Goal::delete_many()
        .filter(entity::goal::Column::MatchId.eq(stored.match_id))
        .exec(txn)
        .await?;

    insert_goals(txn, &stored, params.goals).await?;

    Ok(true)
}

/// Active goals ordered by time of scoring, ties broken by insertion order.
fn active_goals() -> sea_orm::Select<entity::prelude::Goal> {
    entity::prelude::Goal::find()
        .filter(entity::goal::Column::DeletedAt.is_null())
        .order_by_asc(entity::goal::Column::GoalTime)
        .order_by_asc(entity::goal::Column::Id)
}

async fn insert_goals<C: ConnectionTrait>(
    conn: &C,
    result: &entity::match_result::Model,
    goals: Vec<GoalParams>,
) -> Result<(), DbErr> {
    let now = Utc::now();

    for goal in goals {
        entity::goal::ActiveModel {
            match_id: ActiveValue::Set(result.match_id),
            match_result_id: ActiveValue::Set(result.id),
            scorer: ActiveValue::Set(goal.scorer),
            goal_time: ActiveValue::Set(goal.goal_time),
            team: ActiveValue::Set(goal.team),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}
