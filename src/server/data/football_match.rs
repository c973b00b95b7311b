//! Match data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::football_match::{Match, MatchSchedule};

pub struct MatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new match and returns it with its assigned id.
    pub async fn create(&self, schedule: MatchSchedule) -> Result<Match, DbErr> {
        let now = Utc::now();

        let entity = entity::football_match::ActiveModel {
            match_date: ActiveValue::Set(schedule.match_date),
            match_time: ActiveValue::Set(schedule.match_time),
            home_team: ActiveValue::Set(schedule.home_team),
            away_team: ActiveValue::Set(schedule.away_team),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Match::from_entity(entity))
    }

    /// Finds an active match by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Match>, DbErr> {
        let entity = entity::prelude::Match::find_by_id(id)
            .filter(entity::football_match::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Match::from_entity))
    }

    /// Checks whether an active match with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Match::find_by_id(id)
            .filter(entity::football_match::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all active matches ordered by kick-off.
    pub async fn get_all(&self) -> Result<Vec<Match>, DbErr> {
        let entities = Self::by_kick_off(entity::prelude::Match::find())
            .filter(entity::football_match::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Match::from_entity).collect())
    }

    /// Gets active matches where the team plays either home or away, ordered by kick-off.
    pub async fn get_by_team(&self, team_name: &str) -> Result<Vec<Match>, DbErr> {
        let entities = Self::by_kick_off(entity::prelude::Match::find())
            .filter(
                Condition::any()
                    .add(entity::football_match::Column::HomeTeam.eq(team_name))
                    .add(entity::football_match::Column::AwayTeam.eq(team_name)),
            )
            .filter(entity::football_match::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Match::from_entity).collect())
    }

    /// Replaces the schedule and teams of an active match.
    ///
    /// # Returns
    /// - `Ok(Some(Match))` - The updated match
    /// - `Ok(None)` - No active match with that id
    pub async fn update(&self, id: i32, schedule: MatchSchedule) -> Result<Option<Match>, DbErr> {
        let result = entity::prelude::Match::update_many()
            .set(entity::football_match::ActiveModel {
                match_date: ActiveValue::Set(schedule.match_date),
                match_time: ActiveValue::Set(schedule.match_time),
                home_team: ActiveValue::Set(schedule.home_team),
                away_team: ActiveValue::Set(schedule.away_team),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::football_match::Column::Id.eq(id))
            .filter(entity::football_match::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Soft deletes an active match. Results recorded for it are left untouched.
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let now = Utc::now();

        let result = entity::prelude::Match::update_many()
            .set(entity::football_match::ActiveModel {
                deleted_at: ActiveValue::Set(Some(now)),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::football_match::Column::Id.eq(id))
            .filter(entity::football_match::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears `deleted_at` on a deleted match.
    pub async fn restore(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Match::update_many()
            .set(entity::football_match::ActiveModel {
                deleted_at: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::football_match::Column::Id.eq(id))
            .filter(entity::football_match::Column::DeletedAt.is_not_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn by_kick_off(select: Select<entity::prelude::Match>) -> Select<entity::prelude::Match> {
        select
            .order_by_asc(entity::football_match::Column::MatchDate)
            .order_by_asc(entity::football_match::Column::MatchTime)
            .order_by_asc(entity::football_match::Column::Id)
    }
}
