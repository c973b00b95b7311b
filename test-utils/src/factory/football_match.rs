//! Match factory for creating test fixtures.

use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches between two teams.
///
/// Defaults to 2025-06-01 at 18:00.
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    match_date: NaiveDate,
    match_time: NaiveTime,
    home_team: String,
    away_team: String,
}

impl<'a> MatchFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            db,
            match_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default(),
            match_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
            home_team: home_team.into(),
            away_team: away_team.into(),
        }
    }

    pub fn match_date(mut self, match_date: NaiveDate) -> Self {
        self.match_date = match_date;
        self
    }

    pub fn match_time(mut self, match_time: NaiveTime) -> Self {
        self.match_time = match_time;
        self
    }

    /// Builds and inserts the match entity into the database.
    pub async fn build(self) -> Result<entity::football_match::Model, DbErr> {
        let now = Utc::now();
        entity::football_match::ActiveModel {
            id: ActiveValue::NotSet,
            match_date: ActiveValue::Set(self.match_date),
            match_time: ActiveValue::Set(self.match_time),
            home_team: ActiveValue::Set(self.home_team),
            away_team: ActiveValue::Set(self.away_team),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a match with default schedule between the given teams.
pub async fn create_match(
    db: &DatabaseConnection,
    home_team: impl Into<String>,
    away_team: impl Into<String>,
) -> Result<entity::football_match::Model, DbErr> {
    MatchFactory::new(db, home_team, away_team).build().await
}
