use sea_orm::DatabaseConnection;

use crate::server::{
    data::{football_match::MatchRepository, team::TeamRepository},
    error::AppError,
    model::football_match::{Match, MatchParams, MatchSchedule},
    util::parse::{parse_match_date, parse_match_time},
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a match between two active teams
    pub async fn register(&self, params: MatchParams) -> Result<Match, AppError> {
        let schedule = self.validate(params).await?;

        let fixture = MatchRepository::new(self.db).create(schedule).await?;

        tracing::info!(
            "Scheduled match {}: {} vs {}",
            fixture.id,
            fixture.home_team,
            fixture.away_team
        );

        Ok(fixture)
    }

    /// Replaces the schedule and teams of an active match
    pub async fn update(&self, id: i32, params: MatchParams) -> Result<Match, AppError> {
        let schedule = self.validate(params).await?;

        MatchRepository::new(self.db)
            .update(id, schedule)
            .await?
            .ok_or_else(|| AppError::NotFound("match not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MatchRepository::new(self.db).soft_delete(id).await? {
            return Err(AppError::NotFound("match not found".to_string()));
        }

        Ok(())
    }

    pub async fn restore(&self, id: i32) -> Result<(), AppError> {
        if !MatchRepository::new(self.db).restore(id).await? {
            return Err(AppError::NotFound(
                "match not found or not deleted".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Match>, AppError> {
        Ok(MatchRepository::new(self.db).get_all().await?)
    }

    pub async fn list_by_team(&self, team_name: &str) -> Result<Vec<Match>, AppError> {
        Ok(MatchRepository::new(self.db).get_by_team(team_name).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Match, AppError> {
        MatchRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("match not found".to_string()))
    }

    /// Checks both teams and parses the kick-off.
    ///
    /// Runs in order: home team active, away team active, teams differ, time parses,
    /// date parses. The first failing check decides the error.
    async fn validate(&self, params: MatchParams) -> Result<MatchSchedule, AppError> {
        let teams = TeamRepository::new(self.db);

        if !teams.exists(&params.home_team).await? {
            return Err(AppError::NotFound("home team not found".to_string()));
        }

        if !teams.exists(&params.away_team).await? {
            return Err(AppError::NotFound("away team not found".to_string()));
        }

        if params.home_team == params.away_team {
            return Err(AppError::BadRequest(
                "home team and away team cannot be the same".to_string(),
            ));
        }

        let match_time = parse_match_time(&params.match_time)?;
        let match_date = parse_match_date(&params.match_date)?;

        Ok(MatchSchedule {
            match_date,
            match_time,
            home_team: params.home_team,
            away_team: params.away_team,
        })
    }
}
