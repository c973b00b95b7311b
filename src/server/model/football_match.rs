//! Match domain model and parameters.
//!
//! `MatchParams` holds the request fields as submitted; the service validates the
//! teams first and only then parses the date and time into a [`MatchSchedule`] that the
//! repository can store.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::model::football_match::{MatchDto, MatchRequestDto};

/// Wire format for match dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format for kick-off times, 24-hour clock.
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i32,
    pub match_date: NaiveDate,
    pub match_time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::football_match::Model) -> Self {
        Self {
            id: entity.id,
            match_date: entity.match_date,
            match_time: entity.match_time,
            home_team: entity.home_team,
            away_team: entity.away_team,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    /// Converts to a DTO, rendering the date as `YYYY-MM-DD` and the time as `HH:MM`.
    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            match_date: self.match_date.format(DATE_FORMAT).to_string(),
            match_time: self.match_time.format(TIME_FORMAT).to_string(),
            home_team: self.home_team,
            away_team: self.away_team,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// Unvalidated match fields as submitted by the client.
#[derive(Debug, Clone)]
pub struct MatchParams {
    pub match_date: String,
    pub match_time: String,
    pub home_team: String,
    pub away_team: String,
}

impl MatchParams {
    pub fn from_dto(dto: MatchRequestDto) -> Self {
        Self {
            match_date: dto.match_date,
            match_time: dto.match_time,
            home_team: dto.home_team,
            away_team: dto.away_team,
        }
    }
}

/// Validated match fields ready to be written.
#[derive(Debug, Clone)]
pub struct MatchSchedule {
    pub match_date: NaiveDate,
    pub match_time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
}
